//! Names of the storage key and page elements the controller binds to.
//!
//! Every field has a default matching the stock page markup, so an empty JSON
//! object is a valid configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Which element carries the theme attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootTarget {
    /// `document.body`
    #[default]
    Body,
    /// `document.documentElement` (`<html>`)
    Document,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub root: RootTarget,
    pub toggle_id: String,
    /// CSS selector for the icon, scoped to the toggle control.
    pub icon_selector: String,
    /// Marker class shown while the light theme is active.
    pub light_icon_class: String,
    /// Marker class shown while the dark theme is active.
    pub dark_icon_class: String,
    pub log_level: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".into(),
            attribute: "data-theme".into(),
            root: RootTarget::Body,
            toggle_id: "theme-toggle".into(),
            icon_selector: "i".into(),
            light_icon_class: "fa-sun".into(),
            dark_icon_class: "fa-moon".into(),
            log_level: "info".into(),
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] for malformed JSON or unknown fields and
    /// [`ThemeError::InvalidConfig`] for values that fail [`Self::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every name is usable against a real page.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let required = [
            ("storage_key", &self.storage_key),
            ("attribute", &self.attribute),
            ("toggle_id", &self.toggle_id),
            ("icon_selector", &self.icon_selector),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ThemeError::InvalidConfig(format!("{field} must not be empty")));
            }
        }

        // DOMTokenList rejects empty tokens and tokens containing whitespace.
        for (field, class) in [
            ("light_icon_class", &self.light_icon_class),
            ("dark_icon_class", &self.dark_icon_class),
        ] {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(ThemeError::InvalidConfig(format!(
                    "{field} must be a single class token, got {class:?}"
                )));
            }
        }
        if self.light_icon_class == self.dark_icon_class {
            return Err(ThemeError::InvalidConfig(
                "light_icon_class and dark_icon_class must differ".into(),
            ));
        }

        self.level()?;
        Ok(())
    }

    /// Parsed `log_level`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] for names `log` does not know.
    pub fn level(&self) -> Result<log::Level, ThemeError> {
        log::Level::from_str(&self.log_level).map_err(|_| {
            ThemeError::InvalidConfig(format!("unknown log_level {:?}", self.log_level))
        })
    }
}
