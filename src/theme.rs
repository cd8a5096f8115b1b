//! Two-state page theme and its toggle transition.
//!
//! DESIGN
//! ======
//! The transition is a pure function over the root element's raw attribute
//! value so it can be tested without a browser. Anything other than exactly
//! `light` counts as dark for transition purposes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme applied to the page root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Attribute/storage spelling of this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Theme named by `raw`, `None` for anything but `light` or `dark`.
    #[must_use]
    pub fn from_attribute(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Theme whose icon matches a raw attribute value: `light` shows the
    /// light marker, any other value the dark one.
    #[must_use]
    pub fn shown_for(raw: &str) -> Self {
        Self::after(Some(raw)).next()
    }

    /// The other theme.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme to switch to given the root element's current attribute value.
    ///
    /// `Some("light")` yields [`Theme::Dark`]; unset, empty, `dark`, and
    /// unrecognized values all yield [`Theme::Light`].
    #[must_use]
    pub fn after(current: Option<&str>) -> Self {
        match current {
            Some("light") => Self::Dark,
            _ => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_attribute(s).ok_or_else(|| ThemeError::InvalidTheme(s.to_owned()))
    }
}
