//! Theme controller: restore on load, flip on activation.
//!
//! DESIGN
//! ======
//! The controller owns injected handles to the root element, the optional
//! icon, and storage. It never looks anything up on its own, so the same code
//! runs in the browser and against in-memory elements.
//!
//! After `init`, the root attribute and the persisted value agree, except on
//! a first visit with nothing persisted. Then the root attribute stays unset.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. A failed read restores nothing and a failed write
//! still flips the page; both are logged. DOM failures propagate.

use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::dom::{IconElement, RootElement, ToggleControl};
use crate::error::ThemeError;
use crate::storage::ThemeStorage;
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<R, I, S> {
    root: R,
    icon: Option<I>,
    storage: S,
    config: ThemeConfig,
}

impl<R, I, S> ThemeController<R, I, S>
where
    R: RootElement,
    I: IconElement,
    S: ThemeStorage,
{
    #[must_use]
    pub fn new(root: R, icon: Option<I>, storage: S, config: ThemeConfig) -> Self {
        Self {
            root,
            icon,
            storage,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Theme currently on the root element, `None` when unset or unrecognized.
    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        let raw = self.root.attribute(&self.config.attribute)?;
        Theme::from_attribute(&raw)
    }

    /// Copy the persisted value, if any, onto the root element and match the icon.
    ///
    /// The stored string is applied verbatim; a value other than `light` puts
    /// the icon in its dark state. Returns the theme the icon now shows. With
    /// nothing persisted (or an empty or unreadable value) the page is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] when the root or icon rejects the mutation.
    pub fn init(&self) -> Result<Option<Theme>, ThemeError> {
        let Some(raw) = self.persisted() else {
            log::debug!("no persisted theme; leaving {} unset", self.config.attribute);
            return Ok(None);
        };
        self.root.set_attribute(&self.config.attribute, &raw)?;
        let theme = Theme::shown_for(&raw);
        if Theme::from_attribute(&raw).is_none() {
            log::warn!("persisted theme {raw:?} is neither light nor dark; showing {theme} icon");
        }
        self.update_icon(theme)?;
        log::debug!("restored theme {raw:?}");
        Ok(Some(theme))
    }

    /// Flip the theme on the root element, persist it, and update the icon.
    ///
    /// Only an attribute of exactly `light` flips to dark; anything else,
    /// including unset, flips to light.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] when the root or icon rejects the mutation.
    /// Storage write failures are logged, not returned.
    pub fn toggle(&self) -> Result<Theme, ThemeError> {
        let current = self.root.attribute(&self.config.attribute);
        let next = Theme::after(current.as_deref());

        self.root.set_attribute(&self.config.attribute, next.as_str())?;
        if let Err(e) = self.storage.set(&self.config.storage_key, next.as_str()) {
            log::warn!("theme {next} applied but not persisted: {e}");
        }
        self.update_icon(next)?;

        log::debug!("theme toggled {current:?} -> {next}");
        Ok(next)
    }

    /// Swap the icon's marker class to match `theme`. No-op without an icon.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] when the icon rejects the mutation.
    pub fn update_icon(&self, theme: Theme) -> Result<(), ThemeError> {
        let Some(icon) = &self.icon else {
            return Ok(());
        };
        let (hide, show) = match theme {
            Theme::Light => (&self.config.dark_icon_class, &self.config.light_icon_class),
            Theme::Dark => (&self.config.light_icon_class, &self.config.dark_icon_class),
        };
        icon.remove_class(hide)?;
        icon.add_class(show)
    }

    fn persisted(&self) -> Option<String> {
        match self.storage.get(&self.config.storage_key) {
            Ok(Some(raw)) if !raw.is_empty() => Some(raw),
            Ok(_) => None,
            Err(e) => {
                log::warn!("theme storage unreadable, keeping default: {e}");
                None
            }
        }
    }
}

/// Restore the persisted theme, then wire `toggle` activations to the controller.
///
/// Returns whether a listener was attached; `false` when there is no toggle
/// control on the page.
///
/// # Errors
///
/// Returns an error when restoring touches a failing element or the listener
/// cannot be attached.
pub fn mount<R, I, S, T>(
    controller: Rc<ThemeController<R, I, S>>,
    toggle: Option<&T>,
) -> Result<bool, ThemeError>
where
    R: RootElement + 'static,
    I: IconElement + 'static,
    S: ThemeStorage + 'static,
    T: ToggleControl + ?Sized,
{
    controller.init()?;

    let Some(toggle) = toggle else {
        log::info!("no #{} control; theme toggle not bound", controller.config().toggle_id);
        return Ok(false);
    };

    let handler = Rc::clone(&controller);
    toggle.on_activate(Box::new(move || {
        if let Err(e) = handler.toggle() {
            log::error!("theme toggle failed: {e}");
        }
    }))?;
    log::info!("theme toggle bound to #{}", controller.config().toggle_id);
    Ok(true)
}
