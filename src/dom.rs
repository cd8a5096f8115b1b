//! Page element seams consumed by the controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller touches three page elements: the root that carries the
//! theme attribute, the optional icon whose marker class reflects the theme,
//! and the optional toggle control whose activation flips it. Each is a
//! trait here so the controller runs unchanged against live DOM elements
//! in the browser and against the in-memory elements below in tests.
//!
//! DOM handles are shared references with interior mutability, so every
//! method takes `&self`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Element carrying the theme attribute.
pub trait RootElement {
    /// Current value of attribute `name`, `None` when unset.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Set attribute `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] when the element rejects the mutation.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;
}

/// Element whose class list carries the theme marker.
pub trait IconElement {
    /// Add `class` to the class list. Adding a present class is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] when the element rejects the mutation.
    fn add_class(&self, class: &str) -> Result<(), ThemeError>;

    /// Remove `class` from the class list. Removing an absent class is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] when the element rejects the mutation.
    fn remove_class(&self, class: &str) -> Result<(), ThemeError>;

    /// Whether `class` is currently in the class list.
    fn has_class(&self, class: &str) -> bool;
}

/// Control that fires an activation event (a click in the browser).
pub trait ToggleControl {
    /// Register `handler` to run on every activation.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] when the listener cannot be attached.
    fn on_activate(&self, handler: Box<dyn FnMut()>) -> Result<(), ThemeError>;
}

impl<T: RootElement + ?Sized> RootElement for &T {
    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set_attribute(name, value)
    }
}

impl<T: RootElement + ?Sized> RootElement for Rc<T> {
    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set_attribute(name, value)
    }
}

impl<T: IconElement + ?Sized> IconElement for &T {
    fn add_class(&self, class: &str) -> Result<(), ThemeError> {
        (**self).add_class(class)
    }

    fn remove_class(&self, class: &str) -> Result<(), ThemeError> {
        (**self).remove_class(class)
    }

    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }
}

impl<T: IconElement + ?Sized> IconElement for Rc<T> {
    fn add_class(&self, class: &str) -> Result<(), ThemeError> {
        (**self).add_class(class)
    }

    fn remove_class(&self, class: &str) -> Result<(), ThemeError> {
        (**self).remove_class(class)
    }

    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }
}

/// In-memory element usable as both root and icon.
#[derive(Debug, Default)]
pub struct MemoryElement {
    attributes: RefCell<HashMap<String, String>>,
    classes: RefCell<Vec<String>>,
    fail_mutations: Cell<bool>,
}

impl MemoryElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Element whose class list starts as `classes`, in order, without duplicates.
    #[must_use]
    pub fn with_classes(classes: &[&str]) -> Self {
        let el = Self::new();
        {
            let mut list = el.classes.borrow_mut();
            for class in classes {
                if !list.iter().any(|c| c == class) {
                    list.push((*class).to_owned());
                }
            }
        }
        el
    }

    /// Snapshot of the class list in insertion order.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }

    /// Make every subsequent mutation fail.
    pub fn set_fail_mutations(&self, fail: bool) {
        self.fail_mutations.set(fail);
    }

    fn check_mutable(&self) -> Result<(), ThemeError> {
        if self.fail_mutations.get() {
            return Err(ThemeError::Dom("element is read-only".into()));
        }
        Ok(())
    }
}

impl RootElement for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.check_mutable()?;
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
        Ok(())
    }
}

impl IconElement for MemoryElement {
    fn add_class(&self, class: &str) -> Result<(), ThemeError> {
        self.check_mutable()?;
        let mut list = self.classes.borrow_mut();
        if !list.iter().any(|c| c == class) {
            list.push(class.to_owned());
        }
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), ThemeError> {
        self.check_mutable()?;
        self.classes.borrow_mut().retain(|c| c != class);
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }
}

/// In-memory toggle control; [`MemoryToggle::activate`] plays a click.
#[derive(Default)]
pub struct MemoryToggle {
    handlers: RefCell<Vec<Box<dyn FnMut()>>>,
}

impl MemoryToggle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Run every registered handler once, in registration order.
    pub fn activate(&self) {
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler();
        }
    }
}

impl std::fmt::Debug for MemoryToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryToggle")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ToggleControl for MemoryToggle {
    fn on_activate(&self, handler: Box<dyn FnMut()>) -> Result<(), ThemeError> {
        self.handlers.borrow_mut().push(handler);
        Ok(())
    }
}
