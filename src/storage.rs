//! Persistent key-value storage seam for the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser this is `window.localStorage` (see `browser`). Everywhere
//! else, and in tests, [`MemoryStorage`] stands in with the same synchronous
//! `get`/`set` contract.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Synchronous string key-value store.
pub trait ThemeStorage {
    /// Read the value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

impl<S: ThemeStorage + ?Sized> ThemeStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set(key, value)
    }
}

impl<S: ThemeStorage + ?Sized> ThemeStorage for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set(key, value)
    }
}

/// In-memory storage with switchable read/write failures.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Make every subsequent `get` fail.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Make every subsequent `set` fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Remove every entry, as a user clearing site data would.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if self.fail_reads.get() {
            return Err(ThemeError::Storage(format!("read of {key:?} refused")));
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.fail_writes.get() {
            return Err(ThemeError::Storage(format!("write of {key:?} refused")));
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
