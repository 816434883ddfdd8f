//! Storage backends and the typed preference service built on top of them.
//!
//! DESIGN
//! ======
//! Resolvers never touch cookies or `localStorage` directly. They receive a
//! [`Storage`] backend and wrap it in a [`PreferenceService`], which owns the
//! key and the string <-> value conversion. The browser, the HTTP cookie jar
//! and [`MemoryStorage`] are interchangeable behind the same two calls.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::PrefsError;

/// String key-value backend for a single-key-per-concern preference.
pub trait Storage {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        (**self).set(key, value)
    }
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

/// In-memory backend. Used by tests and by SSR paths that have no real store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with `value`.
    #[must_use]
    pub fn with(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    /// Make every subsequent `set` fail, keeping current entries readable.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Current raw value for `key`, bypassing the [`Storage`] trait.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        if self.read_only {
            return Err(PrefsError::Backend { op: "set", key: key.to_owned(), reason: "read-only".into() });
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// PREFERENCE SERVICE
// =============================================================================

/// Typed view of one storage key.
///
/// `read` never fails: backend errors and unparsable values both read as
/// "no preference" so the caller's fallback chain takes over.
#[derive(Debug)]
pub struct PreferenceService<S, P> {
    storage: S,
    key: &'static str,
    _value: PhantomData<fn() -> P>,
}

impl<S, P> PreferenceService<S, P>
where
    S: Storage,
    P: FromStr + Display,
{
    pub fn new(storage: S, key: &'static str) -> Self {
        Self { storage, key, _value: PhantomData }
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Borrow the underlying backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Raw stored string, with backend errors folded into `None`.
    pub fn read_raw(&self) -> Option<String> {
        match self.storage.get(self.key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = self.key, error = %e, "preference read failed");
                None
            }
        }
    }

    /// Parsed preference, or `None` when absent or not a valid value.
    pub fn read(&self) -> Option<P> {
        let raw = self.read_raw()?;
        match raw.parse::<P>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::debug!(key = self.key, value = %raw, "ignoring unparsable preference");
                None
            }
        }
    }

    /// Persist `value` as the new preference.
    ///
    /// # Errors
    ///
    /// Propagates the backend error.
    pub fn write(&self, value: P) -> Result<(), PrefsError> {
        self.storage.set(self.key, &value.to_string())
    }
}
