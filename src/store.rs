//! Preference storage.
//!
//! The theme controller persists exactly one value through the
//! [`PreferenceStore`] trait. In the browser that is `localStorage`
//! (see `dom::storage`), which reports [`StorageError::Unavailable`] when
//! access is refused. [`MemoryStore`] stands in for it in tests.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

/// Failure reading or writing a preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("failed to read preference '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write preference '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Durable string key-value storage for user preferences.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means no value was ever stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store rejects the write.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store.
///
/// `unavailable()` builds a store whose every call fails, which is how tests
/// exercise the degraded path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
    failing: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every read and write.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { failing: true, ..Self::default() }
    }

    /// Seed a value without counting it as a write.
    #[must_use]
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Number of successful writes since construction.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Raw stored value, bypassing the failure switch.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.failing {
            return Err(StorageError::Unavailable);
        }
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing {
            return Err(StorageError::Unavailable);
        }
        self.values.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}
