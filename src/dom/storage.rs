//! `localStorage`-backed preference store.

use crate::store::{PreferenceStore, StorageError};

use super::js_error;

/// `window.localStorage`, or nothing when the browser denies access
/// (private modes, sandboxed frames). Without storage every call fails
/// with [`StorageError::Unavailable`].
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn open(window: &web_sys::Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage access denied: {}", js_error(&e));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|e| StorageError::Read { key: key.to_owned(), reason: js_error(&e) })
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write { key: key.to_owned(), reason: js_error(&e) })
    }
}
