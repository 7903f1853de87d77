//! Key-value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme controller persists through [`PreferenceStore`] so it can run
//! against `localStorage` in the browser and [`MemoryStore`] in native tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::error::UiError;

/// Durable string key-value storage.
pub trait PreferenceStore {
    /// Read `key`; `Ok(None)` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Storage`] if the backing store rejects the read.
    fn load(&self, key: &str) -> Result<Option<String>, UiError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Storage`] if the backing store rejects the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), UiError>;
}

/// In-process store; lives as long as the value does.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, UiError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), UiError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The origin's `window.localStorage`.
///
/// Opening never fails: when storage is disabled (some private browsing
/// modes) every read and write returns [`UiError::Storage`] instead.
#[cfg(feature = "csr")]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "csr")]
impl LocalStore {
    pub fn open() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(err)) => {
                leptos::logging::warn!("{}", UiError::storage("localStorage", &err));
                None
            }
            None => None,
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, UiError> {
        self.storage
            .as_ref()
            .ok_or_else(|| UiError::Storage("localStorage unavailable".into()))
    }
}

#[cfg(feature = "csr")]
impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, UiError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| UiError::storage("getItem", &err))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), UiError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| UiError::storage("setItem", &err))
    }
}
