use std::fmt::Display;

use kino_logging::{kino_debug, kino_warn};

use crate::StoreError;

/// Fallible string key/value backend, scoped to one page origin.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

/// Wraps a backend so that storage failures never reach the caller.
///
/// Reads fall back to the supplied default; writes are best effort.
#[derive(Debug)]
pub struct PreferenceStore<S> {
    backend: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Returns the stored value, or `default` when missing or unreadable.
    pub fn get(&self, key: &str, default: &str) -> String {
        match self.backend.get_item(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                kino_debug!("Preference {:?} not set, using {:?}", key, default);
                default.to_string()
            }
            Err(err) => {
                kino_warn!("Failed to read preference {:?}: {}", key, err);
                default.to_string()
            }
        }
    }

    pub fn set(&mut self, key: &str, value: impl Display) {
        let value = value.to_string();
        if let Err(err) = self.backend.set_item(key, &value) {
            kino_warn!("Failed to write preference {:?}={:?}: {}", key, value, err);
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }
}
