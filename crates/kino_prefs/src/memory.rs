use std::collections::BTreeMap;

use crate::{KeyValueStore, StoreError};

/// In-process store. Can simulate disabled storage and a byte quota.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
    unavailable: bool,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every access fails, like storage disabled by the browser.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Total bytes of keys plus values the store accepts.
    pub fn with_quota(limit: usize) -> Self {
        Self {
            quota: Some(limit),
            ..Self::default()
        }
    }

    pub fn set_available(&mut self, available: bool) {
        self.unavailable = !available;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable {
            Err(StoreError::Unavailable("storage disabled".into()))
        } else {
            Ok(())
        }
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_available()?;
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_available()?;
        if let Some(limit) = self.quota {
            if self.used_bytes_without(key) + key.len() + value.len() > limit {
                return Err(StoreError::QuotaExceeded { limit });
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_counts_replaced_values_once() {
        let mut store = MemoryStore::with_quota(12);
        store.set_item("js-player", "tru").unwrap();
        // Replacing the same key must not double count the old value.
        store.set_item("js-player", "abc").unwrap();
        assert!(matches!(
            store.set_item("js-player", "true"),
            Err(StoreError::QuotaExceeded { limit: 12 })
        ));
        assert_eq!(store.get_item("js-player").unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn toggling_availability() {
        let mut store = MemoryStore::new();
        store.set_item("k", "v").unwrap();
        store.set_available(false);
        assert!(store.get_item("k").is_err());
        store.set_available(true);
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.len(), 1);
    }
}
