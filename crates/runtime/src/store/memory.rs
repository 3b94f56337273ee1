//! In-memory store for tests, ephemeral runs, and the remote cache.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::store::{PersistentStore, Result, StoreError};

/// In-memory implementation of [`PersistentStore`].
///
/// An optional byte quota (sum of key and value lengths) emulates a device
/// store that refuses writes once full.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl InMemoryStore {
    /// Create a new empty store with no quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that rejects writes beyond `quota` bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    /// Create a store pre-filled with `entries`.
    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        Self {
            entries: RwLock::new(entries),
            quota: None,
        }
    }

    /// Bytes currently used, counted as key plus value lengths.
    pub fn used_bytes(&self) -> Result<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.iter().map(|(k, v)| k.len() + v.len()).sum())
    }
}

impl PersistentStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;

        if let Some(quota) = self.quota {
            let used: usize = entries.iter().map(|(k, v)| k.len() + v.len()).sum();
            let replaced = entries.get(key).map_or(0, |old| key.len() + old.len());
            let needed = used - replaced + key.len() + value.len();
            if needed > quota {
                return Err(StoreError::QuotaExceeded { needed, quota });
            }
        }

        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.keys().cloned().collect())
    }

    fn clear(&self) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_keys_clear() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.set("a", "3").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("3"));
        assert!(store.contains("b").unwrap());

        let mut keys = store.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a".to_owned(), "b".to_owned()]);

        store.clear().unwrap();
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn quota_rejects_growth_but_allows_replacement() {
        let store = InMemoryStore::with_quota(10);
        store.set("key", "value").unwrap();
        assert_eq!(store.used_bytes().unwrap(), 8);

        let err = store.set("other", "xx").unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { needed: 15, quota: 10 }));
        assert_eq!(store.get("other").unwrap(), None);

        // Same key, shorter value: fits after the old value is released.
        store.set("key", "v2").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("v2"));
    }
}
