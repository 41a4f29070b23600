use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::{KeyValueStorage, StorageError};
use crate::Result;

/// In-memory [`KeyValueStorage`] backed by a `HashMap`.
///
/// An optional quota bounds the total size of stored keys and values in
/// bytes, mirroring the limits of browser storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Creates an empty, unbounded storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty storage holding at most `quota` bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: RwLock::default(),
            quota: Some(quota),
        }
    }

    /// Total bytes currently used by keys and values.
    pub fn used_bytes(&self) -> usize {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        items.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        items.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: String) -> Result<()> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(quota) = self.quota {
            let used: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = used + key.len() + value.len();
            if needed > quota {
                tracing::warn!(key, needed, quota, "Storage quota exceeded");
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                }
                .into());
            }
        }
        items.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> bool {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.remove(key).is_some()
    }

    fn clear(&self) {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.clear();
    }

    fn keys(&self) -> Vec<String> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<String> = items.keys().cloned().collect();
        keys.sort();
        keys
    }
}
