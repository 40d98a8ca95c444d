//! In-process store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::{CacheError, LocalStore};

/// A [`LocalStore`] backed by a `HashMap`, used by tests and one-shot runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<u8>>>, CacheError> {
        self.entries
            .lock()
            .map_err(|_| CacheError::StoreError("memory store lock poisoned".to_string()))
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        self.entries()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get() {
        let store = MemoryStore::new();
        store.set("user", b"{}").unwrap();
        assert_eq!(store.get("user").unwrap(), Some(b"{}".to_vec()));
    }

    #[test]
    fn test_memory_store_overwrite_last_write_wins() {
        let store = MemoryStore::new();
        store.set("carData", b"first").unwrap();
        store.set("carData", b"second").unwrap();
        assert_eq!(store.get("carData").unwrap(), Some(b"second".to_vec()));
    }

    #[test]
    fn test_memory_store_delete_missing_is_ok() {
        let store = MemoryStore::new();
        assert!(store.delete("nothing").is_ok());
        assert_eq!(store.get("nothing").unwrap(), None);
    }
}
