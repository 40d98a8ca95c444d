//! Typed wrapper over a [`LocalStore`] with automatic JSON serialization.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::{CacheError, LocalStore, MemoryStore};

/// A fixed storage name bound to the type stored under it.
///
/// Keys are declared as constants next to the type they hold so a record
/// can only be read back as the type it was written as.
pub struct TypedKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedKey<T> {
    /// Declare a key.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// The raw storage name.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for TypedKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedKey<T> {}

impl<T> fmt::Debug for TypedKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypedKey").field(&self.name).finish()
    }
}

/// Type-safe cache over any [`LocalStore`].
///
/// Cloning a `Cache` shares the underlying store.
#[derive(Clone)]
pub struct Cache {
    store: Arc<dyn LocalStore>,
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}

impl Cache {
    /// Wrap an existing store.
    pub fn new(store: impl LocalStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Wrap a shared store.
    pub fn from_shared(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    /// A cache backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Open a directory-backed cache, creating the directory if needed.
        pub fn open_dir(dir: impl Into<std::path::PathBuf>) -> Result<Self, CacheError> {
        Ok(Self::new(crate::FileStore::open(dir)?))
    }

    /// Get a value by raw key.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|source| CacheError::SerializeError {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Set a value by raw key, overwriting any previous value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value).map_err(|source| CacheError::SerializeError {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &bytes)?;
        tracing::trace!(key, bytes = bytes.len(), "stored record");
        Ok(())
    }

    /// Delete a value by raw key.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Read the record stored under a typed key.
    pub fn load<T: DeserializeOwned>(&self, key: &TypedKey<T>) -> Result<Option<T>, CacheError> {
        self.get(key.name())
    }

    /// Write the record for a typed key.
    pub fn store<T: Serialize>(&self, key: &TypedKey<T>, value: &T) -> Result<(), CacheError> {
        self.set(key.name(), value)
    }

    /// Remove the record for a typed key.
    pub fn clear<T>(&self, key: &TypedKey<T>) -> Result<(), CacheError> {
        self.delete(key.name())
    }
}
