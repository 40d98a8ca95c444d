//! The raw byte-level store abstraction.

use crate::CacheError;

/// A synchronous key/value store holding opaque byte values.
///
/// Implementations are scoped to one profile: every writer sees the same
/// keys and the last write wins.
pub trait LocalStore: Send + Sync {
    /// Read the bytes stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Write `value` under `key`, replacing anything already there.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

}
