//! Durable Key/Value Storage
//!
//! String keys to string values, surviving process restarts when backed
//! by [`FileStorage`]. Semantics follow browser local storage: reading a
//! missing key is not an error, removing a missing key is a no-op.

mod file;
mod memory;

use std::sync::Arc;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage result alias
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    /// Key is empty or contains characters the backend cannot store
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Backend I/O failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored bytes are not valid UTF-8
    #[error("Stored value for {key:?} is not valid UTF-8")]
    InvalidUtf8 { key: String },

    /// Another thread panicked while holding the storage lock
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Synchronous key/value store
///
/// Implementations must be cheap to call from the UI thread; the session
/// layer moves reads off the async executor when it matters.
pub trait KeyValueStorage: Send + Sync {
    /// Read a value; `Ok(None)` when the key is absent
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete a value; absent keys are ignored
    fn remove_item(&self, key: &str) -> StorageResult<()>;

    /// Whether a value exists under `key`
    fn contains_key(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get_item(key)?.is_some())
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Arc<S> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}

/// Reject keys that cannot be mapped safely onto every backend
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
