//! Durable key-value storage.
//!
//! Models the browser's local storage: named slots holding UTF-8 JSON text,
//! written whole (read-modify-write of an entire snapshot, never a partial
//! patch). Two implementations are provided:
//!
//! - [`FileStorage`] - one file per key under a data directory
//! - [`MemoryStorage`] - a shared in-memory map for tests
//!
//! # Consistency
//!
//! Writes are synchronous and unversioned. Multiple writers over the same
//! backing store race with last-write-wins semantics; single-writer usage is
//! the supported model, matching a single browser tab over local storage.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Storage key for the inventory snapshot.
pub const INVENTORY_KEY: &str = "inventory";
/// Storage key for the user records snapshot.
pub const USERS_KEY: &str = "users";
/// Storage key for the denormalized signed-in user.
pub const SESSION_KEY: &str = "session";

/// Errors from the durable storage layer.
///
/// A failed write (e.g. quota or permission problems on the backing store)
/// surfaces here; callers leave in-memory state unchanged and report the
/// failure rather than silently losing data.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing store failed.
    #[error("storage i/o error for key {key}: {source}")]
    Io {
        /// The key being accessed.
        key: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A stored value is not valid JSON for the expected shape.
    #[error("corrupt value under key {key}: {source}")]
    Corrupt {
        /// The key holding the corrupt value.
        key: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded to JSON.
    #[error("failed to encode value for key {key}: {source}")]
    Encode {
        /// The key being written.
        key: String,
        /// The underlying encode error.
        #[source]
        source: serde_json::Error,
    },
}

/// A durable key-value store of UTF-8 JSON text.
pub trait Storage {
    /// Read the raw text stored under `key`, or `None` if the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot for `key` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Clear the slot for `key`. Clearing an empty slot is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Whether the slot for `key` currently holds a value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing store cannot be read.
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}

/// Read and decode the JSON value stored under `key`.
///
/// Returns `None` if the slot is empty.
///
/// # Errors
///
/// Returns [`StorageError::Corrupt`] if the stored text does not decode as
/// `T`, or [`StorageError::Io`] if the store cannot be read.
pub fn load_json<S: Storage, T: serde::de::DeserializeOwned>(
    storage: &S,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match storage.get(key)? {
        Some(text) => {
            let value = serde_json::from_str(&text).map_err(|source| StorageError::Corrupt {
                key: key.to_owned(),
                source,
            })?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Encode `value` as JSON and overwrite the slot for `key`.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] if the value cannot be encoded, or
/// [`StorageError::Io`] if the store cannot be written.
pub fn store_json<S: Storage, T: serde::Serialize>(
    storage: &S,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let text = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_owned(),
        source,
    })?;
    storage.set(key, &text)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_json_empty_slot() {
        let storage = MemoryStorage::new();
        let loaded: Option<Vec<String>> = load_json(&storage, "missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_store_then_load_json() {
        let storage = MemoryStorage::new();
        store_json(&storage, "nums", &vec![1, 2, 3]).unwrap();

        let loaded: Option<Vec<i32>> = load_json(&storage, "nums").unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_load_json_corrupt_value() {
        let storage = MemoryStorage::new();
        storage.set("bad", "not json at all").unwrap();

        let result: Result<Option<Vec<i32>>, _> = load_json(&storage, "bad");
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }
}
