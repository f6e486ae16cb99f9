//! File-backed storage: one file per key under a data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError};

/// Durable storage writing each key to `<data_dir>/<key>.json`.
///
/// The data directory is created on first write. Writes replace the whole
/// file, mirroring the snapshot (read-modify-write) discipline of the
/// repositories above it.
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory this store writes under.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    fn io_error(key: &str, source: std::io::Error) -> StorageError {
        StorageError::Io {
            key: key.to_owned(),
            source,
        }
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| Self::io_error(key, e))?;
        fs::write(self.path_for(key), value).map_err(|e| Self::io_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.get("inventory").unwrap().is_none());
        assert!(!storage.contains("inventory").unwrap());
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.set("inventory", "[]").unwrap();
        assert_eq!(storage.get("inventory").unwrap().as_deref(), Some("[]"));
        assert!(storage.contains("inventory").unwrap());
    }

    #[test]
    fn test_set_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("shop");
        let storage = FileStorage::new(&nested);

        storage.set("users", "[]").unwrap();
        assert!(nested.join("users.json").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.set("session", "{}").unwrap();
        storage.remove("session").unwrap();
        assert!(storage.get("session").unwrap().is_none());

        // A second remove of the same key is a no-op, not an error.
        storage.remove("session").unwrap();
    }

    #[test]
    fn test_two_handles_share_the_same_files() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileStorage::new(dir.path());
        let reader = FileStorage::new(dir.path());

        writer.set("inventory", "[1]").unwrap();
        assert_eq!(reader.get("inventory").unwrap().as_deref(), Some("[1]"));
    }
}
