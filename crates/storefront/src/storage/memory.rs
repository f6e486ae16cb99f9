//! In-memory storage for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{Storage, StorageError};

/// An in-memory key-value store.
///
/// Clones share the same underlying map, so one `MemoryStorage` handed to an
/// inventory store and another to a user repository behave like two views of
/// the same browser local storage. Single-threaded, matching the execution
/// model of the components above it.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Whether no slot holds a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.set("inventory", "[]").unwrap();
        assert_eq!(storage.get("inventory").unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.len(), 1);

        storage.remove("inventory").unwrap();
        assert!(storage.get("inventory").unwrap().is_none());
    }

    #[test]
    fn test_clones_share_slots() {
        let a = MemoryStorage::new();
        let b = a.clone();

        a.set("users", "[]").unwrap();
        assert_eq!(b.get("users").unwrap().as_deref(), Some("[]"));
    }
}
