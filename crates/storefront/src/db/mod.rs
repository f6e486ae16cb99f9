//! Snapshot-backed repositories.
//!
//! Each repository owns one durable storage key and mutates it with a
//! whole-snapshot read-modify-write: read the entire collection, validate,
//! mutate in memory, write the entire collection back. There are no partial
//! patches, so a failed validation leaves the stored snapshot untouched.

pub mod inventory;
pub mod users;

pub use inventory::{InventoryError, InventoryStore, StockIssue};
pub use users::UserRepository;

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The durable storage layer failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Requested record was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g. unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}
