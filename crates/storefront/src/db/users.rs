//! User repository over the `users` snapshot key.

use tracing::info;

use honeyshop_core::{Email, UserId};

use super::RepositoryError;
use crate::models::User;
use crate::storage::{Storage, USERS_KEY, load_json, store_json};

/// Repository for user records.
///
/// Users are appended at signup and updated in place (sign-in stamps,
/// admin toggles); records are never deleted.
pub struct UserRepository<S> {
    storage: S,
}

impl<S: Storage> UserRepository<S> {
    /// Create a user repository over a storage handle.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All user records, in creation order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the snapshot cannot be read.
    pub fn list(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(load_json(&self.storage, USERS_KEY)?.unwrap_or_default())
    }

    /// Look up a user by email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the snapshot cannot be read.
    pub fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        Ok(self.list()?.into_iter().find(|user| &user.email == email))
    }

    /// Look up a user by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the snapshot cannot be read.
    pub fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.list()?.into_iter().find(|user| &user.id == id))
    }

    /// Append a new user record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if a record with the same email
    /// already exists; the snapshot is unchanged in that case.
    pub fn create(&self, user: User) -> Result<User, RepositoryError> {
        let mut users = self.list()?;

        if users.iter().any(|existing| existing.email == user.email) {
            return Err(RepositoryError::Conflict(format!(
                "email already registered: {}",
                user.email
            )));
        }

        users.push(user.clone());
        store_json(&self.storage, USERS_KEY, &users)?;
        info!(user_id = %user.id, "created user");
        Ok(user)
    }

    /// Overwrite the record whose id matches `user.id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has that id.
    pub fn update(&self, user: &User) -> Result<(), RepositoryError> {
        let mut users = self.list()?;
        let slot = users
            .iter_mut()
            .find(|existing| existing.id == user.id)
            .ok_or(RepositoryError::NotFound)?;

        *slot = user.clone();
        store_json(&self.storage, USERS_KEY, &users)?;
        Ok(())
    }

    /// Toggle a user's admin flag.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has that id.
    pub fn set_admin(&self, user_id: &UserId, is_admin: bool) -> Result<User, RepositoryError> {
        let mut users = self.list()?;
        let user = users
            .iter_mut()
            .find(|existing| &existing.id == user_id)
            .ok_or(RepositoryError::NotFound)?;

        user.is_admin = is_admin;
        let updated = user.clone();
        store_json(&self.storage, USERS_KEY, &users)?;
        info!(user_id = %user_id, is_admin, "updated admin flag");
        Ok(updated)
    }
}
