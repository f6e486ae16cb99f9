//! Authentication service.
//!
//! A mock-auth layer shaped like a real one: passwords are hashed with
//! Argon2id and verified against the hash - never stored or compared in
//! plaintext - but users live in the local `users` snapshot and the signed-in
//! user is a denormalized copy under the `session` key. Admin status is an
//! explicit flag on the record.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use tracing::info;

use honeyshop_core::{Email, UserId};

use crate::db::{RepositoryError, UserRepository};
use crate::models::User;
use crate::storage::{SESSION_KEY, Storage, load_json, store_json};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
///
/// Handles signup, sign-in/sign-out, the current-session user and the admin
/// flag.
pub struct AuthService<S> {
    users: UserRepository<S>,
    storage: S,
}

impl<S: Storage + Clone> AuthService<S> {
    /// Create an authentication service over a storage handle.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            users: UserRepository::new(storage.clone()),
            storage,
        }
    }
}

impl<S: Storage> AuthService<S> {
    /// Register a new user with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    pub fn sign_up(&self, email: &str, password: &str, is_admin: bool) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;
        let password_hash = hash_password(password)?;

        let user = User {
            id: UserId::random(),
            email,
            password_hash,
            is_admin,
            created_at: Utc::now(),
            last_sign_in: None,
        };

        let user = self.users.create(user).map_err(|e| match e {
            RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
            other => AuthError::Repository(other),
        })?;

        info!(user_id = %user.id, "user signed up");
        Ok(user)
    }

    /// Sign in with email and password.
    ///
    /// On success stamps the user's `last_sign_in` and stores the
    /// denormalized session copy under the session key.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is unknown or
    /// the password is wrong (indistinguishable by design).
    pub fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        let mut user = self
            .users
            .find_by_email(&email)?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password_hash)?;

        user.last_sign_in = Some(Utc::now());
        self.users.update(&user)?;

        store_json(&self.storage, SESSION_KEY, &user).map_err(RepositoryError::Storage)?;

        info!(user_id = %user.id, "user signed in");
        Ok(user)
    }

    /// Sign out the current session. A no-op when nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the session key cannot be cleared.
    pub fn sign_out(&self) -> Result<(), AuthError> {
        self.storage
            .remove(SESSION_KEY)
            .map_err(RepositoryError::Storage)?;
        Ok(())
    }

    /// The signed-in user, if any (the denormalized session copy).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the session key cannot be read.
    pub fn current_user(&self) -> Result<Option<User>, AuthError> {
        let user = load_json(&self.storage, SESSION_KEY).map_err(RepositoryError::Storage)?;
        Ok(user)
    }

    /// Toggle a user's admin flag.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if no user has that id.
    pub fn set_admin(&self, user_id: &UserId, is_admin: bool) -> Result<User, AuthError> {
        self.users.set_admin(user_id, is_admin).map_err(|e| match e {
            RepositoryError::NotFound => AuthError::UserNotFound,
            other => AuthError::Repository(other),
        })
    }

    /// All user records, in creation order.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the snapshot cannot be read.
    pub fn list_users(&self) -> Result<Vec<User>, AuthError> {
        Ok(self.users.list()?)
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
