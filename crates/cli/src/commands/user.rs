//! User management commands.
//!
//! Covers the bootstrap problem: a fresh shop has no users, so the first
//! admin account is created here rather than through the signup flow.

use tracing::info;

use honeyshop_core::UserId;
use honeyshop_storefront::AuthService;

use super::open_storage;

/// Create a new user.
///
/// # Errors
///
/// Returns an error for an invalid email, a weak password, or a duplicate
/// email.
pub fn create(email: &str, password: &str, admin: bool) -> Result<(), Box<dyn std::error::Error>> {
    let auth = AuthService::new(open_storage()?);
    let user = auth.sign_up(email, password, admin)?;

    info!(
        "Created {} user {} ({})",
        if user.is_admin { "admin" } else { "regular" },
        user.id,
        user.email
    );
    Ok(())
}

/// List all users.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read.
pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    let auth = AuthService::new(open_storage()?);
    let users = auth.list_users()?;

    if users.is_empty() {
        info!("No users yet.");
        return Ok(());
    }

    info!("{} user(s):", users.len());
    for user in users {
        let last_sign_in = user
            .last_sign_in
            .map_or_else(|| "never".to_owned(), |ts| ts.to_rfc3339());
        info!(
            "  {}  {}  admin={}  last_sign_in={}",
            user.id, user.email, user.is_admin, last_sign_in
        );
    }
    Ok(())
}

/// Set or clear a user's admin flag.
///
/// # Errors
///
/// Returns an error for an unknown user id.
pub fn set_admin(id: &str, admin: bool) -> Result<(), Box<dyn std::error::Error>> {
    let auth = AuthService::new(open_storage()?);
    let user = auth.set_admin(&UserId::new(id), admin)?;

    info!(
        "{} is {} an admin",
        user.email,
        if user.is_admin { "now" } else { "no longer" }
    );
    Ok(())
}
