//! User records for the mock-auth layer.
//!
//! These stand in for a real identity provider; the cart gates on a signed-in
//! user but nothing else about the shop depends on who that user is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use honeyshop_core::{Email, UserId};

/// A shop user.
///
/// The credential is an Argon2id hash; the plaintext password is never
/// stored. Admin status is an explicit flag, set at signup or toggled by an
/// admin action - never inferred from the email address.
///
/// Serialized field names are camelCase to match the persisted snapshot
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID (UUIDv4 string).
    pub id: UserId,
    /// Email address; unique key for lookup across all user records.
    pub email: Email,
    /// Argon2id hash of the user's password.
    pub password_hash: String,
    /// Whether the user may perform admin operations.
    pub is_admin: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the user last signed in successfully; `None` until first sign-in.
    pub last_sign_in: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_field_names_are_camel_case() {
        let user = User {
            id: UserId::new("u1"),
            email: Email::parse("buyer@example.com").unwrap(),
            password_hash: "$argon2id$stub".to_owned(),
            is_admin: false,
            created_at: Utc::now(),
            last_sign_in: None,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("isAdmin").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("lastSignIn").is_some());
        assert!(json.get("passwordHash").is_some());
        assert!(json.get("is_admin").is_none());
    }
}
