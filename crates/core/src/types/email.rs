//! Email address type.
//!
//! Emails are the unique lookup key for user records, so the parsed form is
//! normalized to lowercase: two spellings of the same address compare equal
//! and cannot create duplicate accounts.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("email must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input does not contain an @ symbol.
    #[error("email must contain an @ symbol")]
    MissingAtSymbol,
    /// The local part (before @) is empty.
    #[error("email local part cannot be empty")]
    EmptyLocalPart,
    /// The domain part (after @) is empty.
    #[error("email domain cannot be empty")]
    EmptyDomain,
}

/// A normalized email address.
///
/// ## Constraints
///
/// - Length: 1-254 characters (RFC 5321 limit), checked after trimming
/// - Must contain an @ symbol with a non-empty local part and domain
/// - Stored lowercase; surrounding whitespace is stripped
///
/// ## Examples
///
/// ```
/// use honeyshop_core::Email;
///
/// let email = Email::parse("Buyer@Example.com").unwrap();
/// assert_eq!(email.as_str(), "buyer@example.com");
///
/// assert!(Email::parse("").is_err());            // empty
/// assert!(Email::parse("no-at-symbol").is_err()); // missing @
/// assert!(Email::parse("@example.com").is_err()); // empty local part
/// assert!(Email::parse("buyer@").is_err());       // empty domain
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse and normalize an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input (after trimming):
    /// - Is empty
    /// - Is longer than 254 characters
    /// - Does not contain an @ symbol
    /// - Has an empty local part or domain
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }

        if trimmed.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        let at_pos = trimmed.find('@').ok_or(EmailError::MissingAtSymbol)?;

        if at_pos == 0 {
            return Err(EmailError::EmptyLocalPart);
        }

        if at_pos == trimmed.len() - 1 {
            return Err(EmailError::EmptyDomain);
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Email` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the local part of the email (before the @).
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or("")
    }

    /// Returns the domain part of the email (after the @).
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or("")
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_emails() {
        assert!(Email::parse("buyer@example.com").is_ok());
        assert!(Email::parse("buyer.name+tag@example.co.uk").is_ok());
        assert!(Email::parse("a@b.c").is_ok());
    }

    #[test]
    fn test_parse_normalizes_case() {
        let email = Email::parse("Buyer@Example.COM").unwrap();
        assert_eq!(email.as_str(), "buyer@example.com");

        let other = Email::parse("buyer@example.com").unwrap();
        assert_eq!(email, other);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let email = Email::parse("  buyer@example.com  ").unwrap();
        assert_eq!(email.as_str(), "buyer@example.com");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Email::parse(""), Err(EmailError::Empty)));
        assert!(matches!(Email::parse("   "), Err(EmailError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(matches!(
            Email::parse(&long),
            Err(EmailError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_missing_at() {
        assert!(matches!(
            Email::parse("no-at-symbol"),
            Err(EmailError::MissingAtSymbol)
        ));
    }

    #[test]
    fn test_parse_empty_local_part() {
        assert!(matches!(
            Email::parse("@example.com"),
            Err(EmailError::EmptyLocalPart)
        ));
    }

    #[test]
    fn test_parse_empty_domain() {
        assert!(matches!(
            Email::parse("buyer@"),
            Err(EmailError::EmptyDomain)
        ));
    }

    #[test]
    fn test_local_part_and_domain() {
        let email = Email::parse("buyer@example.com").unwrap();
        assert_eq!(email.local_part(), "buyer");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn test_serde_roundtrip() {
        let email = Email::parse("buyer@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"buyer@example.com\"");

        let parsed: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, email);
    }

    #[test]
    fn test_from_str() {
        let email: Email = "buyer@example.com".parse().unwrap();
        assert_eq!(email.as_str(), "buyer@example.com");
    }
}
