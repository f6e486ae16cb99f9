//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.
//!
//! IDs are opaque strings: seed catalog entries carry short hand-written ids
//! (e.g. `"h1"`), while records created at runtime get a random UUIDv4 via
//! [`random`](ItemId::random). Uniqueness is probabilistic, not enforced by a
//! counter.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `random()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use honeyshop_core::define_id;
/// define_id!(ItemId);
/// define_id!(UserId);
///
/// let item_id = ItemId::new("h1");
/// let user_id = UserId::random();
///
/// // These are different types, so this won't compile:
/// // let _: ItemId = user_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh random ID (UUIDv4).
            ///
            /// The identifier space is large enough that collision with any
            /// existing id is negligible.
            #[must_use]
            pub fn random() -> Self {
                Self(::uuid::Uuid::new_v4().to_string())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ItemId);
define_id!(CategoryId);
define_id!(UserId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_preserves_value() {
        let id = ItemId::new("h1");
        assert_eq!(id.as_str(), "h1");
        assert_eq!(id.to_string(), "h1");
    }

    #[test]
    fn test_random_ids_are_distinct() {
        let a = ItemId::random();
        let b = ItemId::random();
        assert_ne!(a, b);
    }

    #[test]
    fn test_serde_transparent() {
        let id = UserId::new("abc-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");

        let parsed: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_from_str_and_string() {
        let a: CategoryId = "honey".into();
        let b = CategoryId::from("honey".to_owned());
        assert_eq!(a, b);
    }
}
