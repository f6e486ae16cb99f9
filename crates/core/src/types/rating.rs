//! Product rating type.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum RatingError {
    /// The value is outside the 0-5 scale.
    #[error("rating must be between 0 and 5 (got {0})")]
    OutOfRange(Decimal),
}

/// An average product rating on a 0-5 scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Rating(Decimal);

impl Rating {
    /// Maximum of the rating scale.
    pub const MAX: Self = Self(Decimal::from_parts(5, 0, 0, false, 0));

    /// The scale midpoint, used as the default for newly added items that
    /// have no reviews yet.
    pub const NEUTRAL: Self = Self(Decimal::from_parts(25, 0, 0, false, 1));

    /// Create a rating, validating it lies on the 0-5 scale.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] for values below 0 or above 5.
    pub fn new(value: Decimal) -> Result<Self, RatingError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(RatingError::OutOfRange(value));
        }
        if value > Self::MAX.0 {
            return Err(RatingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// The underlying decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
