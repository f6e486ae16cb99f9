//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are exact decimals, never floats: line totals and cart totals are
//! computed with [`rust_decimal::Decimal`], so `3 x 10.00` is exactly `30.00`.
//! A `Price` is non-negative by construction.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative monetary amount in the shop's single display currency.
///
/// ## Examples
///
/// ```
/// use honeyshop_core::Price;
///
/// let unit = Price::from_cents(1_000); // 10.00
/// let line = unit.times(3);
/// assert_eq!(line, Price::from_cents(3_000));
/// assert_eq!(line.to_string(), "30.00");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of cents.
    ///
    /// Negative cent counts are clamped to zero; runtime input that needs a
    /// validation failure goes through [`Price::new`] instead.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents.max(0), 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The line total for `quantity` units at this price.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Whether this is the zero price.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    /// Formats with two decimal places, e.g. `12.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        let err = Price::new(Decimal::new(-1, 2));
        assert!(matches!(err, Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_new_accepts_zero_and_positive() {
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert!(Price::new(Decimal::new(1099, 2)).is_ok());
    }

    #[test]
    fn test_times_is_exact() {
        let unit = Price::from_cents(1_099); // 10.99
        assert_eq!(unit.times(3), Price::from_cents(3_297));
    }

    #[test]
    fn test_times_zero_quantity() {
        let unit = Price::from_cents(500);
        assert!(unit.times(0).is_zero());
    }

    #[test]
    fn test_sum() {
        let total: Price = [
            Price::from_cents(100),
            Price::from_cents(250),
            Price::from_cents(50),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, Price::from_cents(400));
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Price::from_cents(1_000).to_string(), "10.00");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_serde_roundtrip() {
        let price = Price::from_cents(69_999);
        let json = serde_json::to_string(&price).unwrap();
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
