//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are always in rand. They are persisted as plain JSON numbers so the
//! stored cart stays readable by anything that understands the slot layout
//! (`{"name": "Bread", "price": 35.0, "quantity": 2}`).

use core::fmt;
use std::iter::Sum;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::quantity::Quantity;

/// Currency symbol prefixed to every displayed amount.
pub const CURRENCY_SYMBOL: &str = "R";

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
    /// The input is not a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),
}

/// A non-negative amount in currency units (rand, not cents).
///
/// ## Examples
///
/// ```
/// use almes_core::Price;
///
/// let price = Price::parse("35").unwrap();
/// assert_eq!(price.to_string(), "35.00");
/// assert_eq!(price.display(), "R35.00");
///
/// assert!(Price::parse("-1").is_err());
/// assert!(Price::parse("free").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Parse a price from user input such as `"35"` or `"12.50"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a decimal number or is negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount = s
            .trim()
            .parse::<Decimal>()
            .map_err(|_| PriceError::Invalid(s.to_owned()))?;
        Self::new(amount)
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: Quantity) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity.get())))
    }

    /// Format for display with the currency symbol (e.g., `R35.00`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("{CURRENCY_SYMBOL}{self}")
    }
}

/// Formats with exactly two decimals, rounding half away from zero.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{rounded:.2}")
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.0)))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(
            Price::parse("35").unwrap(),
            Price::new(Decimal::new(35, 0)).unwrap()
        );
        assert_eq!(
            Price::parse(" 12.50 ").unwrap(),
            Price::new(Decimal::new(1250, 2)).unwrap()
        );
        assert_eq!(Price::parse("0").unwrap(), Price::ZERO);
    }

    #[test]
    fn test_parse_negative() {
        assert!(matches!(Price::parse("-0.01"), Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(Price::parse("abc"), Err(PriceError::Invalid(_))));
        assert!(matches!(Price::parse(""), Err(PriceError::Invalid(_))));
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::parse("150").unwrap().to_string(), "150.00");
        assert_eq!(Price::parse("10.5").unwrap().to_string(), "10.50");
        assert_eq!(Price::parse("2.345").unwrap().to_string(), "2.35");
        assert_eq!(Price::parse("35").unwrap().display(), "R35.00");
    }

    #[test]
    fn test_times() {
        let bread = Price::parse("35.00").unwrap();
        assert_eq!(bread.times(qty(3)).to_string(), "105.00");
    }

    #[test]
    fn test_sum() {
        let total: Price = ["150", "50"]
            .iter()
            .map(|s| Price::parse(s).unwrap())
            .sum();
        assert_eq!(total.to_string(), "200.00");

        let empty: Price = std::iter::empty().sum();
        assert_eq!(empty, Price::ZERO);
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_value(Price::parse("35").unwrap()).unwrap();
        assert!(json.is_number());
        assert!((json.as_f64().unwrap() - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_integer_and_float() {
        let a: Price = serde_json::from_str("150").unwrap();
        assert_eq!(a.to_string(), "150.00");

        let b: Price = serde_json::from_str("10.5").unwrap();
        assert_eq!(b.to_string(), "10.50");
    }

    #[test]
    fn test_deserialize_negative_rejected() {
        assert!(serde_json::from_str::<Price>("-5").is_err());
    }
}
