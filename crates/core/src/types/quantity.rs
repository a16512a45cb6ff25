//! Line item quantity.

use core::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The value is zero or negative.
    #[error("quantity must be at least 1 (got {0})")]
    TooSmall(i64),
    /// The input is not a whole number, or does not fit in a `u32`.
    #[error("quantity is not a whole number: {0:?}")]
    Invalid(String),
}

/// Number of units of one item in the cart.
///
/// ## Constraints
///
/// - Always at least 1
/// - Whole numbers only; text input such as `"2.5"` or `"abc"` is rejected
///   instead of being truncated
///
/// ## Examples
///
/// ```
/// use almes_core::Quantity;
///
/// assert_eq!(Quantity::parse("3").unwrap().get(), 3);
/// assert!(Quantity::parse("0").is_err());
/// assert!(Quantity::parse("-2").is_err());
/// assert!(Quantity::parse("2.5").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A quantity of one.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity from a count.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::TooSmall`] if `n` is zero.
    pub fn new(n: u32) -> Result<Self, QuantityError> {
        NonZeroU32::new(n)
            .map(Self)
            .ok_or(QuantityError::TooSmall(0))
    }

    /// Parse a quantity from a form field value.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a positive whole number.
    pub fn parse(s: &str) -> Result<Self, QuantityError> {
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => Self::try_from(n),
            Err(_) => Err(QuantityError::Invalid(s.to_owned())),
        }
    }

    /// Returns the count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Add two quantities, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.get()).map(Self)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        if n < 1 {
            return Err(QuantityError::TooSmall(n));
        }
        let n = u32::try_from(n).map_err(|_| QuantityError::Invalid(n.to_string()))?;
        Self::new(n)
    }
}

impl From<Quantity> for u32 {
    fn from(q: Quantity) -> Self {
        q.get()
    }
}
