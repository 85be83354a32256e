//! Price type for representing asset prices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use super::ValidationError;

/// Price type - used for representing asset prices.
///
/// Wraps a `Decimal` value to ensure type safety and prevent
/// mixing price values with other numeric types. The derived `Ord`
/// is what window merging uses to fold highs and lows.
///
/// # Examples
///
/// ```
/// use kgrid_core::types::Price;
/// use rust_decimal_macros::dec;
///
/// let high = Price::new(dec!(3120.5)).unwrap();
/// let low = Price::new(dec!(3095.0)).unwrap();
/// assert_eq!(high.max(low), high);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero price constant.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new `Price` from a `Decimal` value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NegativePrice` if the value is negative.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value < Decimal::ZERO {
            return Err(ValidationError::NegativePrice(value));
        }
        Ok(Self(value))
    }

    /// Creates a new `Price` without validation.
    ///
    /// # Safety
    ///
    /// The caller must ensure the value is non-negative.
    #[must_use]
    pub const fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying `Decimal` value.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns true if the price is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal =
            Decimal::from_str(s).map_err(|_| ValidationError::NegativePrice(Decimal::ZERO))?;
        Self::new(decimal)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_new_valid() {
        let price = Price::new(dec!(3100.50)).unwrap();
        assert_eq!(price.as_decimal(), dec!(3100.50));
    }

    #[test]
    fn test_price_new_negative() {
        let result = Price::new(dec!(-1.0));
        assert!(matches!(result, Err(ValidationError::NegativePrice(_))));
    }

    #[test]
    fn test_price_zero() {
        assert!(Price::ZERO.is_zero());
    }

    #[test]
    fn test_price_max_min() {
        let a = Price::new(dec!(10.5)).unwrap();
        let b = Price::new(dec!(9.8)).unwrap();
        assert_eq!(a.max(b), a);
        assert_eq!(a.min(b), b);
    }

    #[test]
    fn test_price_arithmetic() {
        let a = Price::new(dec!(10.5)).unwrap();
        let b = Price::new(dec!(0.5)).unwrap();
        assert_eq!(a + b, Price::new(dec!(11.0)).unwrap());
        assert_eq!(a - b, Price::new(dec!(10.0)).unwrap());
    }

    #[test]
    fn test_price_from_str() {
        let price: Price = "3100.5".parse().unwrap();
        assert_eq!(price.as_decimal(), dec!(3100.5));
        assert!("abc".parse::<Price>().is_err());
    }

    #[test]
    fn test_price_serde_roundtrip() {
        let price = Price::new(dec!(42.42)).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(price, parsed);
    }
}
