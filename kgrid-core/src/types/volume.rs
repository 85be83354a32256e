//! Volume type for representing traded volume.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use super::ValidationError;

/// Volume type - used for representing traded volume over a bar interval.
///
/// Wraps a `Decimal` value. Volume is non-negative and additive: merging
/// a window of bars sums their volumes, which is what the `Add` and
/// `Sum` impls exist for.
///
/// # Examples
///
/// ```
/// use kgrid_core::types::Volume;
/// use rust_decimal_macros::dec;
///
/// let a = Volume::new(dec!(10)).unwrap();
/// let b = Volume::new(dec!(20)).unwrap();
/// assert_eq!(a + b, Volume::new(dec!(30)).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Volume(Decimal);

impl Volume {
    /// Zero volume constant.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new `Volume` from a `Decimal` value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NegativeVolume` if the value is negative.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value < Decimal::ZERO {
            return Err(ValidationError::NegativeVolume(value));
        }
        Ok(Self(value))
    }

    /// Creates a new `Volume` without validation.
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

    /// Returns true if the volume is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Volume {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal =
            Decimal::from_str(s).map_err(|_| ValidationError::NegativeVolume(Decimal::ZERO))?;
        Self::new(decimal)
    }
}

impl Add for Volume {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Volume {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
