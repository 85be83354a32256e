//! Symbol type for representing instrument identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Symbol type - used for representing instrument identifiers.
///
/// Wraps a `String` value with validation to ensure proper format.
/// Symbols are typically exchange-prefixed stock codes such as
/// "SH000001" or "SZ399001", but any alphanumeric identifier is
/// accepted so vendor-specific forms like "000001_XSHG" also work.
///
/// # Examples
///
/// ```
/// use kgrid_core::types::Symbol;
///
/// let symbol = Symbol::new("SH000001").unwrap();
/// assert_eq!(symbol.as_str(), "SH000001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new `Symbol` from a string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptySymbol` if the string is empty.
    /// Returns `ValidationError::InvalidSymbol` if the format is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use kgrid_core::types::Symbol;
    ///
    /// let symbol = Symbol::new("SH000001").unwrap();
    /// assert!(Symbol::new("").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }
        // Basic validation: must contain only alphanumeric chars, hyphens, underscores
        if !s
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::InvalidSymbol(s));
        }
        Ok(Self(s))
    }

    /// Creates a new `Symbol` without validation.
    ///
    /// # Safety
    ///
    /// The caller must ensure the value is a valid symbol format.
    #[must_use]
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the exchange prefix from the symbol (e.g., "SH" from "SH000001").
    ///
    /// Returns `None` if the symbol does not start with alphabetic characters
    /// or consists of them entirely.
    #[must_use]
    pub fn exchange_prefix(&self) -> Option<&str> {
        let end = self.0.find(|c: char| c.is_ascii_digit())?;
        if end == 0 {
            None
        } else {
            Some(&self.0[..end])
        }
    }

    /// Returns the numeric code from the symbol (e.g., "000001" from "SH000001").
    ///
    /// Returns `None` if the symbol contains no digits.
    #[must_use]
    pub fn numeric_code(&self) -> Option<&str> {
        let start = self.0.find(|c: char| c.is_ascii_digit())?;
        Some(&self.0[start..])
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}
