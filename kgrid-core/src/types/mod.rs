//! `NewType` wrappers for financial primitives.
//!
//! This module provides type-safe wrappers around decimal values
//! to prevent mixing incompatible types at compile time.
//!
//! # Types
//!
//! - [`Price`] - Asset price values
//! - [`Volume`] - Traded volume values
//! - [`Symbol`] - Instrument identifiers
//! - [`Timestamp`] - Unix millisecond timestamps

mod price;
mod symbol;
mod timestamp;
mod volume;

pub use price::Price;
pub use symbol::Symbol;
pub use timestamp::Timestamp;
pub use volume::Volume;

/// Validation error for `NewType` construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Price value is negative
    #[error("price cannot be negative: {0}")]
    NegativePrice(rust_decimal::Decimal),

    /// Volume value is negative
    #[error("volume cannot be negative: {0}")]
    NegativeVolume(rust_decimal::Decimal),

    /// Symbol format is invalid
    #[error("invalid symbol format: {0}")]
    InvalidSymbol(String),

    /// Symbol is empty
    #[error("symbol cannot be empty")]
    EmptySymbol,

    /// Timestamp is invalid (negative)
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(i64),
}
