//! Bar data structures and frequency handling.
//!
//! This module provides the data structures the engine computes over:
//!
//! # Structures
//!
//! - `BarData` - A single OHLCV observation
//! - `BarSequence` - An ordered, timestamp-unique sequence of bars for
//!   one `(symbol, frequency)` pair
//! - `Frequency` - The sampling-interval label of a bar sequence
//! - `FrequencyUnit` - Supported interval units

mod bar;
mod frequency;
mod sequence;

pub use bar::{BarData, BarDataBuilder};
pub use frequency::{Frequency, FrequencyError, FrequencyUnit};
pub use sequence::BarSequence;

/// Validation error for data structures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataValidationError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Invalid price (high < low, etc.)
    #[error("invalid price relationship: {0}")]
    InvalidPriceRelation(String),

    /// Invalid timestamp
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A bar's symbol differs from its sequence's symbol
    #[error("bar at index {index} has symbol {actual}, expected {expected}")]
    SymbolMismatch {
        /// Symbol of the sequence
        expected: String,
        /// Symbol found on the offending bar
        actual: String,
        /// Index of the offending bar
        index: usize,
    },

    /// Timestamps are not strictly increasing
    #[error("bar at index {index} is out of order: {prev} -> {next}")]
    OutOfOrder {
        /// Index of the offending bar
        index: usize,
        /// Timestamp of the preceding bar (millis)
        prev: i64,
        /// Timestamp of the offending bar (millis)
        next: i64,
    },

    /// A bar failed field-level validation
    #[error("malformed bar at index {index}: {reason}")]
    MalformedBar {
        /// Index of the offending bar
        index: usize,
        /// Field-level validation failure
        reason: String,
    },
}
