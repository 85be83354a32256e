//! Engine error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use kgrid_core::data::{DataValidationError, Frequency};
use kgrid_core::types::Symbol;

/// Why two frequencies cannot be aggregated.
///
/// The two cases indicate different caller mistakes: a unit mismatch
/// means daily data was not pre-expressed in minutes, an invalid ratio
/// means the requested target does not divide evenly into source bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncompatibilityKind {
    /// The frequencies use different units
    UnitMismatch,
    /// Target count smaller than, or not an integer multiple of, the source count
    InvalidRatio,
}

impl fmt::Display for IncompatibilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnitMismatch => write!(f, "unit mismatch"),
            Self::InvalidRatio => write!(f, "non-integer or non-increasing ratio"),
        }
    }
}

/// Engine error type.
///
/// All engine errors are data-validity errors raised synchronously at
/// the offending call; none are transient, so the engine never retries
/// internally.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    /// Frequencies cannot be aggregated
    #[error("incompatible frequencies {from} -> {to}: {kind}")]
    IncompatibleFrequency {
        /// Source frequency
        from: Frequency,
        /// Requested target frequency
        to: Frequency,
        /// Which compatibility rule was violated
        kind: IncompatibilityKind,
    },

    /// Alignment across different instruments
    #[error("symbol mismatch at frequency {frequency}: base is {base}, got {other}")]
    SymbolMismatch {
        /// Symbol of the base sequence
        base: Symbol,
        /// Symbol of the offending sequence
        other: Symbol,
        /// Frequency of the offending sequence
        frequency: Frequency,
    },

    /// Two alignment inputs share a frequency
    #[error("duplicate frequency {frequency} in alignment input")]
    DuplicateFrequency {
        /// The repeated frequency
        frequency: Frequency,
    },

    /// Input bars violate ordering or field-range rules
    #[error("malformed input: {reason}")]
    MalformedInput {
        /// Underlying validation failure
        reason: String,
    },
}

impl From<DataValidationError> for EngineError {
    fn from(err: DataValidationError) -> Self {
        Self::MalformedInput {
            reason: err.to_string(),
        }
    }
}
