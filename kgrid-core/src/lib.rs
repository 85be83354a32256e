//! # KGrid Core
//!
//! Core types for the kgrid multi-frequency bar engine.
//!
//! This crate provides:
//! - `NewType` wrappers for financial primitives (`Price`, `Volume`, `Symbol`, `Timestamp`)
//! - The `BarData` OHLCV record with builder and validation
//! - The `Frequency` sampling-interval type with label parsing and ratio checks
//! - The `BarSequence` container with construction-time ordering guarantees

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_const_for_fn)]

/// Core type definitions and `NewType` wrappers
pub mod types;

/// Bar data structures and frequency handling
pub mod data;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::data::*;
    pub use crate::types::*;
}
