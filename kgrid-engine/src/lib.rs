//! # KGrid Engine
//!
//! Bar aggregation and cross-frequency alignment for the kgrid system.
//!
//! This crate provides:
//! - [`resample`](resample::resample) - merging a base-frequency bar
//!   sequence into a coarser-frequency one by an integer ratio
//! - [`align`](align::align) - mapping coarser sequences onto the base
//!   timestamp grid so consumers can walk a single canonical axis
//! - [`MultiFrequencyView`](view::MultiFrequencyView) - the composed
//!   aggregate-then-align bundle a charting or analysis consumer reads
//!
//! Every operation is a pure, synchronous batch transform: no shared
//! state between calls, no blocking, no retries. Data-validity errors
//! are raised synchronously at the offending call.

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_const_for_fn)]

pub mod align;
pub mod error;
pub mod resample;
pub mod view;

pub use align::{align, AlignedGrid, AlignmentRow};
pub use error::{EngineError, IncompatibilityKind};
pub use resample::resample;
pub use view::MultiFrequencyView;
