//! Cross-frequency alignment onto a base timestamp grid.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use kgrid_core::data::{BarData, BarSequence, Frequency};
use kgrid_core::types::{Symbol, Timestamp};

use crate::error::EngineError;

/// Per-frequency bar slots aligned to one base timestamp grid.
///
/// For every frequency there is exactly one slot per base timestamp:
/// `Some(bar)` where a coarser bar closes at that instant, `None`
/// everywhere else. Consumers walk the base axis and decide themselves
/// how to render the gaps (carry-forward, blank, skip); the grid never
/// fabricates values. The base frequency is always present as an
/// identity series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedGrid {
    symbol: Symbol,
    base_frequency: Frequency,
    timestamps: Vec<Timestamp>,
    series: HashMap<Frequency, Vec<Option<BarData>>>,
}

impl AlignedGrid {
    /// Returns the instrument symbol.
    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Returns the base frequency the grid is indexed by.
    #[must_use]
    pub fn base_frequency(&self) -> Frequency {
        self.base_frequency
    }

    /// Returns the base timestamps, one per grid position.
    #[must_use]
    pub fn timestamps(&self) -> &[Timestamp] {
        &self.timestamps
    }

    /// Returns all frequencies in the grid, finest first.
    #[must_use]
    pub fn frequencies(&self) -> Vec<Frequency> {
        let mut frequencies: Vec<Frequency> = self.series.keys().copied().collect();
        frequencies.sort_by_key(Frequency::millis);
        frequencies
    }

    /// Returns the aligned slots for a frequency, if present.
    #[must_use]
    pub fn series(&self, frequency: Frequency) -> Option<&[Option<BarData>]> {
        self.series.get(&frequency).map(Vec::as_slice)
    }

    /// Returns the number of grid positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns true if the grid has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Returns the alignment row at a grid position: for every
    /// frequency, the bar covering that base timestamp or `None` if no
    /// coarser bar closes there yet.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<AlignmentRow<'_>> {
        let timestamp = *self.timestamps.get(index)?;
        let mut covering: Vec<(Frequency, Option<&BarData>)> = self
            .series
            .iter()
            .map(|(frequency, slots)| (*frequency, slots[index].as_ref()))
            .collect();
        covering.sort_by_key(|(frequency, _)| frequency.millis());
        Some(AlignmentRow {
            timestamp,
            covering,
        })
    }
}

/// One grid position across all frequencies.
#[derive(Debug, Clone)]
pub struct AlignmentRow<'a> {
    /// The base timestamp at this position
    pub timestamp: Timestamp,
    /// Per-frequency covering bar, finest first
    pub covering: Vec<(Frequency, Option<&'a BarData>)>,
}

/// Aligns coarser bar sequences onto the base sequence's timestamp grid.
///
/// Every sequence is scanned once with a forward-only cursor: a coarser
/// bar fills the slot whose base timestamp equals its own (coarser bars
/// close on base-bar boundaries), every other slot stays `None`, and no
/// bar is ever matched twice. Matching is exact - the engine never
/// interpolates or nearest-matches; resample beforehand if inexact
/// matching is needed. The base sequence itself appears in the result as
/// an identity series.
///
/// # Errors
///
/// Returns `EngineError::SymbolMismatch` if a sequence is for a
/// different instrument than the base, or
/// `EngineError::DuplicateFrequency` if two inputs share a frequency
/// (the base frequency counts as taken).
///
/// # Examples
///
/// ```
/// use kgrid_core::data::BarSequence;
/// use kgrid_core::types::Symbol;
/// use kgrid_engine::align;
///
/// let base = BarSequence::empty(Symbol::new("SH000001").unwrap(), "1m".parse().unwrap());
/// let grid = align(&base, &[]).unwrap();
/// assert!(grid.is_empty());
/// assert_eq!(grid.frequencies().len(), 1);
/// ```
pub fn align(base: &BarSequence, higher: &[BarSequence]) -> Result<AlignedGrid, EngineError> {
    tracing::debug!(
        symbol = %base.symbol(),
        base_frequency = %base.frequency(),
        positions = base.len(),
        sequences = higher.len(),
        "Aligning bar sequences"
    );

    let timestamps = base.timestamps();
    let mut series = HashMap::with_capacity(higher.len() + 1);

    // identity series for the base frequency
    series.insert(
        base.frequency(),
        base.iter().cloned().map(Some).collect::<Vec<_>>(),
    );

    for sequence in higher {
        if sequence.symbol() != base.symbol() {
            return Err(EngineError::SymbolMismatch {
                base: base.symbol().clone(),
                other: sequence.symbol().clone(),
                frequency: sequence.frequency(),
            });
        }
        if series.contains_key(&sequence.frequency()) {
            return Err(EngineError::DuplicateFrequency {
                frequency: sequence.frequency(),
            });
        }
        series.insert(sequence.frequency(), align_one(&timestamps, sequence));
    }

    Ok(AlignedGrid {
        symbol: base.symbol().clone(),
        base_frequency: base.frequency(),
        timestamps,
        series,
    })
}

/// Walks one coarser sequence along the base timestamps.
///
/// Both inputs are sorted ascending, so a single cursor suffices: bars
/// that closed strictly before the current base timestamp can never
/// match a later one and are skipped for good.
fn align_one(base_timestamps: &[Timestamp], sequence: &BarSequence) -> Vec<Option<BarData>> {
    let bars = sequence.bars();
    let mut slots = Vec::with_capacity(base_timestamps.len());
    let mut cursor = 0;

    for &timestamp in base_timestamps {
        while cursor < bars.len() && bars[cursor].timestamp < timestamp {
            cursor += 1;
        }
        if cursor < bars.len() && bars[cursor].timestamp == timestamp {
            slots.push(Some(bars[cursor].clone()));
            cursor += 1;
        } else {
            slots.push(None);
        }
    }

    slots
}
