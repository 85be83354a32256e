//! Composed multi-frequency view of one instrument.

use kgrid_core::data::{BarSequence, Frequency};

use crate::align::{align, AlignedGrid};
use crate::error::EngineError;
use crate::resample::resample;

/// A base sequence, its aggregated coarser sequences, and the aligned
/// grid over all of them.
///
/// This is the bundle a charting or analysis consumer reads: aggregate
/// each requested target frequency from the base sequence, then align
/// everything onto the base timestamps. The view owns its inputs and is
/// read-only once built.
///
/// # Examples
///
/// ```
/// use kgrid_core::data::BarSequence;
/// use kgrid_core::types::Symbol;
/// use kgrid_engine::MultiFrequencyView;
///
/// let base = BarSequence::empty(Symbol::new("SH000001").unwrap(), "1m".parse().unwrap());
/// let view = MultiFrequencyView::build(base, &["5m".parse().unwrap()]).unwrap();
/// assert_eq!(view.aggregated().len(), 1);
/// assert_eq!(view.grid().frequencies().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MultiFrequencyView {
    base: BarSequence,
    aggregated: Vec<BarSequence>,
    grid: AlignedGrid,
}

impl MultiFrequencyView {
    /// Aggregates the base sequence to every target frequency and aligns
    /// the results onto the base timestamp grid.
    ///
    /// The base frequency is included in the grid automatically; listing
    /// it among `targets` is a duplicate.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::IncompatibleFrequency` if a target cannot
    /// be aggregated from the base frequency, or
    /// `EngineError::DuplicateFrequency` if a target repeats (the base
    /// frequency counts as taken).
    pub fn build(base: BarSequence, targets: &[Frequency]) -> Result<Self, EngineError> {
        tracing::info!(
            symbol = %base.symbol(),
            base_frequency = %base.frequency(),
            targets = targets.len(),
            "Building multi-frequency view"
        );

        let mut aggregated = Vec::with_capacity(targets.len());
        for &target in targets {
            aggregated.push(resample(&base, target)?);
        }
        let grid = align(&base, &aggregated)?;

        Ok(Self {
            base,
            aggregated,
            grid,
        })
    }

    /// Returns the base sequence.
    #[must_use]
    pub fn base(&self) -> &BarSequence {
        &self.base
    }

    /// Returns the aggregated sequences, in target order.
    #[must_use]
    pub fn aggregated(&self) -> &[BarSequence] {
        &self.aggregated
    }

    /// Returns the sequence at a frequency: the base itself or one of
    /// the aggregated sequences.
    #[must_use]
    pub fn sequence(&self, frequency: Frequency) -> Option<&BarSequence> {
        if self.base.frequency() == frequency {
            return Some(&self.base);
        }
        self.aggregated
            .iter()
            .find(|sequence| sequence.frequency() == frequency)
    }

    /// Returns the aligned grid.
    #[must_use]
    pub fn grid(&self) -> &AlignedGrid {
        &self.grid
    }

    /// Consumes the view, returning the aligned grid.
    #[must_use]
    pub fn into_grid(self) -> AlignedGrid {
        self.grid
    }
}
