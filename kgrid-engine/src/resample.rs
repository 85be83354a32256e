//! Bar aggregation across frequencies.

use kgrid_core::data::{BarData, BarSequence, Frequency, FrequencyError};

use crate::error::{EngineError, IncompatibilityKind};

/// Merges a base-frequency bar sequence into a coarser-frequency one.
///
/// Source bars are partitioned in timestamp order into consecutive
/// windows of `ratio` bars, where ratio = target count / source count.
/// Each window becomes one newly constructed bar: open from the window's
/// FIRST bar, close and timestamp from its LAST, high/low folded over
/// the window, volume summed. A trailing partial window is emitted by
/// the same rule - it models the coarser bar still forming at the end of
/// the data. An empty source yields an empty result, and aggregating a
/// sequence onto its own frequency (ratio 1) reproduces it bar for bar.
///
/// # Errors
///
/// Returns `EngineError::IncompatibleFrequency` if the two frequencies
/// do not share a unit or the target count is not an integer multiple of
/// the source count.
///
/// # Examples
///
/// ```
/// use kgrid_core::data::{BarSequence, Frequency};
/// use kgrid_core::types::Symbol;
/// use kgrid_engine::resample;
///
/// let base = BarSequence::empty(Symbol::new("SH000001").unwrap(), "1m".parse().unwrap());
/// let coarse = resample(&base, "5m".parse().unwrap()).unwrap();
/// assert!(coarse.is_empty());
/// assert_eq!(coarse.frequency(), "5m".parse::<Frequency>().unwrap());
/// ```
pub fn resample(source: &BarSequence, target: Frequency) -> Result<BarSequence, EngineError> {
    let ratio = source.frequency().ratio_to(target).map_err(|err| {
        let kind = match err {
            FrequencyError::UnitMismatch { .. } => IncompatibilityKind::UnitMismatch,
            _ => IncompatibilityKind::InvalidRatio,
        };
        EngineError::IncompatibleFrequency {
            from: source.frequency(),
            to: target,
            kind,
        }
    })?;

    tracing::debug!(
        symbol = %source.symbol(),
        from = %source.frequency(),
        to = %target,
        ratio,
        bars = source.len(),
        "Resampling bar sequence"
    );

    #[allow(clippy::cast_possible_truncation)]
    let window_len = ratio as usize;
    let merged: Vec<BarData> = source
        .bars()
        .chunks(window_len)
        .filter_map(merge_window)
        .collect();

    let result = BarSequence::new(source.symbol().clone(), target, merged)?;

    tracing::debug!(
        symbol = %result.symbol(),
        to = %target,
        bars = result.len(),
        "Resampled bar sequence"
    );

    Ok(result)
}

/// Merges one window of bars into a single coarser bar.
///
/// Always constructs a fresh bar; the open comes from the window's first
/// element and the close from its last, never from shared storage.
/// Returns `None` only for an empty window, which `chunks` never yields.
fn merge_window(window: &[BarData]) -> Option<BarData> {
    let first = window.first()?;
    let last = window.last()?;
    let high = window.iter().map(|bar| bar.high).max()?;
    let low = window.iter().map(|bar| bar.low).min()?;
    let volume = window.iter().map(|bar| bar.volume).sum();

    BarData::builder()
        .symbol(first.symbol.clone())
        .timestamp(last.timestamp)
        .open(first.open)
        .high(high)
        .low(low)
        .close(last.close)
        .volume(volume)
        .build()
        .ok()
}
