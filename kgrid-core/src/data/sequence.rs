//! Ordered bar sequences.

use serde::{Deserialize, Serialize};

use crate::types::{Symbol, Timestamp};

use super::{BarData, DataValidationError, Frequency};

/// An ordered, timestamp-unique sequence of bars for one
/// `(symbol, frequency)` pair.
///
/// Construction validates the whole sequence: every bar must carry the
/// sequence's symbol, pass field-level validation, and be strictly later
/// than its predecessor. Irregular spacing between bars is fine - the
/// sequence assumes no gapless grid. Once built, a sequence is read-only.
///
/// # Examples
///
/// ```
/// use kgrid_core::data::{BarSequence, Frequency};
/// use kgrid_core::types::Symbol;
///
/// let freq: Frequency = "1m".parse().unwrap();
/// let seq = BarSequence::empty(Symbol::new("SH000001").unwrap(), freq);
/// assert!(seq.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarSequence {
    symbol: Symbol,
    frequency: Frequency,
    bars: Vec<BarData>,
}

impl BarSequence {
    /// Creates a new `BarSequence`, validating every bar.
    ///
    /// # Errors
    ///
    /// Returns `DataValidationError::SymbolMismatch` if a bar's symbol
    /// differs from `symbol`, `DataValidationError::MalformedBar` if a
    /// bar fails field-level validation, or
    /// `DataValidationError::OutOfOrder` if timestamps are not strictly
    /// increasing.
    pub fn new(
        symbol: Symbol,
        frequency: Frequency,
        bars: Vec<BarData>,
    ) -> Result<Self, DataValidationError> {
        for (index, bar) in bars.iter().enumerate() {
            if bar.symbol != symbol {
                return Err(DataValidationError::SymbolMismatch {
                    expected: symbol.to_string(),
                    actual: bar.symbol.to_string(),
                    index,
                });
            }
            bar.validate()
                .map_err(|err| DataValidationError::MalformedBar {
                    index,
                    reason: err.to_string(),
                })?;
            if index > 0 {
                let prev = bars[index - 1].timestamp;
                if bar.timestamp <= prev {
                    return Err(DataValidationError::OutOfOrder {
                        index,
                        prev: prev.as_millis(),
                        next: bar.timestamp.as_millis(),
                    });
                }
            }
        }
        Ok(Self {
            symbol,
            frequency,
            bars,
        })
    }

    /// Creates an empty `BarSequence`.
    #[must_use]
    pub fn empty(symbol: Symbol, frequency: Frequency) -> Self {
        Self {
            symbol,
            frequency,
            bars: Vec::new(),
        }
    }

    /// Returns the instrument symbol.
    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Returns the sampling frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the bars as a slice.
    #[must_use]
    pub fn bars(&self) -> &[BarData] {
        &self.bars
    }

    /// Returns the timestamps of all bars, in order.
    #[must_use]
    pub fn timestamps(&self) -> Vec<Timestamp> {
        self.bars.iter().map(|bar| bar.timestamp).collect()
    }

    /// Returns the number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns true if the sequence has no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Gets the bar at the given index, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BarData> {
        self.bars.get(index)
    }

    /// Returns the first bar, if any.
    #[must_use]
    pub fn first(&self) -> Option<&BarData> {
        self.bars.first()
    }

    /// Returns the last bar, if any.
    #[must_use]
    pub fn last(&self) -> Option<&BarData> {
        self.bars.last()
    }

    /// Returns an iterator over the bars.
    pub fn iter(&self) -> std::slice::Iter<'_, BarData> {
        self.bars.iter()
    }
}

impl<'a> IntoIterator for &'a BarSequence {
    type Item = &'a BarData;
    type IntoIter = std::slice::Iter<'a, BarData>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Price, Volume};
    use rust_decimal_macros::dec;

    fn bar(symbol: &str, millis: i64) -> BarData {
        BarData::builder()
            .symbol(Symbol::new(symbol).unwrap())
            .timestamp(Timestamp::new(millis).unwrap())
            .open(Price::new(dec!(100)).unwrap())
            .high(Price::new(dec!(101)).unwrap())
            .low(Price::new(dec!(99)).unwrap())
            .close(Price::new(dec!(100.5)).unwrap())
            .volume(Volume::new(dec!(10)).unwrap())
            .build()
            .unwrap()
    }

    fn freq(label: &str) -> Frequency {
        label.parse().unwrap()
    }

    #[test]
    fn test_sequence_new_valid() {
        let bars = vec![bar("SH000001", 60_000), bar("SH000001", 120_000)];
        let seq = BarSequence::new(Symbol::new("SH000001").unwrap(), freq("1m"), bars).unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.timestamps().len(), 2);
        assert_eq!(seq.first().unwrap().timestamp.as_millis(), 60_000);
        assert_eq!(seq.last().unwrap().timestamp.as_millis(), 120_000);
    }

    #[test]
    fn test_sequence_empty() {
        let seq = BarSequence::empty(Symbol::new("SH000001").unwrap(), freq("1m"));
        assert!(seq.is_empty());
        assert!(seq.first().is_none());
        assert!(seq.timestamps().is_empty());
    }

    #[test]
    fn test_sequence_symbol_mismatch() {
        let bars = vec![bar("SH000001", 60_000), bar("SZ399001", 120_000)];
        let result = BarSequence::new(Symbol::new("SH000001").unwrap(), freq("1m"), bars);
        assert!(matches!(
            result,
            Err(DataValidationError::SymbolMismatch { index: 1, .. })
        ));
    }

    #[test]
    fn test_sequence_out_of_order() {
        let bars = vec![bar("SH000001", 120_000), bar("SH000001", 60_000)];
        let result = BarSequence::new(Symbol::new("SH000001").unwrap(), freq("1m"), bars);
        assert!(matches!(
            result,
            Err(DataValidationError::OutOfOrder { index: 1, .. })
        ));
    }

    #[test]
    fn test_sequence_duplicate_timestamp() {
        let bars = vec![bar("SH000001", 60_000), bar("SH000001", 60_000)];
        let result = BarSequence::new(Symbol::new("SH000001").unwrap(), freq("1m"), bars);
        assert!(matches!(
            result,
            Err(DataValidationError::OutOfOrder { .. })
        ));
    }

    #[test]
    fn test_sequence_malformed_bar() {
        let mut bad = bar("SH000001", 60_000);
        bad.low = Price::new(dec!(200)).unwrap(); // low above high
        let result = BarSequence::new(Symbol::new("SH000001").unwrap(), freq("1m"), vec![bad]);
        assert!(matches!(
            result,
            Err(DataValidationError::MalformedBar { index: 0, .. })
        ));
    }

    #[test]
    fn test_sequence_irregular_spacing_ok() {
        let bars = vec![
            bar("SH000001", 60_000),
            bar("SH000001", 180_000),
            bar("SH000001", 190_000),
        ];
        let seq = BarSequence::new(Symbol::new("SH000001").unwrap(), freq("1m"), bars).unwrap();
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn test_sequence_serde_roundtrip() {
        let bars = vec![bar("SH000001", 60_000)];
        let seq = BarSequence::new(Symbol::new("SH000001").unwrap(), freq("1m"), bars).unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        let parsed: BarSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(seq, parsed);
    }
}
