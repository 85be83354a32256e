//! Frequency labels and aggregation-ratio checks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Supported frequency units.
///
/// Minutes are the native aggregation unit; daily data is expected to be
/// pre-expressed as an equivalent minute count (e.g. `240m` for a 4-hour
/// session) before aggregation. Day labels still parse so that callers
/// naming them get a typed unit diagnostic instead of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyUnit {
    /// One minute
    Minute,
    /// One trading day
    Day,
}

impl FrequencyUnit {
    /// Returns the label suffix for this unit (`'m'` or `'d'`).
    #[must_use]
    pub const fn suffix(self) -> char {
        match self {
            Self::Minute => 'm',
            Self::Day => 'd',
        }
    }

    /// Returns the duration of one unit.
    #[must_use]
    pub const fn duration(self) -> Duration {
        match self {
            Self::Minute => Duration::from_secs(60),
            Self::Day => Duration::from_secs(24 * 60 * 60),
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// The sampling-interval label of a bar sequence.
///
/// A frequency is a positive count of a unit: `5m`, `30m`, `240m`, `1d`.
/// Two frequencies are compatible for aggregation iff they share a unit
/// and the target count is an integer multiple of the source count;
/// [`Frequency::ratio_to`] is the single place that rule lives.
///
/// Serialized as its label string.
///
/// # Examples
///
/// ```
/// use kgrid_core::data::Frequency;
///
/// let base: Frequency = "5m".parse().unwrap();
/// let target: Frequency = "30m".parse().unwrap();
/// assert_eq!(base.ratio_to(target).unwrap(), 6);
/// assert_eq!(target.to_string(), "30m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Frequency {
    count: u32,
    unit: FrequencyUnit,
}

impl Frequency {
    /// Creates a new `Frequency` from a count and unit.
    ///
    /// # Errors
    ///
    /// Returns `FrequencyError::ZeroCount` if the count is zero.
    pub fn new(count: u32, unit: FrequencyUnit) -> Result<Self, FrequencyError> {
        if count == 0 {
            return Err(FrequencyError::ZeroCount);
        }
        Ok(Self { count, unit })
    }

    /// Creates a minute frequency.
    pub fn minutes(count: u32) -> Result<Self, FrequencyError> {
        Self::new(count, FrequencyUnit::Minute)
    }

    /// Creates a day frequency.
    pub fn days(count: u32) -> Result<Self, FrequencyError> {
        Self::new(count, FrequencyUnit::Day)
    }

    /// Returns the unit count.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Returns the unit.
    #[must_use]
    pub const fn unit(&self) -> FrequencyUnit {
        self.unit
    }

    /// Returns the count if this is a minute frequency.
    #[must_use]
    pub const fn as_minutes(&self) -> Option<u32> {
        match self.unit {
            FrequencyUnit::Minute => Some(self.count),
            FrequencyUnit::Day => None,
        }
    }

    /// Returns the duration of one interval at this frequency.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.unit.duration() * self.count
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn millis(&self) -> i64 {
        self.duration().as_millis() as i64
    }

    /// Returns the integer number of bars at this frequency that merge
    /// into one bar at `target`.
    ///
    /// Equal frequencies yield ratio 1 (aggregation is then the
    /// identity). A target with a different unit, a smaller count, or a
    /// count that is not an integer multiple of this one is incompatible.
    ///
    /// # Errors
    ///
    /// Returns `FrequencyError::UnitMismatch` if the units differ, or
    /// `FrequencyError::InvalidRatio` if the target count is smaller than
    /// or not an integer multiple of this count.
    pub fn ratio_to(self, target: Self) -> Result<u32, FrequencyError> {
        if self.unit != target.unit {
            return Err(FrequencyError::UnitMismatch {
                from: self,
                to: target,
            });
        }
        if target.count < self.count || target.count % self.count != 0 {
            return Err(FrequencyError::InvalidRatio {
                from: self,
                to: target,
            });
        }
        Ok(target.count / self.count)
    }

    /// Returns true if bars at this frequency can be aggregated to `target`.
    #[must_use]
    pub fn is_compatible_with(self, target: Self) -> bool {
        self.ratio_to(target).is_ok()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.unit)
    }
}

impl FromStr for Frequency {
    type Err = FrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let (count_str, unit) = match label.char_indices().last() {
            Some((idx, 'm')) => (&label[..idx], FrequencyUnit::Minute),
            Some((idx, 'd')) => (&label[..idx], FrequencyUnit::Day),
            Some((_, other)) => {
                return Err(FrequencyError::InvalidLabel {
                    label: label.to_string(),
                    reason: format!("unknown unit suffix '{other}'"),
                });
            }
            None => {
                return Err(FrequencyError::InvalidLabel {
                    label: s.to_string(),
                    reason: "label is empty".to_string(),
                });
            }
        };
        if count_str.is_empty() {
            return Err(FrequencyError::InvalidLabel {
                label: label.to_string(),
                reason: "missing count".to_string(),
            });
        }
        let count: u32 = count_str.parse().map_err(|_| FrequencyError::InvalidLabel {
            label: label.to_string(),
            reason: format!("count '{count_str}' is not a positive integer"),
        })?;
        Self::new(count, unit)
    }
}

impl TryFrom<String> for Frequency {
    type Error = FrequencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Frequency> for String {
    fn from(frequency: Frequency) -> Self {
        frequency.to_string()
    }
}

/// Error raised by frequency parsing and compatibility checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrequencyError {
    /// Label could not be parsed
    #[error("invalid frequency label '{label}': {reason}")]
    InvalidLabel {
        /// The offending label
        label: String,
        /// Why parsing failed
        reason: String,
    },

    /// Frequency count is zero
    #[error("frequency count cannot be zero")]
    ZeroCount,

    /// Aggregation across different units
    #[error("frequency units differ: {from} vs {to}")]
    UnitMismatch {
        /// Source frequency
        from: Frequency,
        /// Target frequency
        to: Frequency,
    },

    /// Target count not a positive integer multiple of the source count
    #[error("target frequency {to} is not an integer multiple of {from}")]
    InvalidRatio {
        /// Source frequency
        from: Frequency,
        /// Target frequency
        to: Frequency,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_parse_valid() {
        let freq: Frequency = "5m".parse().unwrap();
        assert_eq!(freq.count(), 5);
        assert_eq!(freq.unit(), FrequencyUnit::Minute);
        assert_eq!(freq.as_minutes(), Some(5));

        let daily: Frequency = "1d".parse().unwrap();
        assert_eq!(daily.unit(), FrequencyUnit::Day);
        assert_eq!(daily.as_minutes(), None);

        let padded: Frequency = " 240m ".parse().unwrap();
        assert_eq!(padded.count(), 240);
    }

    #[test]
    fn test_frequency_parse_invalid() {
        assert!(matches!(
            "".parse::<Frequency>(),
            Err(FrequencyError::InvalidLabel { .. })
        ));
        assert!(matches!(
            "m".parse::<Frequency>(),
            Err(FrequencyError::InvalidLabel { .. })
        ));
        assert!(matches!(
            "5h".parse::<Frequency>(),
            Err(FrequencyError::InvalidLabel { .. })
        ));
        assert!(matches!(
            "xm".parse::<Frequency>(),
            Err(FrequencyError::InvalidLabel { .. })
        ));
        assert!(matches!(
            "5".parse::<Frequency>(),
            Err(FrequencyError::InvalidLabel { .. })
        ));
        assert!(matches!(
            "0m".parse::<Frequency>(),
            Err(FrequencyError::ZeroCount)
        ));
    }

    #[test]
    fn test_frequency_display_roundtrip() {
        for label in ["1m", "5m", "240m", "1d"] {
            let freq: Frequency = label.parse().unwrap();
            assert_eq!(freq.to_string(), label);
        }
    }

    #[test]
    fn test_frequency_ratio() {
        let m5: Frequency = "5m".parse().unwrap();
        let m30: Frequency = "30m".parse().unwrap();
        assert_eq!(m5.ratio_to(m30).unwrap(), 6);
        assert!(m5.is_compatible_with(m30));
    }

    #[test]
    fn test_frequency_ratio_identity() {
        let m5: Frequency = "5m".parse().unwrap();
        assert_eq!(m5.ratio_to(m5).unwrap(), 1);
    }

    #[test]
    fn test_frequency_ratio_not_multiple() {
        let m5: Frequency = "5m".parse().unwrap();
        let m7: Frequency = "7m".parse().unwrap();
        assert!(matches!(
            m5.ratio_to(m7),
            Err(FrequencyError::InvalidRatio { .. })
        ));
    }

    #[test]
    fn test_frequency_ratio_decreasing() {
        let m30: Frequency = "30m".parse().unwrap();
        let m5: Frequency = "5m".parse().unwrap();
        assert!(matches!(
            m30.ratio_to(m5),
            Err(FrequencyError::InvalidRatio { .. })
        ));
    }

    #[test]
    fn test_frequency_ratio_unit_mismatch() {
        let m5: Frequency = "5m".parse().unwrap();
        let d1: Frequency = "1d".parse().unwrap();
        assert!(matches!(
            m5.ratio_to(d1),
            Err(FrequencyError::UnitMismatch { .. })
        ));
        assert!(!m5.is_compatible_with(d1));
    }

    #[test]
    fn test_frequency_duration() {
        let m5: Frequency = "5m".parse().unwrap();
        assert_eq!(m5.duration(), Duration::from_secs(300));
        assert_eq!(m5.millis(), 300_000);

        let d1: Frequency = "1d".parse().unwrap();
        assert_eq!(d1.millis(), 86_400_000);
    }

    #[test]
    fn test_frequency_serde_roundtrip() {
        let freq: Frequency = "15m".parse().unwrap();
        let json = serde_json::to_string(&freq).unwrap();
        assert_eq!(json, "\"15m\"");
        let parsed: Frequency = serde_json::from_str(&json).unwrap();
        assert_eq!(freq, parsed);
    }

    #[test]
    fn test_frequency_serde_rejects_bad_label() {
        let result: Result<Frequency, _> = serde_json::from_str("\"7x\"");
        assert!(result.is_err());
    }
}
