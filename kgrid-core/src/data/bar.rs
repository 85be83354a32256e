//! Bar (OHLCV) data structures.

use serde::{Deserialize, Serialize};

use crate::types::{Price, Symbol, Timestamp, Volume};

use super::DataValidationError;

/// A single OHLCV observation for an instrument at a point in time.
///
/// Bars are immutable once produced: merging a window of bars always
/// constructs a new `BarData`, never rewrites an existing one. The
/// timestamp marks the instant the bar closes.
///
/// # Examples
///
/// ```
/// use kgrid_core::data::BarData;
/// use kgrid_core::types::{Price, Symbol, Timestamp, Volume};
/// use rust_decimal_macros::dec;
///
/// let bar = BarData::builder()
///     .symbol(Symbol::new("SH000001").unwrap())
///     .timestamp(Timestamp::new(1_704_067_200_000).unwrap())
///     .open(Price::new(dec!(3100.0)).unwrap())
///     .high(Price::new(dec!(3120.5)).unwrap())
///     .low(Price::new(dec!(3095.0)).unwrap())
///     .close(Price::new(dec!(3110.2)).unwrap())
///     .volume(Volume::new(dec!(18000)).unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarData {
    /// Instrument identifier
    pub symbol: Symbol,
    /// Bar close timestamp
    pub timestamp: Timestamp,
    /// Opening price
    pub open: Price,
    /// Highest price
    pub high: Price,
    /// Lowest price
    pub low: Price,
    /// Closing price
    pub close: Price,
    /// Traded volume
    pub volume: Volume,
}

impl BarData {
    /// Creates a new builder for `BarData`.
    #[must_use]
    pub fn builder() -> BarDataBuilder {
        BarDataBuilder::default()
    }

    /// Validates the bar data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - High price is less than low price
    /// - Open or close price is outside the high-low range
    /// - Timestamp is zero
    pub fn validate(&self) -> Result<(), DataValidationError> {
        if self.timestamp.is_zero() {
            return Err(DataValidationError::InvalidTimestamp(
                "timestamp cannot be zero".to_string(),
            ));
        }

        if self.high < self.low {
            return Err(DataValidationError::InvalidPriceRelation(format!(
                "high ({}) < low ({})",
                self.high, self.low
            )));
        }

        if self.open > self.high || self.open < self.low {
            return Err(DataValidationError::InvalidPriceRelation(format!(
                "open ({}) outside high-low range ({}-{})",
                self.open, self.low, self.high
            )));
        }

        if self.close > self.high || self.close < self.low {
            return Err(DataValidationError::InvalidPriceRelation(format!(
                "close ({}) outside high-low range ({}-{})",
                self.close, self.low, self.high
            )));
        }

        Ok(())
    }

    /// Returns true if this is a bullish (rising) bar.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    /// Returns true if this is a bearish (falling) bar.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> Price {
        self.high - self.low
    }
}

/// Builder for `BarData`.
#[derive(Debug, Default)]
pub struct BarDataBuilder {
    symbol: Option<Symbol>,
    timestamp: Option<Timestamp>,
    open: Option<Price>,
    high: Option<Price>,
    low: Option<Price>,
    close: Option<Price>,
    volume: Option<Volume>,
}

impl BarDataBuilder {
    /// Sets the symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = Some(symbol);
        self
    }

    /// Sets the timestamp.
    #[must_use]
    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Sets the open price.
    #[must_use]
    pub fn open(mut self, open: Price) -> Self {
        self.open = Some(open);
        self
    }

    /// Sets the high price.
    #[must_use]
    pub fn high(mut self, high: Price) -> Self {
        self.high = Some(high);
        self
    }

    /// Sets the low price.
    #[must_use]
    pub fn low(mut self, low: Price) -> Self {
        self.low = Some(low);
        self
    }

    /// Sets the close price.
    #[must_use]
    pub fn close(mut self, close: Price) -> Self {
        self.close = Some(close);
        self
    }

    /// Sets the volume.
    #[must_use]
    pub fn volume(mut self, volume: Volume) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Builds the `BarData`.
    ///
    /// # Errors
    ///
    /// Returns an error if any required field is missing or validation fails.
    pub fn build(self) -> Result<BarData, DataValidationError> {
        let bar = BarData {
            symbol: self
                .symbol
                .ok_or(DataValidationError::MissingField("symbol"))?,
            timestamp: self
                .timestamp
                .ok_or(DataValidationError::MissingField("timestamp"))?,
            open: self.open.ok_or(DataValidationError::MissingField("open"))?,
            high: self.high.ok_or(DataValidationError::MissingField("high"))?,
            low: self.low.ok_or(DataValidationError::MissingField("low"))?,
            close: self
                .close
                .ok_or(DataValidationError::MissingField("close"))?,
            volume: self
                .volume
                .ok_or(DataValidationError::MissingField("volume"))?,
        };
        bar.validate()?;
        Ok(bar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_valid_bar() -> BarData {
        BarData::builder()
            .symbol(Symbol::new("SH000001").unwrap())
            .timestamp(Timestamp::new(1_704_067_200_000).unwrap())
            .open(Price::new(dec!(3100.0)).unwrap())
            .high(Price::new(dec!(3120.5)).unwrap())
            .low(Price::new(dec!(3095.0)).unwrap())
            .close(Price::new(dec!(3110.2)).unwrap())
            .volume(Volume::new(dec!(18000)).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_bar_builder_valid() {
        let bar = create_valid_bar();
        assert_eq!(bar.symbol.as_str(), "SH000001");
        assert_eq!(bar.volume, Volume::new(dec!(18000)).unwrap());
    }

    #[test]
    fn test_bar_builder_missing_field() {
        let result = BarData::builder()
            .symbol(Symbol::new("SH000001").unwrap())
            .build();
        assert!(matches!(result, Err(DataValidationError::MissingField(_))));
    }

    #[test]
    fn test_bar_invalid_high_low() {
        let result = BarData::builder()
            .symbol(Symbol::new("SH000001").unwrap())
            .timestamp(Timestamp::new(1_704_067_200_000).unwrap())
            .open(Price::new(dec!(3100)).unwrap())
            .high(Price::new(dec!(3000)).unwrap()) // high < low
            .low(Price::new(dec!(3100)).unwrap())
            .close(Price::new(dec!(3100)).unwrap())
            .volume(Volume::new(dec!(100)).unwrap())
            .build();
        assert!(matches!(
            result,
            Err(DataValidationError::InvalidPriceRelation(_))
        ));
    }

    #[test]
    fn test_bar_open_outside_range() {
        let result = BarData::builder()
            .symbol(Symbol::new("SH000001").unwrap())
            .timestamp(Timestamp::new(1_704_067_200_000).unwrap())
            .open(Price::new(dec!(3200)).unwrap()) // above high
            .high(Price::new(dec!(3120)).unwrap())
            .low(Price::new(dec!(3095)).unwrap())
            .close(Price::new(dec!(3110)).unwrap())
            .volume(Volume::new(dec!(100)).unwrap())
            .build();
        assert!(matches!(
            result,
            Err(DataValidationError::InvalidPriceRelation(_))
        ));
    }

    #[test]
    fn test_bar_zero_timestamp() {
        let result = BarData::builder()
            .symbol(Symbol::new("SH000001").unwrap())
            .timestamp(Timestamp::ZERO)
            .open(Price::new(dec!(3100)).unwrap())
            .high(Price::new(dec!(3120)).unwrap())
            .low(Price::new(dec!(3095)).unwrap())
            .close(Price::new(dec!(3110)).unwrap())
            .volume(Volume::new(dec!(100)).unwrap())
            .build();
        assert!(matches!(
            result,
            Err(DataValidationError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_bar_bullish_bearish() {
        let bar = create_valid_bar();
        assert!(bar.is_bullish());

        let bearish = BarData::builder()
            .symbol(Symbol::new("SH000001").unwrap())
            .timestamp(Timestamp::new(1_704_067_200_000).unwrap())
            .open(Price::new(dec!(3110.2)).unwrap())
            .high(Price::new(dec!(3120.5)).unwrap())
            .low(Price::new(dec!(3095.0)).unwrap())
            .close(Price::new(dec!(3100.0)).unwrap())
            .volume(Volume::new(dec!(18000)).unwrap())
            .build()
            .unwrap();
        assert!(bearish.is_bearish());
    }

    #[test]
    fn test_bar_range() {
        let bar = create_valid_bar();
        assert_eq!(bar.range(), Price::new(dec!(25.5)).unwrap());
    }

    #[test]
    fn test_bar_serde_roundtrip() {
        let bar = create_valid_bar();
        let json = serde_json::to_string(&bar).unwrap();
        let parsed: BarData = serde_json::from_str(&json).unwrap();
        assert_eq!(bar, parsed);
    }
}
