//! Price bars returned by a market-data provider.
use chrono::{DateTime, Utc};

/// One aggregated observation over an interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Start of the interval the bar covers.
    pub timestamp: DateTime<Utc>,
    /// Opening price, if reported.
    pub open: Option<f64>,
    /// Highest price, if reported.
    pub high: Option<f64>,
    /// Lowest price, if reported.
    pub low: Option<f64>,
    /// Closing price.
    pub close: f64,
    /// Traded volume, if reported.
    pub volume: Option<u64>,
}

impl Bar {
    /// Bar carrying only a close.
    pub fn from_close(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self {
            timestamp,
            open: None,
            high: None,
            low: None,
            close,
            volume: None,
        }
    }

    /// A close we are willing to report: finite and non-negative.
    pub fn has_usable_close(&self) -> bool {
        self.close.is_finite() && self.close >= 0.0
    }
}

/// The most recent usable bar in an ordered series.
pub fn last_usable(bars: &[Bar]) -> Option<&Bar> {
    bars.iter().rev().find(|bar| bar.has_usable_close())
}
