//! Seam between the fetcher and whatever serves historical bars.
use crate::bar::Bar;
use crate::granularity::{Interval, Period};
use crate::result::Result;

/// Source of historical price bars.
///
/// Implementations return bars oldest first. An empty vector means the
/// provider has nothing for that window; faults of any kind are `Err`.
pub trait MarketDataProvider {
    /// Fetch `period` worth of bars for `ticker` at `interval` granularity.
    fn history(&self, ticker: &str, period: Period, interval: Interval) -> Result<Vec<Bar>>;
}

impl<P: MarketDataProvider + ?Sized> MarketDataProvider for &P {
    fn history(&self, ticker: &str, period: Period, interval: Interval) -> Result<Vec<Bar>> {
        (**self).history(ticker, period, interval)
    }
}
