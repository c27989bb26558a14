//! Latest-price lookup with a single daily fallback.
//!
//! For a [`Query`] the fetcher asks the provider for one window of bars:
//!
//! - default venues use the intraday interval (`1m` unless configured);
//! - `NSE` uses the daily interval.
//!
//! If that series has no usable bar it retries once at the daily interval.
//! Two empty answers become [`FetchError::NoData`]; provider faults are
//! returned as-is. At most two provider calls are made per lookup and no
//! state is kept between lookups.
use log::{debug, info};

use crate::bar::last_usable;
use crate::error::FetchError;
use crate::exchange::Exchange;
use crate::granularity::{Interval, Period};
use crate::outcome::PriceResult;
use crate::provider::MarketDataProvider;
use crate::query::Query;
use crate::result::Result;

/// Window and granularities used by [`PriceFetcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// History window for both queries.
    pub period: Period,
    /// Primary granularity on the default path.
    pub intraday_interval: Interval,
    /// Primary granularity for `NSE` and the fallback for everyone.
    pub daily_interval: Interval,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            period: Period::OneDay,
            intraday_interval: Interval::OneMinute,
            daily_interval: Interval::OneDay,
        }
    }
}

impl FetchOptions {
    /// Granularity of the first query for `exchange`.
    pub fn primary_interval(&self, exchange: &Exchange) -> Interval {
        match exchange {
            Exchange::Nse => self.daily_interval,
            _ => self.intraday_interval,
        }
    }
}

/// Looks up the most recent close through a [`MarketDataProvider`].
pub struct PriceFetcher<P> {
    provider: P,
    options: FetchOptions,
}

impl<P: MarketDataProvider> PriceFetcher<P> {
    /// Fetcher with default options.
    pub fn new(provider: P) -> Self {
        Self::with_options(provider, FetchOptions::default())
    }

    /// Fetcher with explicit options.
    pub fn with_options(provider: P, options: FetchOptions) -> Self {
        Self { provider, options }
    }

    /// Options in effect.
    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Run the lookup, folding every failure into the error variant.
    pub fn fetch(&self, query: &Query) -> PriceResult {
        self.try_fetch(query).into()
    }

    /// Lookup from raw inputs; a blank `symbol` never reaches the provider.
    pub fn fetch_symbol(&self, symbol: &str, exchange: Option<&str>) -> PriceResult {
        match Query::new(symbol, exchange.map(Exchange::from_hint)) {
            Ok(query) => self.fetch(&query),
            Err(err) => err.into(),
        }
    }

    /// Run the lookup, keeping faults as `FetchError`.
    pub fn try_fetch(&self, query: &Query) -> Result<f64> {
        let ticker = query.ticker();
        let primary = self.options.primary_interval(&query.exchange());

        if let Some(price) = self.last_close(&ticker, primary)? {
            return Ok(price);
        }

        info!(
            "no {} {} bars for {} ({} on {}), retrying at {}",
            granularity_label(primary),
            primary,
            ticker,
            query.symbol(),
            query.exchange(),
            self.options.daily_interval
        );
        match self.last_close(&ticker, self.options.daily_interval)? {
            Some(price) => Ok(price),
            None => Err(FetchError::NoData),
        }
    }

    fn last_close(&self, ticker: &str, interval: Interval) -> Result<Option<f64>> {
        let bars = self.provider.history(ticker, self.options.period, interval)?;
        let last = last_usable(&bars);
        if let Some(bar) = last {
            debug!(
                "{} {} close {} at {} ({} bars)",
                ticker,
                interval,
                bar.close,
                bar.timestamp,
                bars.len()
            );
        }
        Ok(last.map(|bar| bar.close))
    }
}

fn granularity_label(interval: Interval) -> &'static str {
    if interval.is_intraday() { "intraday" } else { "daily" }
}
