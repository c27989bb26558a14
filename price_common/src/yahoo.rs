//! Yahoo Finance chart endpoint as a `MarketDataProvider`.
//!
//! Requests `GET {base}/v8/finance/chart/{ticker}?range=..&interval=..` (the
//! ticker percent-encoded as one path segment) and
//! decodes the column-oriented payload into `Bar`s:
//!
//! ```text
//! chart.result[0].timestamp[i]                 -> Bar::timestamp
//! chart.result[0].indicators.quote[0].close[i] -> Bar::close (null rows dropped)
//! chart.error.description                      -> FetchError::Provider
//! ```
//!
//! Unknown symbols come back as HTTP 404 with an error body, so a status
//! error is still decoded before giving up on it.
use std::time::Duration;

use chrono::DateTime;
use log::debug;
use serde::Deserialize;

use crate::bar::Bar;
use crate::error::FetchError;
use crate::granularity::{Interval, Period};
use crate::net::{DEFAULT_BASE_URL, USER_AGENT, chart_url};
use crate::provider::MarketDataProvider;
use crate::result::Result;

/// HTTP settings for the Yahoo provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Scheme and host, without the chart path.
    pub base_url: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Overall request timeout; `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

/// Blocking client for the chart endpoint.
pub struct YahooProvider {
    agent: ureq::Agent,
    base_url: String,
}

impl YahooProvider {
    /// Build a provider from `config`.
    pub fn new(config: ProviderConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            base_url: config.base_url,
        }
    }

    fn request(&self, ticker: &str, period: Period, interval: Interval) -> Result<ChartResponse> {
        let url = chart_url(&self.base_url, ticker)?;
        debug!("GET {} range={} interval={}", url, period, interval);

        let call = self
            .agent
            .request_url("GET", &url)
            .query("range", period.as_ref())
            .query("interval", interval.as_ref())
            .call();

        match call {
            Ok(response) => Ok(response.into_json()?),
            Err(ureq::Error::Status(code, response)) => {
                debug!("{} answered with HTTP {}", url, code);
                response
                    .into_json::<ChartResponse>()
                    .map_err(|_| FetchError::Status(code))
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new(ProviderConfig::default())
    }
}

impl MarketDataProvider for YahooProvider {
    fn history(&self, ticker: &str, period: Period, interval: Interval) -> Result<Vec<Bar>> {
        let response = self.request(ticker, period, interval)?;
        response.into_bars()
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteColumns>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteColumns {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

impl ChartResponse {
    fn into_bars(self) -> Result<Vec<Bar>> {
        if let Some(error) = self.chart.error {
            let message = error
                .description
                .or(error.code)
                .unwrap_or_else(|| "unknown chart error".to_string());
            return Err(FetchError::Provider(message));
        }

        let Some(result) = self.chart.result.and_then(|r| r.into_iter().next()) else {
            return Ok(Vec::new());
        };
        let Some(columns) = result.indicators.quote.into_iter().next() else {
            return Ok(Vec::new());
        };

        let bars = result
            .timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, &secs)| {
                let close = columns.close.get(i).copied().flatten()?;
                let timestamp = DateTime::from_timestamp(secs, 0)?;
                Some(Bar {
                    timestamp,
                    open: columns.open.get(i).copied().flatten(),
                    high: columns.high.get(i).copied().flatten(),
                    low: columns.low.get(i).copied().flatten(),
                    close,
                    volume: columns.volume.get(i).copied().flatten(),
                })
            })
            .collect();
        Ok(bars)
    }
}
