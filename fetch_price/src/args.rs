//! Command-line arguments for `fetch_price`.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::time::Duration;

use clap::Parser;
use price_common::{FetchOptions, Interval, ProviderConfig};
use price_common::net::DEFAULT_BASE_URL;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Print the latest price of a ticker as JSON", long_about = None)]
pub struct Args {
    /// Ticker symbol, e.g. `AAPL` or `RELIANCE`.
    pub symbol: Option<String>,

    /// Exchange hint. Only `NSE` changes the lookup (adds the `.NS` suffix).
    #[arg(default_value = "NASDAQ")]
    pub exchange: String,

    /// Granularity of the first query on non-NSE venues.
    #[arg(long, value_enum, default_value = "1m")]
    pub interval: Interval,

    /// Provider base URL.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds; unset keeps the HTTP client's default.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Anything after the exchange is accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Args {
    /// Symbol with surrounding quotes and whitespace removed; empty if absent.
    pub fn symbol(&self) -> String {
        self.symbol
            .as_deref()
            .map(strip_quotes)
            .unwrap_or_default()
            .to_string()
    }

    /// Exchange hint with surrounding quotes and whitespace removed.
    pub fn exchange(&self) -> &str {
        strip_quotes(&self.exchange)
    }

    /// Fetcher options derived from the flags.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            intraday_interval: self.interval,
            ..FetchOptions::default()
        }
    }

    /// Provider settings derived from the flags.
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            ..ProviderConfig::default()
        }
    }
}

/// First line of a clap error without its `error: ` prefix, for the JSON line.
pub fn usage_error(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default().trim();
    first.strip_prefix("error:").unwrap_or(first).trim().to_string()
}

/// Trim whitespace and one pair of matching double quotes, as shells on
/// Windows tend to pass them through.
fn strip_quotes(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim()
}
