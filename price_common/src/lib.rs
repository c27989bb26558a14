//!
//! Latest-price lookup shared by the `fetch_price` binary.
//!
//! This crate aggregates:
//! - `error` — unified error type `FetchError`.
//! - `result` — handy `Result<T, FetchError>` alias.
//! - `exchange` — venue hints and ticker normalization.
//! - `granularity` — history periods and bar intervals.
//! - `query` — a validated symbol/exchange pair.
//! - `bar` — price bars returned by providers.
//! - `provider` — the `MarketDataProvider` trait.
//! - `yahoo` — chart-endpoint provider over blocking HTTP.
//! - `fetcher` — the lookup with its daily fallback.
//! - `outcome` — the `{"price"}` / `{"error"}` JSON result.
//! - `net` — endpoint constants.
#![warn(missing_docs)]
pub mod bar;
pub mod error;
pub mod exchange;
pub mod fetcher;
pub mod granularity;
pub mod net;
pub mod outcome;
pub mod provider;
pub mod query;
pub mod result;
pub mod yahoo;

pub use bar::Bar;
pub use error::FetchError;
pub use exchange::Exchange;
pub use fetcher::{FetchOptions, PriceFetcher};
pub use granularity::{Interval, Period};
pub use outcome::PriceResult;
pub use provider::MarketDataProvider;
pub use query::Query;
pub use result::Result;
pub use yahoo::{ProviderConfig, YahooProvider};
