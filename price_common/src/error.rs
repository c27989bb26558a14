//! Error type shared by the fetcher library and the CLI.
//!
//! Every failure a price lookup can hit is a `FetchError`. The display text of
//! each variant is exactly what ends up in the `{"error": ...}` line, so the
//! provider-reported variants carry their message verbatim.
use std::io;

use thiserror::Error;

/// Unified error type for price lookups.
#[derive(Error, Debug)]
pub enum FetchError {
    /// No symbol was given, or it was blank.
    #[error("No symbol provided")]
    MissingSymbol,

    /// Both the primary and the fallback query returned no usable bars.
    #[error("No data found")]
    NoData,

    /// Fault reported by the market-data provider, kept as its own text.
    #[error("{0}")]
    Provider(String),

    /// The HTTP request could not be completed (DNS, connect, TLS, ...).
    #[error("{0}")]
    Transport(String),

    /// Non-success HTTP status with a body we could not interpret.
    #[error("HTTP status {0}")]
    Status(u16),

    /// Provider base URL is unusable.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O error while reading a response body or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => FetchError::Status(code),
            ureq::Error::Transport(transport) => FetchError::Transport(transport.to_string()),
        }
    }
}

impl From<url::ParseError> for FetchError {
    fn from(err: url::ParseError) -> Self {
        FetchError::InvalidUrl(err.to_string())
    }
}
