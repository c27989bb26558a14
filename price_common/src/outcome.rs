//! The one-line JSON answer printed for every lookup.
//!
//! Serializes as `{"price": 189.95}` or `{"error": "No data found"}`; the
//! externally tagged enum guarantees exactly one key is present.
use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::result::Result;

/// Outcome of a price lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceResult {
    /// Last closing price.
    Price(f64),
    /// Human-readable failure description.
    Error(String),
}

impl PriceResult {
    /// The price, if the lookup succeeded.
    pub fn price(&self) -> Option<f64> {
        match self {
            PriceResult::Price(price) => Some(*price),
            PriceResult::Error(_) => None,
        }
    }

    /// The error text, if the lookup failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            PriceResult::Price(_) => None,
            PriceResult::Error(message) => Some(message),
        }
    }

    /// Encode as a compact JSON object.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<FetchError> for PriceResult {
    fn from(err: FetchError) -> Self {
        PriceResult::Error(err.to_string())
    }
}

impl From<Result<f64>> for PriceResult {
    fn from(result: Result<f64>) -> Self {
        match result {
            Ok(price) => PriceResult::Price(price),
            Err(err) => err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_shape() {
        let json = PriceResult::Price(189.95).to_json().unwrap();
        assert_eq!(json, r#"{"price":189.95}"#);
    }

    #[test]
    fn error_shape() {
        let json = PriceResult::from(FetchError::NoData).to_json().unwrap();
        assert_eq!(json, r#"{"error":"No data found"}"#);
    }

    #[test]
    fn missing_symbol_shape() {
        let json = PriceResult::from(FetchError::MissingSymbol).to_json().unwrap();
        assert_eq!(json, r#"{"error":"No symbol provided"}"#);
    }

    #[test]
    fn whole_prices_keep_a_decimal_point() {
        assert_eq!(PriceResult::Price(42.0).to_json().unwrap(), r#"{"price":42.0}"#);
    }

    #[test]
    fn decodes_either_key() {
        let ok: PriceResult = serde_json::from_str(r#"{"price":1.5}"#).unwrap();
        assert_eq!(ok.price(), Some(1.5));
        let err: PriceResult = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(err.error(), Some("boom"));
        assert_eq!(err.price(), None);
    }
}
