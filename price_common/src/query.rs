//! A single price lookup request.
use std::borrow::Cow;

use crate::error::FetchError;
use crate::exchange::Exchange;
use crate::result::Result;

/// Symbol plus optional venue hint; absent hint means the default venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    symbol: String,
    exchange: Option<Exchange>,
}

impl Query {
    /// Build a query, rejecting a blank symbol.
    pub fn new(symbol: impl Into<String>, exchange: Option<Exchange>) -> Result<Self> {
        let symbol: String = symbol.into();
        let symbol = symbol.trim().to_owned();
        if symbol.is_empty() {
            return Err(FetchError::MissingSymbol);
        }
        Ok(Self { symbol, exchange })
    }

    /// Symbol as supplied by the caller (trimmed).
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Venue hint, falling back to the default venue.
    pub fn exchange(&self) -> Cow<'_, Exchange> {
        match &self.exchange {
            Some(exchange) => Cow::Borrowed(exchange),
            None => Cow::Owned(Exchange::default()),
        }
    }

    /// Ticker actually sent to the provider.
    pub fn ticker(&self) -> Cow<'_, str> {
        match &self.exchange {
            Some(exchange) => exchange.normalize(&self.symbol),
            None => Cow::Borrowed(&self.symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_symbol_is_missing() {
        assert!(matches!(Query::new("", None), Err(FetchError::MissingSymbol)));
        assert!(matches!(
            Query::new("   ", Some(Exchange::Nse)),
            Err(FetchError::MissingSymbol)
        ));
    }

    #[test]
    fn default_exchange_is_nasdaq() {
        let query = Query::new("AAPL", None).unwrap();
        assert_eq!(*query.exchange(), Exchange::Nasdaq);
        assert_eq!(query.ticker(), "AAPL");
    }

    #[test]
    fn nse_ticker_gets_suffix() {
        let query = Query::new(" INFY ", Some(Exchange::Nse)).unwrap();
        assert_eq!(query.symbol(), "INFY");
        assert_eq!(query.ticker(), "INFY.NS");
    }
}
