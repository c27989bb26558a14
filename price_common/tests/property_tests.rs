//! Property-based tests for ticker normalization and close selection.

use chrono::DateTime;
use price_common::exchange::NSE_SUFFIX;
use price_common::{Bar, Exchange, Interval, MarketDataProvider, Period, PriceFetcher, Query, Result};
use proptest::prelude::*;

struct FixedProvider(Vec<Bar>);

impl MarketDataProvider for FixedProvider {
    fn history(&self, _: &str, _: Period, _: Interval) -> Result<Vec<Bar>> {
        Ok(self.0.clone())
    }
}

fn arb_symbol() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9&-]{0,11}"
}

fn arb_closes() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..100_000.0, 1..64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// NSE normalization always ends in the suffix and is idempotent
    #[test]
    fn prop_nse_normalization_idempotent(symbol in arb_symbol()) {
        let once = Exchange::Nse.normalize(&symbol).into_owned();
        prop_assert!(once.ends_with(NSE_SUFFIX));
        let twice = Exchange::Nse.normalize(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    /// Only NSE rewrites the symbol
    #[test]
    fn prop_other_exchanges_keep_symbol(symbol in arb_symbol(), hint in "[A-Za-z]{1,8}") {
        prop_assume!(hint != "NSE");
        let query = Query::new(symbol.clone(), Some(Exchange::from_hint(hint.as_str()))).unwrap();
        prop_assert_eq!(query.ticker().into_owned(), symbol);
    }

    /// The reported price is the last close of the series
    #[test]
    fn prop_price_is_last_close(closes in arb_closes()) {
        let bars: Vec<Bar> = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Bar::from_close(DateTime::from_timestamp(i as i64 * 60, 0).unwrap(), c))
            .collect();
        let fetcher = PriceFetcher::new(FixedProvider(bars));
        let query = Query::new("AAPL", None).unwrap();

        let price = fetcher.fetch(&query).price();
        prop_assert_eq!(price, closes.last().copied());
    }
}
