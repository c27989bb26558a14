//! Provider endpoints and request constants.
use url::Url;

use crate::error::FetchError;
use crate::result::Result;

/// Base URL of the Yahoo Finance query host.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Path segments of the chart (historical bars) endpoint; the ticker is appended.
pub const CHART_SEGMENTS: [&str; 3] = ["v8", "finance", "chart"];

/// Yahoo rejects requests without a browser-like user agent.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; fetch_price/0.1)";

/// Build the chart URL for `ticker` under `base_url`.
///
/// The ticker is encoded as a single path segment, so `/`, `?` and `#`
/// inside it cannot change which resource is requested.
pub fn chart_url(base_url: &str, ticker: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(format!("{base_url} cannot be a base")))?
        .pop_if_empty()
        .extend(CHART_SEGMENTS)
        .push(ticker);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_url_joins_segments() {
        assert_eq!(
            chart_url("https://example.test/", "AAPL").unwrap().as_str(),
            "https://example.test/v8/finance/chart/AAPL"
        );
        assert_eq!(
            chart_url(DEFAULT_BASE_URL, "RELIANCE.NS").unwrap().as_str(),
            "https://query1.finance.yahoo.com/v8/finance/chart/RELIANCE.NS"
        );
    }

    #[test]
    fn chart_url_keeps_base_path() {
        assert_eq!(
            chart_url("http://localhost:8080/proxy", "MSFT").unwrap().as_str(),
            "http://localhost:8080/proxy/v8/finance/chart/MSFT"
        );
    }

    #[test]
    fn ticker_is_one_encoded_segment() {
        let url = chart_url(DEFAULT_BASE_URL, "A#B?C/D").unwrap();
        assert_eq!(
            url.as_str(),
            "https://query1.finance.yahoo.com/v8/finance/chart/A%23B%3FC%2FD"
        );
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn bad_base_url_is_an_error() {
        assert!(matches!(
            chart_url("not a url", "AAPL"),
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(matches!(
            chart_url("mailto:someone@example.test", "AAPL"),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
