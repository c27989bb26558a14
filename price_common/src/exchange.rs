//! Exchange hints and the ticker naming rules they imply.

use std::borrow::Cow;
use std::fmt;

use strum_macros::EnumString;

/// Suffix Yahoo uses for National Stock Exchange of India listings.
pub const NSE_SUFFIX: &str = ".NS";

/// Venue hint supplied alongside a symbol.
///
/// Only `NSE` changes how the symbol is looked up. Matching is exact, so
/// `"nse"` or a typo lands in `Other` and behaves like the default.
#[derive(Debug, Clone, Default, EnumString, Hash, Eq, PartialEq)]
pub enum Exchange {
    /// Default venue; symbols are used as given.
    #[default]
    #[strum(serialize = "NASDAQ")]
    Nasdaq,
    /// National Stock Exchange of India; symbols get the `.NS` suffix.
    #[strum(serialize = "NSE")]
    Nse,
    /// Any other hint, kept verbatim.
    #[strum(default)]
    Other(String),
}

impl Exchange {
    /// Interpret a caller-supplied hint; unknown values become `Other`.
    pub fn from_hint(raw: &str) -> Self {
        raw.parse()
            .unwrap_or_else(|_| Exchange::Other(raw.to_owned()))
    }

    /// Apply the venue's naming convention to `symbol`.
    pub fn normalize<'a>(&self, symbol: &'a str) -> Cow<'a, str> {
        match self {
            Exchange::Nse if !symbol.ends_with(NSE_SUFFIX) => {
                Cow::Owned(format!("{symbol}{NSE_SUFFIX}"))
            }
            _ => Cow::Borrowed(symbol),
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exchange::Nasdaq => f.write_str("NASDAQ"),
            Exchange::Nse => f.write_str("NSE"),
            Exchange::Other(raw) => f.write_str(raw),
        }
    }
}
