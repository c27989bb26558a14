//! History windows and bar granularities understood by the chart endpoint.
//!
//! Both enums render to the exact query-string tokens the provider expects
//! (`range=1d`, `interval=1m`), via `strum`'s `Display`/`AsRefStr`.
use clap::ValueEnum;
use strum_macros::{AsRefStr, Display, EnumString};

/// Length of history requested from the provider.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default, Display, AsRefStr, EnumString, Hash, Eq, PartialEq)]
pub enum Period {
    #[default]
    #[strum(serialize = "1d")]
    OneDay,
    #[strum(serialize = "5d")]
    FiveDays,
    #[strum(serialize = "1mo")]
    OneMonth,
    #[strum(serialize = "3mo")]
    ThreeMonths,
    #[strum(serialize = "6mo")]
    SixMonths,
    #[strum(serialize = "1y")]
    OneYear,
    #[strum(serialize = "2y")]
    TwoYears,
    #[strum(serialize = "5y")]
    FiveYears,
    #[strum(serialize = "10y")]
    TenYears,
    #[strum(serialize = "ytd")]
    YearToDate,
    #[strum(serialize = "max")]
    Max,
}

/// Size of the window each bar aggregates.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Display,
    AsRefStr,
    EnumString,
    ValueEnum,
    Hash,
    Eq,
    PartialEq,
)]
pub enum Interval {
    #[strum(serialize = "1m")]
    #[value(name = "1m")]
    OneMinute,
    #[strum(serialize = "2m")]
    #[value(name = "2m")]
    TwoMinutes,
    #[strum(serialize = "5m")]
    #[value(name = "5m")]
    FiveMinutes,
    #[strum(serialize = "15m")]
    #[value(name = "15m")]
    FifteenMinutes,
    #[strum(serialize = "30m")]
    #[value(name = "30m")]
    ThirtyMinutes,
    #[strum(serialize = "60m")]
    #[value(name = "60m")]
    SixtyMinutes,
    #[strum(serialize = "90m")]
    #[value(name = "90m")]
    NinetyMinutes,
    #[strum(serialize = "1h")]
    #[value(name = "1h")]
    OneHour,
    #[strum(serialize = "1d")]
    #[value(name = "1d")]
    OneDay,
    #[strum(serialize = "5d")]
    #[value(name = "5d")]
    FiveDays,
    #[strum(serialize = "1wk")]
    #[value(name = "1wk")]
    OneWeek,
    #[strum(serialize = "1mo")]
    #[value(name = "1mo")]
    OneMonth,
    #[strum(serialize = "3mo")]
    #[value(name = "3mo")]
    ThreeMonths,
}

impl Interval {
    /// Whether bars are finer than a trading day.
    pub fn is_intraday(self) -> bool {
        matches!(
            self,
            Interval::OneMinute
                | Interval::TwoMinutes
                | Interval::FiveMinutes
                | Interval::FifteenMinutes
                | Interval::ThirtyMinutes
                | Interval::SixtyMinutes
                | Interval::NinetyMinutes
                | Interval::OneHour
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_provider_tokens() {
        assert_eq!(Period::OneDay.as_ref(), "1d");
        assert_eq!(Period::YearToDate.to_string(), "ytd");
        assert_eq!(Interval::OneMinute.as_ref(), "1m");
        assert_eq!(Interval::OneWeek.to_string(), "1wk");
    }

    #[test]
    fn parses_provider_tokens() {
        assert_eq!("1mo".parse::<Interval>().ok(), Some(Interval::OneMonth));
        assert_eq!("5d".parse::<Period>().ok(), Some(Period::FiveDays));
        assert!("7m".parse::<Interval>().is_err());
    }

    #[test]
    fn intraday_split() {
        assert!(Interval::OneMinute.is_intraday());
        assert!(Interval::OneHour.is_intraday());
        assert!(!Interval::OneDay.is_intraday());
        assert!(!Interval::OneWeek.is_intraday());
    }

    #[test]
    fn clap_names_match_provider_tokens() {
        let parsed = <Interval as ValueEnum>::from_str("15m", false);
        assert_eq!(parsed, Ok(Interval::FifteenMinutes));
    }
}
