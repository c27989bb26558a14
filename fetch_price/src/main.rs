//! fetch_price — prints the latest market price of one ticker as a JSON line.
//!
//! The price is the close of the most recent one-minute bar of the current
//! session, or of the daily bar when no intraday data exists. `NSE` symbols are
//! looked up with the `.NS` suffix at daily granularity.
//!
//! Usage example (CLI):
//! ```bash
//! fetch_price AAPL            # {"price":189.95}
//! fetch_price RELIANCE NSE    # {"price":2950.4}
//! fetch_price                 # {"error":"No symbol provided"}
//! ```
//!
//! Every outcome, including provider faults and rejected arguments, is
//! printed to stdout and the process exits with status 0; only `--help` and
//! `--version` print something else. Diagnostics go to stderr through `env_logger`
//! and are silent unless `RUST_LOG` asks for them.
#![warn(missing_docs)]
mod args;

use std::io::{self, Write};

use crate::args::{Args, usage_error};
use clap::Parser;
use clap::error::ErrorKind;
use log::debug;
use price_common::{PriceFetcher, PriceResult, Result, YahooProvider};

fn main() -> Result<()> {
    init_logger();

    let result = match Args::try_parse() {
        Ok(args) => {
            let result = lookup(&args);
            debug!("{} {} -> {:?}", args.symbol(), args.exchange(), result);
            result
        }
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            debug!("rejected arguments: {}", err);
            PriceResult::Error(usage_error(&err))
        }
    };

    let line = result.to_json()?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    stdout.flush()?;
    Ok(())
}

fn lookup(args: &Args) -> PriceResult {
    let symbol = args.symbol();
    if symbol.is_empty() {
        return price_common::FetchError::MissingSymbol.into();
    }
    let provider = YahooProvider::new(args.provider_config());
    PriceFetcher::with_options(provider, args.fetch_options())
        .fetch_symbol(&symbol, Some(args.exchange()))
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
