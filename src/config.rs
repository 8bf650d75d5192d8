use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use tracing::Level;

use crate::{
    api::yahoo::BASE_URL,
    app::{
        InputForm,
        form::{DEFAULT_START_DATE, DEFAULT_TICKER},
        utils::parse_date,
    },
    models::Interval,
};

pub const DEFAULT_LOG_FILE: &str = "price-tracker.log";

/// Terminal dashboard for the price history of a single ticker.
///
/// Every option only seeds the initial sidebar values; they can all be
/// changed from inside the dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Ticker symbol to load on start
    #[arg(long, env = "PRICE_TRACKER_TICKER", default_value = DEFAULT_TICKER)]
    pub ticker: String,

    /// First date of the window (YYYY-MM-DD)
    #[arg(long, env = "PRICE_TRACKER_START", default_value = DEFAULT_START_DATE, value_parser = parse_start)]
    pub start: NaiveDate,

    /// Sampling interval: daily, weekly or monthly
    #[arg(long, env = "PRICE_TRACKER_INTERVAL", default_value = "daily")]
    pub interval: Interval,

    /// Base URL of the chart API
    #[arg(long, env = "PRICE_TRACKER_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,

    /// Log file; the terminal itself is owned by the dashboard
    #[arg(long, env = "PRICE_TRACKER_LOG", default_value = DEFAULT_LOG_FILE)]
    pub log_file: String,

    /// Sets the level of tracing
    #[arg(long, value_enum, default_value = "info")]
    pub trace: TraceLevel,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<TraceLevel> for Level {
    fn from(level: TraceLevel) -> Self {
        match level {
            TraceLevel::Error => Level::ERROR,
            TraceLevel::Warn => Level::WARN,
            TraceLevel::Info => Level::INFO,
            TraceLevel::Debug => Level::DEBUG,
            TraceLevel::Trace => Level::TRACE,
        }
    }
}

impl Cli {
    pub fn initial_form(&self) -> InputForm {
        InputForm::new(&self.ticker, self.start, self.interval)
    }

    pub fn log_path(&self) -> String {
        shellexpand::tilde(&self.log_file).into_owned()
    }
}

fn parse_start(s: &str) -> anyhow::Result<NaiveDate> {
    parse_date(s)
}
