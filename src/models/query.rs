use chrono::NaiveDate;
use derive_getters::Getters;

use super::Interval;

/// Inputs for a single fetch-compute-render pass.
#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct QueryParams {
    ticker: String,
    start_date: NaiveDate,
    interval: Interval,
}

impl QueryParams {
    pub fn new(ticker: &str, start_date: NaiveDate, interval: Interval) -> Self {
        Self {
            ticker: ticker.trim().to_string(),
            start_date,
            interval,
        }
    }
}
