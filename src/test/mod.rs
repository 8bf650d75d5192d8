mod calc;
mod form;

use std::cell::Cell;

use anyhow::Result;
use chrono::NaiveDate;

use crate::{
    api::SeriesFetcher,
    models::{Interval, PriceField, PriceRow, PriceSeries, QueryParams},
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn gspc_query() -> QueryParams {
    QueryParams::new("^GSPC", date(2025, 1, 20), Interval::Daily)
}

/// Series with Close but no Adj Close column, one row per business day
/// starting 2025-01-21.
pub fn close_series(closes: &[f64]) -> PriceSeries {
    let rows = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            PriceRow::new(
                date(2025, 1, 21 + i as u32),
                Some(c),
                Some(c),
                Some(c),
                Some(c),
                None,
                Some(1_000_000),
            )
        })
        .collect();

    PriceSeries::new(
        vec![
            PriceField::Open,
            PriceField::High,
            PriceField::Low,
            PriceField::Close,
            PriceField::Volume,
        ],
        rows,
    )
}

pub struct MockFetcher {
    response: std::result::Result<PriceSeries, String>,
    calls: Cell<usize>,
}

impl MockFetcher {
    pub fn returning(series: PriceSeries) -> Self {
        Self {
            response: Ok(series),
            calls: Cell::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl SeriesFetcher for MockFetcher {
    async fn fetch(&self, _query: &QueryParams) -> Result<PriceSeries> {
        self.calls.set(self.calls.get() + 1);
        self.response.clone().map_err(anyhow::Error::msg)
    }
}
