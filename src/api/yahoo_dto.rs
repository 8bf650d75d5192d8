use anyhow::{Error, Result};
use chrono::DateTime;
use derive_getters::Getters;
use serde::Deserialize;

use crate::models::{PriceField, PriceRow, PriceSeries};

const NOT_FOUND: &str = "Not Found";
// Returned as a 400 when the window starts in the future
const START_AFTER_END: &str = "start date cannot be after the end date";

#[derive(Debug, Deserialize, Getters)]
pub struct YahooChartDto {
    chart: YahooChartBodyDto,
}

#[derive(Debug, Deserialize, Getters)]
pub struct YahooChartBodyDto {
    result: Option<Vec<YahooChartResultDto>>,
    error: Option<YahooChartErrorDto>,
}

#[derive(Debug, Deserialize, Getters)]
pub struct YahooChartErrorDto {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize, Getters)]
pub struct YahooChartResultDto {
    #[serde(default)]
    meta: YahooMetaDto,
    timestamp: Option<Vec<i64>>,
    indicators: YahooIndicatorsDto,
}

#[derive(Debug, Default, Deserialize, Getters)]
pub struct YahooMetaDto {
    #[serde(default, rename = "gmtoffset")]
    gmt_offset: i64,
}

#[derive(Debug, Deserialize, Getters)]
pub struct YahooIndicatorsDto {
    #[serde(default)]
    quote: Vec<YahooQuoteDto>,
    adjclose: Option<Vec<YahooAdjCloseDto>>,
}

#[derive(Debug, Default, Deserialize, Getters)]
pub struct YahooQuoteDto {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize, Getters)]
pub struct YahooAdjCloseDto {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

impl YahooChartDto {
    pub fn is_not_found(&self) -> bool {
        self.chart
            .error
            .as_ref()
            .is_some_and(|e| e.code == NOT_FOUND)
    }

    /// Unknown symbol, or a window with no trading days in it.
    pub fn is_no_data(&self) -> bool {
        self.is_not_found()
            || self
                .chart
                .error
                .as_ref()
                .is_some_and(|e| e.description.contains(START_AFTER_END))
    }

    /// Converts the payload into a series. An unknown symbol or a window
    /// without data yields an empty series rather than an error.
    pub fn to_price_series(&self) -> Result<PriceSeries> {
        if self.is_no_data() {
            return Ok(PriceSeries::empty());
        }

        match (self.chart.result.as_ref(), self.chart.error.as_ref()) {
            (Some(results), _) if !results.is_empty() => results[0].to_price_series(),
            (_, Some(err)) => Err(Error::msg(format!("{}: {}", err.code, err.description))),
            _ => Ok(PriceSeries::empty()),
        }
    }
}

impl YahooChartResultDto {
    pub fn to_price_series(&self) -> Result<PriceSeries> {
        let Some(timestamps) = self.timestamp.as_ref() else {
            return Ok(PriceSeries::empty());
        };

        let empty_quote = YahooQuoteDto::default();
        let quote = self.indicators.quote.first().unwrap_or(&empty_quote);
        let adj_closes = self
            .indicators
            .adjclose
            .as_ref()
            .and_then(|v| v.first())
            .map(|a| &a.adjclose);

        let mut columns = vec![
            PriceField::Open,
            PriceField::High,
            PriceField::Low,
            PriceField::Close,
        ];
        if adj_closes.is_some() {
            columns.push(PriceField::AdjClose);
        }
        columns.push(PriceField::Volume);

        let at = |values: &Vec<Option<f64>>, i: usize| values.get(i).copied().flatten();

        let mut rows = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let date = DateTime::from_timestamp(ts + self.meta.gmt_offset, 0)
                .map(|dt| dt.date_naive())
                .ok_or_else(|| Error::msg(format!("Invalid timestamp in response: {}", ts)))?;

            let open = at(&quote.open, i);
            let high = at(&quote.high, i);
            let low = at(&quote.low, i);
            let close = at(&quote.close, i);
            let adj_close = adj_closes.and_then(|v| at(v, i));
            let volume = quote.volume.get(i).copied().flatten();

            // Non-trading buckets come back with every price null
            if open.is_none()
                && high.is_none()
                && low.is_none()
                && close.is_none()
                && adj_close.is_none()
            {
                continue;
            }

            rows.push(PriceRow::new(date, open, high, low, close, adj_close, volume));
        }

        Ok(PriceSeries::new(columns, rows))
    }
}
