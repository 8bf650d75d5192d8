use std::fmt;

use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PriceField {
    Open,
    High,
    Low,
    Close,
    AdjClose,
    Volume,
}

impl PriceField {
    pub fn name(&self) -> &'static str {
        match self {
            PriceField::Open => "Open",
            PriceField::High => "High",
            PriceField::Low => "Low",
            PriceField::Close => "Close",
            PriceField::AdjClose => "Adj Close",
            PriceField::Volume => "Volume",
        }
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One time bucket of the series. Fields the data service left null stay `None`.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct PriceRow {
    date: NaiveDate,
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
    adj_close: Option<f64>,
    volume: Option<u64>,
}

impl PriceRow {
    pub fn value(&self, field: PriceField) -> Option<f64> {
        match field {
            PriceField::Open => self.open,
            PriceField::High => self.high,
            PriceField::Low => self.low,
            PriceField::Close => self.close,
            PriceField::AdjClose => self.adj_close,
            PriceField::Volume => self.volume.map(|v| v as f64),
        }
    }
}

#[derive(Clone, Debug, Default, Getters, PartialEq)]
pub struct PriceSeries {
    columns: Vec<PriceField>,
    rows: Vec<PriceRow>,
}

impl PriceSeries {
    pub fn new(columns: Vec<PriceField>, mut rows: Vec<PriceRow>) -> Self {
        rows.sort_by_key(|row| row.date);
        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn first(&self) -> Option<&PriceRow> {
        self.rows.first()
    }

    pub fn last(&self) -> Option<&PriceRow> {
        self.rows.last()
    }

    pub fn has_column(&self, field: PriceField) -> bool {
        self.columns.contains(&field)
    }

    pub fn values(&self, field: PriceField) -> Vec<Option<f64>> {
        self.rows.iter().map(|row| row.value(field)).collect()
    }
}
