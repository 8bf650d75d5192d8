//! Turns the outcome of a pass into display-ready pieces.
//!
//! Nothing here touches the terminal; `ui` draws whatever this module
//! produces. Error kinds become user-facing text only in [`error_message`].

use chrono::NaiveDate;
use derive_getters::Getters;
use ratatui::style::Color;

use crate::{
    app::{
        dashboard::{Dashboard, PassOutcome},
        errors::PassError,
        utils::{DATE_FORMAT, format_percent, format_price, format_volume},
    },
    models::{PriceField, PriceSeries},
};

pub const EMPTY_RESULT_MESSAGE: &str = "No data fetched. Check ticker or internet connection.";
pub const TABLE_TITLE: &str = "Historical Data";

/// Sign-dependent treatment shared by the metric and the chart annotation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    pub fn from_change(percent_change: f64) -> Self {
        if percent_change >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Tone::Positive => Color::Green,
            Tone::Negative => Color::Red,
        }
    }
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct MetricDisplay {
    label: String,
    value: String,
    delta: String,
    tone: Tone,
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct Annotation {
    text: String,
    x: f64,
    y: f64,
    tone: Tone,
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct ChartSpec {
    title: String,
    legend: String,
    x_title: String,
    y_title: String,
    points: Vec<(f64, f64)>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    x_ticks: Vec<NaiveDate>,
    annotation: Annotation,
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct TableSpec {
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct Results {
    metric: MetricDisplay,
    chart: ChartSpec,
    table: TableSpec,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Presentation {
    Error(String),
    Results(Results),
}

pub fn present(outcome: &PassOutcome) -> Presentation {
    match outcome {
        Ok(dashboard) => Presentation::Results(Results {
            metric: metric_display(dashboard),
            chart: chart_spec(dashboard),
            table: table_spec(dashboard.series()),
        }),
        Err(err) => Presentation::Error(error_message(err)),
    }
}

pub fn error_message(err: &PassError) -> String {
    match err {
        PassError::EmptyResult => EMPTY_RESULT_MESSAGE.to_string(),
        PassError::FetchFailure(description) => format!("An error occurred: {}", description),
        PassError::DegenerateInput { field, reason } => {
            format!("Cannot compute change: {} ({})", reason, field)
        }
    }
}

pub fn metric_display(dashboard: &Dashboard) -> MetricDisplay {
    let metric = dashboard.metric();
    MetricDisplay {
        label: format!("Current {} Price", metric.field()),
        value: format!("${:.2}", metric.last_value()),
        delta: format_percent(*metric.percent_change()),
        tone: Tone::from_change(*metric.percent_change()),
    }
}

pub fn chart_spec(dashboard: &Dashboard) -> ChartSpec {
    let metric = dashboard.metric();
    let series = dashboard.series();
    let query = dashboard.query();
    let field = *metric.field();

    let points: Vec<(f64, f64)> = series
        .values(field)
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| v.filter(|v| v.is_finite()).map(|v| (i as f64, v)))
        .collect();

    let last_index = series.len().saturating_sub(1);
    let x_bounds = [0.0, (last_index as f64).max(1.0)];
    let y_bounds = padded_bounds(&points);

    ChartSpec {
        title: format!(
            "{} {} - From {} Onwards",
            query.ticker(),
            field,
            query.start_date().format(DATE_FORMAT)
        ),
        legend: format!("{} {}", query.ticker(), field),
        x_title: String::from("Date"),
        y_title: String::from("Price"),
        points,
        x_bounds,
        y_bounds,
        x_ticks: tick_dates(series),
        annotation: Annotation {
            text: format_percent(*metric.percent_change()),
            x: last_index as f64,
            y: *metric.last_value(),
            tone: Tone::from_change(*metric.percent_change()),
        },
    }
}

pub fn table_spec(series: &PriceSeries) -> TableSpec {
    let headers: Vec<String> = std::iter::once(String::from("Date"))
        .chain(series.columns().iter().map(|c| c.to_string()))
        .collect();

    let rows = series
        .rows()
        .iter()
        .map(|row| {
            std::iter::once(row.date().format(DATE_FORMAT).to_string())
                .chain(series.columns().iter().map(|&column| match column {
                    PriceField::Volume => format_volume(*row.volume()),
                    other => format_price(row.value(other)),
                }))
                .collect::<Vec<String>>()
        })
        .collect();

    TableSpec {
        title: TABLE_TITLE.to_string(),
        headers,
        rows,
    }
}

fn padded_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let y_min = points.iter().map(|&(_, v)| v).fold(f64::INFINITY, f64::min);
    let y_max = points
        .iter()
        .map(|&(_, v)| v)
        .fold(f64::NEG_INFINITY, f64::max);

    if !y_min.is_finite() || !y_max.is_finite() {
        return [0.0, 1.0];
    }

    let range = y_max - y_min;
    let pad = if range > 0.0 {
        range * 0.05
    } else if y_max != 0.0 {
        y_max.abs() * 0.05
    } else {
        1.0
    };

    [y_min - pad, y_max + pad]
}

/// First, middle and last dates of the index, without repeats.
fn tick_dates(series: &PriceSeries) -> Vec<NaiveDate> {
    let rows = series.rows();
    if rows.is_empty() {
        return Vec::new();
    }

    let mut ticks: Vec<NaiveDate> = [0, rows.len() / 2, rows.len() - 1]
        .iter()
        .map(|&i| *rows[i].date())
        .collect();
    ticks.dedup();
    ticks
}
