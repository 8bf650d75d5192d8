use anyhow::{Context, Result};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(field.trim(), DATE_FORMAT)
        .with_context(|| format!("Failed to parse date '{}'", field))
}

pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => String::from("-"),
    }
}

pub fn format_volume(value: Option<u64>) -> String {
    value.map_or_else(|| String::from("-"), |v| v.to_string())
}

pub fn format_percent(value: f64) -> String {
    // Collapse -0.0 so an unchanged series never reads "-0.00%"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:+.2}%", value)
}
