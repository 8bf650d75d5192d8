use crate::{
    app::errors::{DegenerateReason, PassError},
    models::{ChangeMetric, PriceField, PriceSeries},
};

/// Adjusted close when the series carries it, plain close otherwise.
pub fn canonical_field(series: &PriceSeries) -> PriceField {
    if series.has_column(PriceField::AdjClose) {
        PriceField::AdjClose
    } else {
        PriceField::Close
    }
}

/// Relative change in percent, `None` when the baseline is zero.
pub fn percent_change(first: f64, last: f64) -> Option<f64> {
    if first == 0.0 {
        return None;
    }
    Some((last - first) / first * 100.0)
}

pub fn compute_change(series: &PriceSeries) -> Result<ChangeMetric, PassError> {
    let field = canonical_field(series);

    let (Some(first_row), Some(last_row)) = (series.first(), series.last()) else {
        return Err(PassError::EmptyResult);
    };

    let degenerate = |reason| PassError::DegenerateInput { field, reason };

    let first_value = first_row
        .value(field)
        .filter(|v| v.is_finite())
        .ok_or_else(|| degenerate(DegenerateReason::MissingValue))?;
    let last_value = last_row
        .value(field)
        .filter(|v| v.is_finite())
        .ok_or_else(|| degenerate(DegenerateReason::MissingValue))?;

    if series.len() == 1 {
        return Ok(ChangeMetric::new(field, first_value, last_value, 0.0));
    }

    let change = percent_change(first_value, last_value)
        .ok_or_else(|| degenerate(DegenerateReason::ZeroBaseline))?;

    Ok(ChangeMetric::new(field, first_value, last_value, change))
}
