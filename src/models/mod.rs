pub mod change_metric;
pub mod interval;
pub mod price_series;
pub mod query;

pub use change_metric::ChangeMetric;
pub use interval::Interval;
pub use price_series::{PriceField, PriceRow, PriceSeries};
pub use query::QueryParams;
