use std::future::Future;

use anyhow::Result;

use crate::models::{PriceSeries, QueryParams};

/// Source of historical price series.
///
/// An empty series is a successful fetch; errors are reserved for failures
/// of the data service itself (network, rate limiting, malformed responses).
pub trait SeriesFetcher {
    fn fetch(&self, query: &QueryParams) -> impl Future<Output = Result<PriceSeries>>;
}
