use derive_getters::Getters;
use tracing::{debug, warn};

use crate::{
    api::SeriesFetcher,
    app::{calc::compute_change, errors::PassError},
    models::{ChangeMetric, PriceSeries, QueryParams},
};

/// Everything a successful pass hands to the presenter.
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct Dashboard {
    query: QueryParams,
    series: PriceSeries,
    metric: ChangeMetric,
}

pub type PassOutcome = Result<Dashboard, PassError>;

/// Fetches the series for `query` and derives the change metric.
pub async fn run_pass<F: SeriesFetcher>(fetcher: &F, query: &QueryParams) -> PassOutcome {
    let series = fetcher.fetch(query).await.map_err(|e| {
        warn!(ticker = %query.ticker(), error = %e, "fetch failed");
        PassError::FetchFailure(format!("{:#}", e))
    })?;

    if series.is_empty() {
        debug!(ticker = %query.ticker(), "empty series");
        return Err(PassError::EmptyResult);
    }

    let metric = compute_change(&series)?;

    Ok(Dashboard {
        query: query.clone(),
        series,
        metric,
    })
}
