use anyhow::{Context, Error, Result, anyhow};
use chrono::{DateTime, NaiveTime, Utc};
use reqwest::{Client, Url};
use tracing::{debug, info};

use super::{
    fetcher::SeriesFetcher,
    utils::{make_request, parse_response_object},
    yahoo_dto::YahooChartDto,
};
use crate::models::{PriceSeries, QueryParams};

pub const BASE_URL: &str = "https://query2.finance.yahoo.com";

// The chart endpoint answers bare HTTP clients with 429s.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

#[derive(Clone, Debug)]
pub struct YahooApi {
    client: Client,
    base_url: String,
}

impl YahooApi {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn chart_url(&self, query: &QueryParams, end: DateTime<Utc>) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid base URL '{}'", self.base_url))?;

        url.path_segments_mut()
            .map_err(|_| anyhow!("Base URL '{}' cannot carry a path", self.base_url))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", query.ticker().as_str()]);

        let period1 = query
            .start_date()
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp();

        url.query_pairs_mut()
            .append_pair("period1", &period1.to_string())
            .append_pair("period2", &end.timestamp().to_string())
            .append_pair("interval", query.interval().api_code())
            .append_pair("includeAdjustedClose", "true")
            .append_pair("events", "div,split");

        Ok(url)
    }

    pub async fn get_chart(&self, query: &QueryParams) -> Result<PriceSeries> {
        let url = self.chart_url(query, Utc::now())?;
        debug!(%url, "requesting chart");

        let (status, data) = make_request(&self.client, url).await?;

        let chart = match parse_response_object::<YahooChartDto>(
            data,
            &format!("Unexpected chart response for {}", query.ticker()),
        ) {
            Ok(chart) => chart,
            Err(_) if !status.is_success() => {
                return Err(Error::msg(format!("Request failed: {}", status)));
            }
            Err(e) => return Err(e),
        };

        if chart.is_no_data() {
            info!(ticker = %query.ticker(), "no data for symbol in range");
            return Ok(PriceSeries::empty());
        }

        // An error payload carries the service's own explanation; the bare
        // status is only the fallback.
        if !status.is_success() && chart.chart().error().is_none() {
            return Err(Error::msg(format!("Request failed: {}", status)));
        }

        let series = chart
            .to_price_series()
            .with_context(|| format!("Yahoo Finance ({})", query.ticker()))?;

        info!(
            ticker = %query.ticker(),
            interval = %query.interval(),
            rows = series.len(),
            "chart fetched"
        );

        Ok(series)
    }
}

impl SeriesFetcher for YahooApi {
    async fn fetch(&self, query: &QueryParams) -> Result<PriceSeries> {
        self.get_chart(query).await
    }
}
