use anyhow::{Context, Error, Result};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Sends a GET request and returns the status together with the JSON body.
///
/// The body is returned for non-success statuses too, since the chart API
/// reports unknown symbols as a 404 with a structured error payload.
pub async fn make_request(client: &Client, url: Url) -> Result<(StatusCode, Value)> {
    let res = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url.path()))?;

    let status = res.status();
    let text = res.text().await?;

    match serde_json::from_str::<Value>(&text) {
        Ok(data) => Ok((status, data)),
        Err(_) if !status.is_success() => Err(Error::msg(format!("Request failed: {}", status))),
        Err(e) => Err(Error::msg(format!("Unexpected API response: {}", e))),
    }
}

pub fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .with_context(|| error_msg.to_string()),
        _ => Err(Error::msg("Unexpected API response format: not an object")),
    }
}
