//! Events API client.
//!
//! Fetches the first page of a user's public events and classifies every
//! failure before any event reaches the renderer.

use reqwest::{header, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, info};

use activity_events::ActivityEvent;

use crate::config::ApiConfig;
use crate::error::FetchError;

const ACCEPT_JSON: &str = "application/vnd.github+json";

pub struct GitHubClient {
    client: reqwest::Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| FetchError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl {
                url: config.base_url.clone(),
                reason: "not a base URL".to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// URL of the public events listing for `username`.
    pub fn events_url(&self, username: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["users", username, "events"]);
        }
        url
    }

    /// Fetch the first page of public events for `username`.
    pub async fn fetch_events(&self, username: &str) -> Result<Vec<ActivityEvent>, FetchError> {
        let url = self.events_url(username);
        debug!(%url, "Requesting events");

        let resp = self
            .client
            .get(url)
            .header(header::ACCEPT, ACCEPT_JSON)
            .send()
            .await?;

        let status = resp.status();
        info!(username, status = status.as_u16(), "Received events response");

        let body = resp.text().await?;
        let events = decode_response(status, &body, username)?;
        debug!(count = events.len(), "Decoded events");
        Ok(events)
    }
}

/// Maps a status code and body to events or a classified error.
pub fn decode_response(
    status: StatusCode,
    body: &str,
    username: &str,
) -> Result<Vec<ActivityEvent>, FetchError> {
    match status {
        StatusCode::OK => {}
        StatusCode::NOT_FOUND => {
            return Err(FetchError::NotFound {
                username: username.to_string(),
            })
        }
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            return Err(FetchError::RateLimited)
        }
        other => {
            return Err(FetchError::UnexpectedStatus {
                status: other.as_u16(),
            })
        }
    }

    let value: Value = serde_json::from_str(body)?;
    if !value.is_array() {
        return Err(FetchError::Format(format!(
            "expected a JSON array, got {}",
            json_kind(&value)
        )));
    }

    Ok(serde_json::from_value(value)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
