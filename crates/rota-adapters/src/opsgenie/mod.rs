//! OpsGenie REST API v2 adapter.
//!
//! Implements every outbound port with plain `GET` requests authenticated by
//! a `GenieKey` header. All responses are wrapped in a `data` envelope.

mod alert;
mod dto;
mod escalation;
mod schedule;
mod team;
mod user;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use rota_ports::error::PortError;

use dto::{ApiErrorBody, Envelope};

/// Default API endpoint (US instance).
pub const DEFAULT_API_URL: &str = "https://api.opsgenie.com";

/// Default timeout applied to every HTTP request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct OpsGenieClient {
    client: reqwest::Client,
    base_url: Url,
}

impl OpsGenieClient {
    /// Create a client for the given API key.
    ///
    /// The key is not checked locally; a wrong key surfaces as an API error
    /// on the first request.
    ///
    /// # Errors
    /// Returns error if the key is not a valid header value, the base URL
    /// does not parse, or the HTTP client cannot be built.
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self, PortError> {
        let mut auth = HeaderValue::from_str(&format!("GenieKey {api_key}"))
            .map_err(|e| PortError::Connection(format!("invalid api key: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| PortError::Connection(e.to_string()))?;

        let base_url = Url::parse(base_url)
            .map_err(|e| PortError::Connection(format!("invalid api url {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(PortError::Connection(format!(
                "invalid api url {base_url}: not a base url"
            )));
        }

        debug!(base_url = %base_url, "OpsGenie client initialized");

        Ok(Self { client, base_url })
    }

    /// Build an endpoint URL, percent-encoding each path segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, PortError> {
        debug!(url = %url, "GET");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| PortError::Connection(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(PortError::NotFound);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);

            warn!(status = %status, message = %message, "OpsGenie API request failed");

            return Err(PortError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| PortError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }
}
