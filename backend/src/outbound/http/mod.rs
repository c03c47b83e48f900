//! Reqwest-backed HTTP GET adapter.
//!
//! This adapter owns transport details only: client identity, timeout, and
//! mapping of transport and status failures. Callers decode bodies themselves.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::domain::ports::{HttpFetch, HttpFetchError};

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "weather-backend/0.1";

/// HTTP adapter issuing GET requests with a fixed identity and timeout.
#[derive(Debug, Clone)]
pub struct ReqwestFetch {
    client: Client,
}

impl ReqwestFetch {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetch {
    async fn get(&self, url: &str) -> Result<String, HttpFetchError> {
        debug!(%url, "upstream GET");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        Ok(body)
    }
}

fn map_transport_error(error: reqwest::Error) -> HttpFetchError {
    if error.is_timeout() {
        HttpFetchError::timeout(error.to_string())
    } else {
        HttpFetchError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &str) -> HttpFetchError {
    HttpFetchError::status(status.as_u16(), body_preview(body))
}

fn body_preview(body: &str) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = body.split_whitespace().collect::<Vec<_>>().join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
