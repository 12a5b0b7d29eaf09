//! HTTP plumbing for the Trakt API
//!
//! Everything above this module sees Trakt as "GET an endpoint, get JSON
//! back". Status handling lives here; the only status the rest of the crate
//! reacts to is 429, surfaced as [`ClientError::RateLimited`].

use async_trait::async_trait;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use crate::error::ClientError;
use crate::session::Session;

pub const BASE_URL: &str = "https://api.trakt.tv/";

#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `endpoint` (relative to the API root, no leading slash) as JSON
    async fn get_json(&self, endpoint: &str) -> Result<Value, ClientError>;

    fn is_authenticated(&self) -> bool;
}

const BROWSER_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
);

/// Create a reqwest Client with browser-like headers to bypass Cloudflare
pub fn create_trakt_client(timeout: Duration) -> Client {
    Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

pub struct HttpTransport {
    client: Client,
    base_url: String,
    session: Option<Session>,
}

impl HttpTransport {
    pub fn new(session: Option<Session>, timeout: Duration) -> Self {
        Self {
            client: create_trakt_client(timeout),
            base_url: BASE_URL.to_string(),
            session,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, endpoint: &str) -> Result<Value, ClientError> {
        let session = self
            .session
            .as_ref()
            .filter(|s| s.is_valid())
            .ok_or(ClientError::NotAuthenticated)?;

        let url = self.url(endpoint);
        debug!("Requesting '{}'...", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", session.authorization_header())
            .header("trakt-api-version", "2")
            .header("trakt-api-key", session.client_id())
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = parse_retry_after(response.headers());
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), retry_after, body));
        }

        Ok(response.json::<Value>().await?)
    }

    fn is_authenticated(&self) -> bool {
        self.session.as_ref().map_or(false, Session::is_valid)
    }
}

/// Map a non-success status onto the error taxonomy
pub(crate) fn status_error(
    status: u16,
    retry_after_secs: Option<u64>,
    body: String,
) -> ClientError {
    match status {
        429 => ClientError::RateLimited { retry_after_secs },
        401 | 403 => ClientError::NotAuthenticated,
        // 52x are Cloudflare's origin-down codes
        502 | 503 | 504 | 520..=530 => ClientError::ServiceUnavailable { status },
        _ => ClientError::Http { status, body },
    }
}

/// `Retry-After` in seconds, if Trakt sent a numeric one
pub(crate) fn parse_retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
}
