use thiserror::Error;

fn retry_hint(retry_after_secs: &Option<u64>) -> String {
    retry_after_secs
        .map(|secs| format!(" (retry after {}s)", secs))
        .unwrap_or_default()
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("not authenticated with Trakt, run `traktexport auth <username>` first")]
    NotAuthenticated,

    #[error("rate limited by Trakt{}", retry_hint(.retry_after_secs))]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Trakt is unavailable (HTTP {status})")]
    ServiceUnavailable { status: u16 },

    #[error("Trakt request failed: HTTP {status} - {body}")]
    Http { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },

    #[error("authentication failed: {0}")]
    Auth(String),
}

impl ClientError {
    /// The only condition the request layer retries
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ClientError::RateLimited { .. })
    }

    /// Trakt (or the network path to it) is down, as opposed to a bad request
    pub fn is_service_unavailable(&self) -> bool {
        match self {
            ClientError::ServiceUnavailable { .. } => true,
            ClientError::Transport(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}
