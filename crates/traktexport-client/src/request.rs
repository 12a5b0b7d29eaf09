use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use crate::backoff::RetryPolicy;
use crate::error::ClientError;
use crate::transport::Transport;

/// Fixed pause after every successful request
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(2);

/// Retrying front for a [`Transport`]
///
/// Rate-limit responses are retried with exponential backoff until the policy
/// gives up; every other failure is returned as-is on the first attempt.
pub struct Requester<T> {
    transport: T,
    policy: RetryPolicy,
    request_delay: Duration,
}

impl<T: Transport> Requester<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            policy: RetryPolicy::default(),
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_authenticated(&self) -> bool {
        self.transport.is_authenticated()
    }

    pub async fn get(&self, endpoint: &str) -> Result<Value, ClientError> {
        let mut attempt: u32 = 1;
        loop {
            match self.transport.get_json(endpoint).await {
                Ok(value) => {
                    debug!("Fetched '{}' (attempt {})", endpoint, attempt);
                    tokio::time::sleep(self.request_delay).await;
                    return Ok(value);
                }
                Err(ClientError::RateLimited { retry_after_secs })
                    if self.policy.allows_retry(attempt) =>
                {
                    let mut wait = self.policy.delay(attempt);
                    if let Some(secs) = retry_after_secs {
                        wait = wait.max(Duration::from_secs(secs));
                    }
                    warn!(
                        "Rate limited on '{}', retrying in {}s (attempt {})",
                        endpoint,
                        wait.as_secs(),
                        attempt
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
