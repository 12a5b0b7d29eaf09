use std::time::Duration;

/// Exponential backoff for rate-limited requests
///
/// `delay(n)` is the wait after the `n`th failed attempt:
/// `base_delay * 2^(n-1)`, capped at `max_delay`. Sleeping is left to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub base_delay: Duration,
    /// Total attempts including the first one. `None` retries forever.
    pub max_attempts: Option<u32>,
    pub max_delay: Option<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_secs(8),
            max_attempts: None,
            max_delay: None,
        }
    }
}

impl RetryPolicy {
    pub fn new(
        base_delay: Duration,
        max_attempts: Option<u32>,
        max_delay: Option<Duration>,
    ) -> Self {
        Self { base_delay, max_attempts, max_delay }
    }

    pub fn delay(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        let delay = self.base_delay.saturating_mul(1u32 << exponent);
        match self.max_delay {
            Some(max) => delay.min(max),
            None => delay,
        }
    }

    /// Whether another attempt may follow `attempts_made` failed ones
    pub fn allows_retry(&self, attempts_made: u32) -> bool {
        self.max_attempts.map_or(true, |max| attempts_made < max)
    }
}
