use reqwest::Method;
use std::time::Duration;

use crate::config::ApiConfig;

/// Fixed-delay retry budget applied by [`ApiClient`](super::ApiClient).
///
/// Every failure is retried the same way: timeouts, transport errors and
/// non-2xx statuses alike. No backoff growth, no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Pause between attempts.
    pub delay: Duration,
    /// When false, POST is attempted exactly once.
    pub retry_mutations: bool,
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            delay: Duration::ZERO,
            retry_mutations: false,
        }
    }

    /// Whether a request that already failed `retries_done` retries may go again.
    pub fn should_retry(&self, method: &Method, retries_done: u32) -> bool {
        if *method == Method::POST && !self.retry_mutations {
            return false;
        }
        retries_done < self.max_retries
    }

    /// Upper bound on attempts, first one included.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl From<&ApiConfig> for RetryPolicy {
    fn from(config: &ApiConfig) -> Self {
        Self {
            max_retries: config.retry_count,
            delay: Duration::from_millis(config.retry_delay_ms),
            retry_mutations: config.retry_mutations,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}
