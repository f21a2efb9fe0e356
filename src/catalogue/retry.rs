//! Retry with exponential backoff for transient HTTP failures.
//!
//! The metadata service answers bursts of concurrent page requests with 503s,
//! and the lyrics service is often overloaded. Both are retried here.
//!
//! **Backoff Strategy:**
//! - Delay cap starts at `initial_backoff` and doubles per attempt
//! - Each cap is bounded by `max_backoff`
//! - The actual sleep is a random value in `0..=cap` (full jitter)
//! - Only errors where [`CatalogueError::is_transient`] holds are retried

use std::future::Future;
use std::time::Duration;

use rand::Rng;

use super::domain::CatalogueError;
use crate::config::HttpConfig;

/// How often and how patiently to retry a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts including the first one
    pub max_tries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &HttpConfig) -> Self {
        Self {
            max_tries: config.max_tries.max(1),
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            max_backoff: Duration::from_millis(config.max_backoff_ms),
        }
    }

    /// Single attempt, no retries.
    pub fn none() -> Self {
        Self {
            max_tries: 1,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
        }
    }

    /// Upper bound of the delay after the given failed attempt (1-based).
    pub fn delay_cap(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&HttpConfig::default())
    }
}

/// Run `operation` until it succeeds, fails permanently, or runs out of tries.
pub async fn with_backoff<F, Fut, T>(
    policy: &RetryPolicy,
    operation_name: &str,
    mut operation: F,
) -> Result<T, CatalogueError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CatalogueError>>,
{
    let mut attempt = 0;

    loop {
        attempt += 1;

        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::debug!(
                        operation = operation_name,
                        attempt,
                        "Request succeeded after retry"
                    );
                }
                return Ok(value);
            }
            Err(err) if err.is_transient() && attempt < policy.max_tries => {
                let cap_ms = policy.delay_cap(attempt).as_millis() as u64;
                let delay_ms = if cap_ms == 0 {
                    0
                } else {
                    rand::rng().random_range(0..=cap_ms)
                };
                tracing::warn!(
                    operation = operation_name,
                    attempt,
                    delay_ms,
                    error = %err,
                    "Transient failure, retrying"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
            Err(err) => {
                if err.is_transient() {
                    tracing::error!(
                        operation = operation_name,
                        attempt,
                        error = %err,
                        "Giving up after max retries"
                    );
                }
                return Err(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_policy(max_tries: u32) -> RetryPolicy {
        RetryPolicy {
            max_tries,
            initial_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(2),
        }
    }

    #[test]
    fn test_delay_cap_doubles_and_caps() {
        let policy = RetryPolicy {
            max_tries: 10,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_millis(3000),
        };
        assert_eq!(policy.delay_cap(1), Duration::from_millis(500));
        assert_eq!(policy.delay_cap(2), Duration::from_millis(1000));
        assert_eq!(policy.delay_cap(3), Duration::from_millis(2000));
        assert_eq!(policy.delay_cap(4), Duration::from_millis(3000));
        assert_eq!(policy.delay_cap(40), Duration::from_millis(3000));
    }

    #[test]
    fn test_policy_from_config_never_zero_tries() {
        let config = HttpConfig {
            max_tries: 0,
            ..Default::default()
        };
        assert_eq!(RetryPolicy::from_config(&config).max_tries, 1);
    }

    #[tokio::test]
    async fn test_retries_transient_then_succeeds() {
        let calls = &AtomicU32::new(0);
        let result = with_backoff(&fast_policy(5), "test", move || async move {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            if n < 3 {
                Err(CatalogueError::RateLimited)
            } else {
                Ok(n)
            }
        })
        .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_permanent_error_fails_fast() {
        let calls = &AtomicU32::new(0);
        let result: Result<(), _> = with_backoff(&fast_policy(5), "test", move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(CatalogueError::Parse("bad json".to_string()))
        })
        .await;

        assert!(matches!(result, Err(CatalogueError::Parse(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_tries() {
        let calls = &AtomicU32::new(0);
        let result: Result<(), _> = with_backoff(&fast_policy(4), "test", move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(CatalogueError::Http {
                status: 503,
                reason: "Service Unavailable".to_string(),
            })
        })
        .await;

        assert!(matches!(result, Err(CatalogueError::Http { status: 503, .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_no_retry_policy() {
        let calls = &AtomicU32::new(0);
        let result: Result<(), _> = with_backoff(&RetryPolicy::none(), "test", move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(CatalogueError::Network("reset".to_string()))
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
