//! Constant-backoff retry for transient failures and rate limiting.
//!
//! The history and replies endpoints sit in Slack's Tier 3 bucket (50+
//! requests per minute), so a failed attempt during a full extraction run
//! is almost always rate limiting. The policy is deliberately simple:
//! a fixed interval between retries, no exponential growth, no jitter,
//! with the server-advised `Retry-After` overriding the interval for the
//! rate-limit branch only.

use crate::errors::{SlackError, SlackResult};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts per call, including the first
    pub max_tries: u32,
    /// Fixed wait between retries
    pub interval: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_tries: crate::BACKOFF_MAX_TRIES,
            interval: Duration::from_secs_f64(crate::BACKOFF_INTERVAL_SECS),
        }
    }
}

impl RetryConfig {
    /// Create a new retry configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total attempts per call
    pub fn max_tries(mut self, n: u32) -> Self {
        self.max_tries = n;
        self
    }

    /// Set the fixed retry interval
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

/// Sleep mechanism, injectable so tests can assert on requested durations
/// without real elapsed time.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspend the current task for the given duration
    async fn sleep(&self, duration: Duration);
}

/// Default sleeper backed by the tokio timer
#[derive(Debug, Clone, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Retry policy for determining if an error should be retried
pub trait RetryPolicy: Send + Sync {
    /// Check if an error is retryable
    fn is_retryable(&self, error: &SlackError) -> bool;

    /// Get the retry delay for an error (overrides the fixed interval)
    fn get_retry_delay(&self, error: &SlackError) -> Option<Duration>;
}

/// Default retry policy: timeouts wait the fixed interval, rate limits
/// wait the server-advised delay, everything else aborts immediately.
#[derive(Debug, Clone, Default)]
pub struct DefaultRetryPolicy;

impl RetryPolicy for DefaultRetryPolicy {
    fn is_retryable(&self, error: &SlackError) -> bool {
        error.is_retryable()
    }

    fn get_retry_delay(&self, error: &SlackError) -> Option<Duration> {
        error.retry_after()
    }
}

/// Retry executor shared by all services
#[derive(Clone)]
pub struct Retrier {
    config: RetryConfig,
    sleeper: Arc<dyn Sleeper>,
}

impl Retrier {
    /// Create a new retrier with the given configuration
    pub fn new(config: RetryConfig) -> Self {
        Self {
            config,
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Replace the sleep mechanism (for tests)
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Get the retry configuration
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Execute an operation under the retry policy.
    ///
    /// The retry loop is strictly sequential: one attempt at a time, with
    /// the call suspended for the full wait between attempts.
    pub async fn run<F, Fut, T>(
        &self,
        endpoint: &str,
        policy: &dyn RetryPolicy,
        operation: F,
    ) -> SlackResult<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = SlackResult<T>>,
    {
        let mut attempt = 0;

        loop {
            attempt += 1;

            match operation().await {
                Ok(result) => {
                    if attempt > 1 {
                        debug!(endpoint, attempt, "Operation succeeded after retry");
                    }
                    return Ok(result);
                }
                Err(error) => {
                    if !policy.is_retryable(&error) {
                        // No retry consumed, no wait
                        return Err(error);
                    }

                    if attempt >= self.config.max_tries {
                        warn!(
                            endpoint,
                            attempt,
                            max_tries = self.config.max_tries,
                            error = %error,
                            "Retries exhausted"
                        );
                        return Err(error);
                    }

                    let delay = policy
                        .get_retry_delay(&error)
                        .unwrap_or(self.config.interval);

                    debug!(
                        endpoint,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "Retrying after transient error"
                    );

                    self.sleeper.sleep(delay).await;
                }
            }
        }
    }
}

impl std::fmt::Debug for Retrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Retrier")
            .field("config", &self.config)
            .finish()
    }
}

/// Execute an operation with retry using the default tokio sleeper
pub async fn with_retry<F, Fut, T>(
    config: &RetryConfig,
    policy: &dyn RetryPolicy,
    operation: F,
) -> SlackResult<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = SlackResult<T>>,
{
    Retrier::new(config.clone()).run("", policy, operation).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{NetworkError, RateLimitError};
    use crate::mocks::RecordingSleeper;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_retrier(max_tries: u32) -> (Retrier, Arc<RecordingSleeper>) {
        let sleeper = Arc::new(RecordingSleeper::new());
        let retrier = Retrier::new(
            RetryConfig::new()
                .max_tries(max_tries)
                .interval(Duration::from_secs(15)),
        )
        .with_sleeper(sleeper.clone());
        (retrier, sleeper)
    }

    fn rate_limited(secs: u64) -> SlackError {
        SlackError::RateLimit(RateLimitError::RateLimited {
            retry_after: Duration::from_secs(secs),
        })
    }

    #[tokio::test]
    async fn test_first_attempt_success_no_sleep() {
        let (retrier, sleeper) = fast_retrier(4);

        let result = retrier
            .run("test", &DefaultRetryPolicy, || async { Ok("success") })
            .await;

        assert_eq!(result.unwrap(), "success");
        assert!(sleeper.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_rate_limit_then_success_sleeps_server_delay() {
        let (retrier, sleeper) = fast_retrier(4);
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = attempts.clone();

        let result = retrier
            .run("test", &DefaultRetryPolicy, || {
                let attempts = attempts_clone.clone();
                async move {
                    if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                        Err(rate_limited(5))
                    } else {
                        Ok("recovered")
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "recovered");
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
        assert_eq!(sleeper.recorded(), vec![Duration::from_secs(5)]);
    }

    #[tokio::test]
    async fn test_timeout_retries_with_fixed_interval() {
        let (retrier, sleeper) = fast_retrier(4);
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = attempts.clone();

        let result = retrier
            .run("test", &DefaultRetryPolicy, || {
                let attempts = attempts_clone.clone();
                async move {
                    if attempts.fetch_add(1, Ordering::SeqCst) < 2 {
                        Err(SlackError::Network(NetworkError::Timeout))
                    } else {
                        Ok(())
                    }
                }
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(
            sleeper.recorded(),
            vec![Duration::from_secs(15), Duration::from_secs(15)]
        );
    }

    #[tokio::test]
    async fn test_exhaustion_propagates_last_error_no_fifth_attempt() {
        let (retrier, sleeper) = fast_retrier(4);
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = attempts.clone();

        let result: SlackResult<()> = retrier
            .run("test", &DefaultRetryPolicy, || {
                let attempts = attempts_clone.clone();
                async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err(rate_limited(1))
                }
            })
            .await;

        assert!(matches!(
            result,
            Err(SlackError::RateLimit(RateLimitError::RateLimited { .. }))
        ));
        assert_eq!(attempts.load(Ordering::SeqCst), 4);
        // Three waits for four attempts
        assert_eq!(sleeper.recorded().len(), 3);
    }

    #[tokio::test]
    async fn test_non_retryable_aborts_immediately() {
        let (retrier, sleeper) = fast_retrier(4);
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = attempts.clone();

        let result: SlackResult<()> = retrier
            .run("test", &DefaultRetryPolicy, || {
                let attempts = attempts_clone.clone();
                async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err(SlackError::Api {
                        code: "internal_error".to_string(),
                        message: "boom".to_string(),
                    })
                }
            })
            .await;

        assert!(matches!(result, Err(SlackError::Api { .. })));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert!(sleeper.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_zero_duration_rate_limit_wait() {
        let (retrier, sleeper) = fast_retrier(4);
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = attempts.clone();

        let result = retrier
            .run("test", &DefaultRetryPolicy, || {
                let attempts = attempts_clone.clone();
                async move {
                    if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                        Err(rate_limited(0))
                    } else {
                        Ok(())
                    }
                }
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(sleeper.recorded(), vec![Duration::ZERO]);
    }

    #[tokio::test]
    async fn test_with_retry_helper() {
        let config = RetryConfig::new()
            .max_tries(2)
            .interval(Duration::from_millis(1));

        let result = with_retry(&config, &DefaultRetryPolicy, || async { Ok(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }
}
