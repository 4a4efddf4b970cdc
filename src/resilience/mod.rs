//! Resilience layer: constant-backoff retry with rate-limit recovery.

pub mod retry;

pub use retry::{
    with_retry, DefaultRetryPolicy, Retrier, RetryConfig, RetryPolicy, Sleeper, TokioSleeper,
};
