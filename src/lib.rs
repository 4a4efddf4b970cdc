//! Rate-limit-aware Slack client for data-extraction taps.
//!
//! Wraps the Slack Web API endpoints an extraction run needs (channels,
//! messages, threads, users, user groups, team, files) behind a constant
//! backoff retry policy: a fixed wait between attempts, a bounded number
//! of tries, and the server-advised `Retry-After` honored when Slack rate
//! limits a call. Only timeouts and rate limits are retried; every other
//! error aborts the call immediately.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use slack_tap_client::types::ChannelType;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from environment
//!     let client = slack_tap_client::create_client_from_env()?;
//!
//!     // Enumerate public channels
//!     let page = client
//!         .channels_list(&[ChannelType::PublicChannel], true, None)
//!         .await?;
//!
//!     for channel in &page.channels {
//!         println!("{}", channel.display_name());
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod transport;
pub mod types;

// Services
pub mod services;

// Resilience
pub mod resilience;

// Testing utilities
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::SlackTapClient;
pub use config::{TapConfig, TapConfigBuilder};
pub use errors::{SlackError, SlackResult};

/// Default base URL for Slack API
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

/// Default per-attempt timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fixed wait between retries, in seconds
pub const BACKOFF_INTERVAL_SECS: f64 = 15.0;

/// Total attempts per call, including the first
pub const BACKOFF_MAX_TRIES: u32 = 4;

/// Create a tap client with the given configuration
pub fn create_client(config: TapConfig) -> SlackResult<SlackTapClient> {
    SlackTapClient::new(config)
}

/// Create a tap client from environment variables
///
/// Reads:
/// - `SLACK_BOT_TOKEN` - Bot token (xoxb-*)
/// - `SLACK_BASE_URL` - API base URL override
/// - `SLACK_TIMEOUT` - Per-attempt timeout in seconds
/// - `SLACK_BACKOFF_INTERVAL` - Fixed retry interval in seconds
/// - `SLACK_BACKOFF_MAX_TRIES` - Total attempts per call
pub fn create_client_from_env() -> SlackResult<SlackTapClient> {
    let config = TapConfig::from_env()?;
    create_client(config)
}
