//! Error types for the tap client.
//!
//! Maps Slack API error codes to semantic error types and exposes the
//! probes the retry layer needs (`is_retryable`, `retry_after`).

use std::time::Duration;
use thiserror::Error;

/// Result type for tap operations
pub type SlackResult<T> = Result<T, SlackError>;

/// Root error type for the Slack tap client
#[derive(Error, Debug, Clone)]
pub enum SlackError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    /// Rate limit error
    #[error("Rate limit error: {0}")]
    RateLimit(#[from] RateLimitError),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Response parsing error
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Channel-related error
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    /// Generic API error
    #[error("API error: {code} - {message}")]
    Api {
        /// Slack error code
        code: String,
        /// Error message
        message: String,
    },
}

impl SlackError {
    /// Check if this error is retryable.
    ///
    /// Only request timeouts and explicit rate limiting are retried.
    /// Every other API error, including connection failures, aborts the
    /// call on first sight; this mirrors the tap's historical behavior.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(NetworkError::Timeout)
                | Self::RateLimit(RateLimitError::RateLimited { .. })
        )
    }

    /// Get the server-advised retry delay if this is a rate-limit error
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimit(RateLimitError::RateLimited { retry_after }) => Some(*retry_after),
            _ => None,
        }
    }

    /// Create an error from a Slack `ok: false` response body.
    ///
    /// `retry_after` carries the parsed `Retry-After` header when the
    /// response was rate limited; absent or unparseable values become a
    /// zero-duration wait.
    pub fn from_slack_error(code: &str, message: Option<&str>, retry_after: Option<Duration>) -> Self {
        let msg = message.unwrap_or("Unknown error").to_string();

        match code {
            "ratelimited" | "rate_limited" => Self::RateLimit(RateLimitError::RateLimited {
                retry_after: retry_after.unwrap_or(Duration::ZERO),
            }),
            "invalid_auth" => Self::Authentication(AuthenticationError::InvalidAuth),
            "account_inactive" => Self::Authentication(AuthenticationError::AccountInactive),
            "token_revoked" => Self::Authentication(AuthenticationError::TokenRevoked),
            "token_expired" => Self::Authentication(AuthenticationError::TokenExpired),
            "not_authed" => Self::Authentication(AuthenticationError::NotAuthed),
            "not_in_channel" => Self::Channel(ChannelError::NotInChannel),
            "fetch_members_failed" => Self::Channel(ChannelError::FetchMembersFailed),
            "channel_not_found" => Self::Channel(ChannelError::ChannelNotFound),
            "channel_is_archived" => Self::Channel(ChannelError::ChannelArchived),
            "already_in_channel" => Self::Channel(ChannelError::AlreadyInChannel),
            _ => Self::Api {
                code: code.to_string(),
                message: msg,
            },
        }
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    /// Missing token
    #[error("Bot token is missing")]
    MissingToken,

    /// Invalid token format
    #[error("Invalid token format: {0}")]
    InvalidToken(String),

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message
        message: String,
    },
}

/// Authentication errors
#[derive(Error, Debug, Clone)]
pub enum AuthenticationError {
    /// Invalid authentication credentials
    #[error("Invalid authentication credentials")]
    InvalidAuth,

    /// Account is inactive
    #[error("Account is inactive")]
    AccountInactive,

    /// Token has been revoked
    #[error("Token has been revoked")]
    TokenRevoked,

    /// Token has expired
    #[error("Token has expired")]
    TokenExpired,

    /// Not authenticated
    #[error("Not authenticated")]
    NotAuthed,
}

/// Rate limit errors
#[derive(Error, Debug, Clone)]
pub enum RateLimitError {
    /// Rate limited with retry information
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Duration to wait before retrying
        retry_after: Duration,
    },
}

/// Network errors
#[derive(Error, Debug, Clone)]
pub enum NetworkError {
    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_connect() {
            NetworkError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            NetworkError::Http(err.to_string())
        }
    }
}

/// Response parsing errors
#[derive(Error, Debug, Clone)]
pub enum ResponseError {
    /// JSON deserialization error
    #[error("Deserialization error: {message}")]
    DeserializationError {
        /// Error message
        message: String,
    },

    /// Unexpected response format
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Error message
        message: String,
    },
}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::DeserializationError {
            message: err.to_string(),
        }
    }
}

/// Channel errors
#[derive(Error, Debug, Clone)]
pub enum ChannelError {
    /// The bot is not a member of the channel
    #[error("Not in channel")]
    NotInChannel,

    /// Slack could not produce the member list for the channel
    #[error("Failed to fetch channel members")]
    FetchMembersFailed,

    /// Channel not found
    #[error("Channel not found")]
    ChannelNotFound,

    /// Channel is archived
    #[error("Channel is archived")]
    ChannelArchived,

    /// Already in channel
    #[error("Already in channel")]
    AlreadyInChannel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_error_is_retryable() {
        assert!(SlackError::Network(NetworkError::Timeout).is_retryable());
        assert!(SlackError::RateLimit(RateLimitError::RateLimited {
            retry_after: Duration::from_secs(5),
        })
        .is_retryable());

        // Connection failures share the non-retryable path with API errors.
        assert!(!SlackError::Network(NetworkError::ConnectionFailed {
            message: "refused".to_string()
        })
        .is_retryable());
        assert!(!SlackError::Authentication(AuthenticationError::InvalidAuth).is_retryable());
        assert!(!SlackError::Channel(ChannelError::NotInChannel).is_retryable());
        assert!(!SlackError::Api {
            code: "internal_error".to_string(),
            message: "boom".to_string()
        }
        .is_retryable());
    }

    #[test_case("invalid_auth" => matches SlackError::Authentication(AuthenticationError::InvalidAuth))]
    #[test_case("not_in_channel" => matches SlackError::Channel(ChannelError::NotInChannel))]
    #[test_case("fetch_members_failed" => matches SlackError::Channel(ChannelError::FetchMembersFailed))]
    #[test_case("channel_not_found" => matches SlackError::Channel(ChannelError::ChannelNotFound))]
    #[test_case("something_else" => matches SlackError::Api { .. })]
    fn test_from_slack_error(code: &str) -> SlackError {
        SlackError::from_slack_error(code, None, None)
    }

    #[test]
    fn test_ratelimited_carries_delay() {
        let err = SlackError::from_slack_error("ratelimited", None, Some(Duration::from_secs(30)));
        assert_eq!(err.retry_after(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_ratelimited_missing_delay_is_zero() {
        let err = SlackError::from_slack_error("ratelimited", None, None);
        assert_eq!(err.retry_after(), Some(Duration::ZERO));
    }

    #[test]
    fn test_retry_after_none_for_other_errors() {
        assert_eq!(SlackError::Network(NetworkError::Timeout).retry_after(), None);
    }
}
