//! Common types for the Slack API surface the tap extracts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod channel;
pub mod file;
pub mod message;
pub mod team;
pub mod user;

pub use channel::*;
pub use file::*;
pub use message::*;
pub use team::*;
pub use user::*;

/// Slack timestamp (ts) - unique identifier for messages
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub String);

impl Timestamp {
    /// Create a new timestamp
    pub fn new(ts: impl Into<String>) -> Self {
        Self(ts.into())
    }

    /// Get the timestamp as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse timestamp to DateTime
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let secs_str = self.0.split('.').next()?;
        let secs = secs_str.parse::<i64>().ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}

impl From<String> for Timestamp {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Timestamp {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slack channel ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub String);

impl ChannelId {
    /// Create a new channel ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ChannelId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ChannelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slack user ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Create a new user ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slack team/workspace ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub String);

impl TeamId {
    /// Create a new team ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TeamId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TeamId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slack file ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(pub String);

impl FileId {
    /// Create a new file ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FileId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FileId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cursor for pagination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(pub String);

impl Cursor {
    /// Create a new cursor
    pub fn new(cursor: impl Into<String>) -> Self {
        Self(cursor.into())
    }

    /// Get the cursor as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Cursor {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Cursor {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Response metadata for pagination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Next cursor for pagination
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl ResponseMetadata {
    /// Check if there are more results
    pub fn has_more(&self) -> bool {
        self.next_cursor
            .as_ref()
            .map(|c| !c.is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_parsing() {
        let ts = Timestamp::new("1234567890.123456");
        assert_eq!(ts.as_str(), "1234567890.123456");

        let dt = ts.to_datetime().unwrap();
        assert_eq!(dt.timestamp(), 1234567890);
    }

    #[test]
    fn test_timestamp_garbage_is_none() {
        assert!(Timestamp::new("not-a-ts").to_datetime().is_none());
    }

    #[test]
    fn test_response_metadata_has_more() {
        let meta = ResponseMetadata {
            next_cursor: Some("dGVhbTpDMDYxRkE1UEI=".to_string()),
        };
        assert!(meta.has_more());

        let empty_meta = ResponseMetadata {
            next_cursor: Some("".to_string()),
        };
        assert!(!empty_meta.has_more());

        let none_meta = ResponseMetadata { next_cursor: None };
        assert!(!none_meta.has_more());
    }
}
