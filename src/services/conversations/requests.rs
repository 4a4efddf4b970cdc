//! Request types for the conversations service.

use crate::types::{ChannelId, ChannelType, Cursor, Timestamp};
use serde::Serialize;

/// Request to list conversations
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListConversationsRequest {
    /// Types of conversations to include (comma-separated API filters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    /// Exclude archived channels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_archived: Option<bool>,
    /// Cursor for pagination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
    /// Number of results to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl ListConversationsRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set conversation types from a raw filter string
    pub fn types_raw(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }

    /// Set conversation types
    pub fn types(mut self, types: &[ChannelType]) -> Self {
        self.types = Some(
            types
                .iter()
                .map(|t| t.as_api_filter())
                .collect::<Vec<_>>()
                .join(","),
        );
        self
    }

    /// Exclude archived channels
    pub fn exclude_archived(mut self, exclude: bool) -> Self {
        self.exclude_archived = Some(exclude);
        self
    }

    /// Set pagination cursor
    pub fn cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set result limit
    pub fn limit(mut self, n: i32) -> Self {
        self.limit = Some(n);
        self
    }
}

/// Request to get conversation info
#[derive(Debug, Clone, Serialize)]
pub struct ConversationInfoRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// Include number of members
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_num_members: Option<bool>,
}

impl ConversationInfoRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
            include_num_members: None,
        }
    }

    /// Include member count
    pub fn include_num_members(mut self, include: bool) -> Self {
        self.include_num_members = Some(include);
        self
    }
}

/// Request to list conversation members
#[derive(Debug, Clone, Serialize)]
pub struct ConversationMembersRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// Cursor for pagination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
    /// Number of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl ConversationMembersRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
            cursor: None,
            limit: None,
        }
    }

    /// Set pagination cursor
    pub fn cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set result limit
    pub fn limit(mut self, n: i32) -> Self {
        self.limit = Some(n);
        self
    }
}

/// Request to get conversation history in a time window
#[derive(Debug, Clone, Serialize)]
pub struct ConversationHistoryRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// Only messages after this timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest: Option<Timestamp>,
    /// Only messages before this timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<Timestamp>,
    /// Include messages with oldest or latest timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,
    /// Cursor for pagination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
    /// Number of messages to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl ConversationHistoryRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
            oldest: None,
            latest: None,
            inclusive: None,
            cursor: None,
            limit: None,
        }
    }

    /// Set oldest timestamp
    pub fn oldest(mut self, ts: impl Into<Timestamp>) -> Self {
        self.oldest = Some(ts.into());
        self
    }

    /// Set latest timestamp
    pub fn latest(mut self, ts: impl Into<Timestamp>) -> Self {
        self.latest = Some(ts.into());
        self
    }

    /// Include boundary messages
    pub fn inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = Some(inclusive);
        self
    }

    /// Set pagination cursor
    pub fn cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set result limit
    pub fn limit(mut self, n: i32) -> Self {
        self.limit = Some(n);
        self
    }
}

/// Request to get thread replies
#[derive(Debug, Clone, Serialize)]
pub struct ConversationRepliesRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// Thread parent timestamp
    pub ts: Timestamp,
    /// Include the message with oldest or latest timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,
    /// Only messages after this timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest: Option<Timestamp>,
    /// Only messages before this timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<Timestamp>,
    /// Cursor for pagination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
    /// Number of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl ConversationRepliesRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>, ts: impl Into<Timestamp>) -> Self {
        Self {
            channel: channel.into(),
            ts: ts.into(),
            inclusive: None,
            oldest: None,
            latest: None,
            cursor: None,
            limit: None,
        }
    }

    /// Include boundary messages
    pub fn inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = Some(inclusive);
        self
    }

    /// Set oldest timestamp
    pub fn oldest(mut self, ts: impl Into<Timestamp>) -> Self {
        self.oldest = Some(ts.into());
        self
    }

    /// Set latest timestamp
    pub fn latest(mut self, ts: impl Into<Timestamp>) -> Self {
        self.latest = Some(ts.into());
        self
    }

    /// Set pagination cursor
    pub fn cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set result limit
    pub fn limit(mut self, n: i32) -> Self {
        self.limit = Some(n);
        self
    }
}

/// Request to join a conversation
#[derive(Debug, Clone, Serialize)]
pub struct JoinConversationRequest {
    /// Channel ID
    pub channel: ChannelId,
}

impl JoinConversationRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
        }
    }
}
