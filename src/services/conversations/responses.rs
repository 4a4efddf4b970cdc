//! Response types for the conversations service.

use crate::types::{Channel, Message, ResponseMetadata, UserId};
use serde::Deserialize;

/// Response from conversations.list
#[derive(Debug, Clone, Deserialize)]
pub struct ListConversationsResponse {
    /// Success indicator
    pub ok: bool,
    /// List of channels
    #[serde(default)]
    pub channels: Vec<Channel>,
    /// Response metadata for pagination
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

impl ListConversationsResponse {
    /// Get the next cursor if available
    pub fn next_cursor(&self) -> Option<&str> {
        self.response_metadata
            .as_ref()
            .and_then(|m| m.next_cursor.as_deref())
            .filter(|c| !c.is_empty())
    }
}

/// Response from conversations.info
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationInfoResponse {
    /// Success indicator
    pub ok: bool,
    /// Channel information
    pub channel: Channel,
}

/// Response from conversations.members
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationMembersResponse {
    /// Success indicator
    pub ok: bool,
    /// Member user IDs
    #[serde(default)]
    pub members: Vec<UserId>,
    /// Response metadata for pagination
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

impl ConversationMembersResponse {
    /// Get the next cursor if available
    pub fn next_cursor(&self) -> Option<&str> {
        self.response_metadata
            .as_ref()
            .and_then(|m| m.next_cursor.as_deref())
            .filter(|c| !c.is_empty())
    }
}

/// Response from conversations.history
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationHistoryResponse {
    /// Success indicator
    pub ok: bool,
    /// Messages in the window
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Whether there are more messages
    #[serde(default)]
    pub has_more: bool,
    /// Pin count
    #[serde(default)]
    pub pin_count: Option<i32>,
    /// Response metadata for pagination
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

/// Response from conversations.replies
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationRepliesResponse {
    /// Success indicator
    pub ok: bool,
    /// Thread messages (includes parent)
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Whether there are more messages
    #[serde(default)]
    pub has_more: bool,
    /// Response metadata for pagination
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

/// Response from conversations.join
#[derive(Debug, Clone, Deserialize)]
pub struct JoinConversationResponse {
    /// Success indicator
    pub ok: bool,
    /// Joined channel
    pub channel: Channel,
    /// Warning message (e.g. already_in_channel)
    #[serde(default)]
    pub warning: Option<String>,
    /// Response metadata
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}
