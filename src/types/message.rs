//! Message-related types for the Slack API.

use super::{ChannelId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// Slack message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message type
    #[serde(rename = "type", default)]
    pub message_type: Option<String>,
    /// Message subtype
    #[serde(default)]
    pub subtype: Option<String>,
    /// Message text
    #[serde(default)]
    pub text: Option<String>,
    /// User who sent the message
    #[serde(default)]
    pub user: Option<UserId>,
    /// Bot ID if sent by a bot
    #[serde(default)]
    pub bot_id: Option<String>,
    /// Message timestamp (unique ID)
    pub ts: Timestamp,
    /// Thread timestamp (if in a thread)
    #[serde(default)]
    pub thread_ts: Option<Timestamp>,
    /// Parent user ID (if in a thread)
    #[serde(default)]
    pub parent_user_id: Option<UserId>,
    /// Reply count (if thread parent)
    #[serde(default)]
    pub reply_count: Option<i32>,
    /// Reply users count
    #[serde(default)]
    pub reply_users_count: Option<i32>,
    /// Latest reply timestamp
    #[serde(default)]
    pub latest_reply: Option<Timestamp>,
    /// Reply users (sample)
    #[serde(default)]
    pub reply_users: Vec<UserId>,
    /// Reactions on this message
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    /// Channel ID (included in some responses)
    #[serde(default)]
    pub channel: Option<ChannelId>,
    /// Team ID
    #[serde(default)]
    pub team: Option<String>,
    /// Edited info
    #[serde(default)]
    pub edited: Option<MessageEdited>,
}

impl Message {
    /// Check if this message is a thread parent
    pub fn is_thread_parent(&self) -> bool {
        self.reply_count.map(|n| n > 0).unwrap_or(false)
            || self
                .thread_ts
                .as_ref()
                .map(|t| *t == self.ts)
                .unwrap_or(false)
    }

    /// Check if this message is a thread reply
    pub fn is_thread_reply(&self) -> bool {
        self.thread_ts
            .as_ref()
            .map(|t| *t != self.ts)
            .unwrap_or(false)
    }
}

/// Reaction on a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reaction {
    /// Emoji name
    pub name: String,
    /// Reaction count
    #[serde(default)]
    pub count: i32,
    /// Users who reacted (sample)
    #[serde(default)]
    pub users: Vec<UserId>,
}

/// Edit metadata on a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEdited {
    /// Who edited
    #[serde(default)]
    pub user: Option<UserId>,
    /// When it was edited
    #[serde(default)]
    pub ts: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_parent_detection() {
        let json = r#"{
            "type": "message",
            "text": "parent",
            "ts": "1600000000.000100",
            "thread_ts": "1600000000.000100",
            "reply_count": 3
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert!(msg.is_thread_parent());
        assert!(!msg.is_thread_reply());
    }

    #[test]
    fn test_thread_reply_detection() {
        let json = r#"{
            "type": "message",
            "text": "reply",
            "ts": "1600000001.000200",
            "thread_ts": "1600000000.000100"
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert!(msg.is_thread_reply());
        assert!(!msg.is_thread_parent());
    }
}
