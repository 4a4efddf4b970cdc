//! User and user-group types for the Slack API.

use super::{TeamId, UserId};
use serde::{Deserialize, Serialize};

/// Slack user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: UserId,
    /// Team ID
    #[serde(default)]
    pub team_id: Option<TeamId>,
    /// Username
    #[serde(default)]
    pub name: Option<String>,
    /// Real name
    #[serde(default)]
    pub real_name: Option<String>,
    /// Whether deleted/deactivated
    #[serde(default)]
    pub deleted: bool,
    /// Timezone
    #[serde(default)]
    pub tz: Option<String>,
    /// Timezone offset
    #[serde(default)]
    pub tz_offset: Option<i32>,
    /// User profile
    #[serde(default)]
    pub profile: Option<UserProfile>,
    /// Whether admin
    #[serde(default)]
    pub is_admin: bool,
    /// Whether owner
    #[serde(default)]
    pub is_owner: bool,
    /// Whether restricted
    #[serde(default)]
    pub is_restricted: bool,
    /// Whether bot
    #[serde(default)]
    pub is_bot: bool,
    /// Whether app user
    #[serde(default)]
    pub is_app_user: bool,
    /// Updated timestamp
    #[serde(default)]
    pub updated: Option<i64>,
}

impl User {
    /// Get the best display name for this user
    pub fn display_name(&self) -> &str {
        self.profile
            .as_ref()
            .and_then(|p| p.display_name.as_deref())
            .filter(|n| !n.is_empty())
            .or(self.real_name.as_deref())
            .or(self.name.as_deref())
            .unwrap_or(&self.id.0)
    }
}

/// User profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Real name
    #[serde(default)]
    pub real_name: Option<String>,
    /// Email
    #[serde(default)]
    pub email: Option<String>,
    /// Title
    #[serde(default)]
    pub title: Option<String>,
    /// Status text
    #[serde(default)]
    pub status_text: Option<String>,
    /// Status emoji
    #[serde(default)]
    pub status_emoji: Option<String>,
}

/// Slack user group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserGroup {
    /// Group ID
    pub id: String,
    /// Team ID
    #[serde(default)]
    pub team_id: Option<TeamId>,
    /// Group name
    #[serde(default)]
    pub name: Option<String>,
    /// Group handle (@handle)
    #[serde(default)]
    pub handle: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Creation timestamp (Unix)
    #[serde(default)]
    pub date_create: Option<i64>,
    /// Deletion timestamp (Unix, if disabled)
    #[serde(default)]
    pub date_delete: Option<i64>,
    /// Member user IDs (only with include_users)
    #[serde(default)]
    pub users: Vec<UserId>,
    /// Member count (only with include_count)
    #[serde(default)]
    pub user_count: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_display_name_preference() {
        let json = r#"{
            "id": "U123",
            "name": "jdoe",
            "real_name": "Jane Doe",
            "profile": { "display_name": "jane" }
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name(), "jane");
    }

    #[test]
    fn test_user_display_name_falls_back() {
        let json = r#"{ "id": "U123" }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name(), "U123");
    }

    #[test]
    fn test_usergroup_deserialize() {
        let json = r#"{
            "id": "S999",
            "name": "on-call",
            "handle": "oncall",
            "users": ["U1", "U2"],
            "user_count": 2
        }"#;
        let group: UserGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.handle.as_deref(), Some("oncall"));
        assert_eq!(group.users.len(), 2);
    }
}
