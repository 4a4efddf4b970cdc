//! Request types for the user groups service.

use serde::Serialize;

/// Request to list user groups
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListUserGroupsRequest {
    /// Include the member count for each group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_count: Option<bool>,
    /// Include disabled groups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_disabled: Option<bool>,
    /// Include the list of member user IDs for each group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_users: Option<bool>,
}

impl ListUserGroupsRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Include member counts
    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }

    /// Include disabled groups
    pub fn include_disabled(mut self, include: bool) -> Self {
        self.include_disabled = Some(include);
        self
    }

    /// Include member user IDs
    pub fn include_users(mut self, include: bool) -> Self {
        self.include_users = Some(include);
        self
    }
}
