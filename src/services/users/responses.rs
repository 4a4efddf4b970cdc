//! Response types for the users service.

use crate::types::{ResponseMetadata, User};
use serde::Deserialize;

/// Response from users.list
#[derive(Debug, Clone, Deserialize)]
pub struct ListUsersResponse {
    /// Success indicator
    pub ok: bool,
    /// Users in the workspace
    #[serde(default)]
    pub members: Vec<User>,
    /// Cache timestamp
    #[serde(default)]
    pub cache_ts: Option<i64>,
    /// Response metadata for pagination
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

impl ListUsersResponse {
    /// Get the next cursor if available
    pub fn next_cursor(&self) -> Option<&str> {
        self.response_metadata
            .as_ref()
            .and_then(|m| m.next_cursor.as_deref())
            .filter(|c| !c.is_empty())
    }
}
