//! Response types for the user groups service.

use crate::types::UserGroup;
use serde::Deserialize;

/// Response from usergroups.list
#[derive(Debug, Clone, Deserialize)]
pub struct ListUserGroupsResponse {
    /// Success indicator
    pub ok: bool,
    /// User groups in the workspace
    #[serde(default)]
    pub usergroups: Vec<UserGroup>,
}
