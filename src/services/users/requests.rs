//! Request types for the users service.

use crate::types::Cursor;
use serde::Serialize;

/// Request to list users
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListUsersRequest {
    /// Number of results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// Cursor for pagination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
}

impl ListUsersRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set result limit
    pub fn limit(mut self, n: i32) -> Self {
        self.limit = Some(n);
        self
    }

    /// Set pagination cursor
    pub fn cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}
