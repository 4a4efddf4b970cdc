//! Request types for the files service.

use crate::types::{Cursor, Timestamp};
use serde::Serialize;

/// Request to list files
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListFilesRequest {
    /// Only include files created after this timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_from: Option<Timestamp>,
    /// Only include files created before this timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_to: Option<Timestamp>,
    /// Page number of results to fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Number of items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl ListFilesRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower bound on file creation time
    pub fn ts_from(mut self, ts: impl Into<Timestamp>) -> Self {
        self.ts_from = Some(ts.into());
        self
    }

    /// Upper bound on file creation time
    pub fn ts_to(mut self, ts: impl Into<Timestamp>) -> Self {
        self.ts_to = Some(ts.into());
        self
    }

    /// Page of results to fetch
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Items per page
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

/// Request to list remote files
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListRemoteFilesRequest {
    /// Only include files created after this timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_from: Option<Timestamp>,
    /// Only include files created before this timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_to: Option<Timestamp>,
    /// Cursor for pagination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
    /// Number of results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListRemoteFilesRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower bound on file creation time
    pub fn ts_from(mut self, ts: impl Into<Timestamp>) -> Self {
        self.ts_from = Some(ts.into());
        self
    }

    /// Upper bound on file creation time
    pub fn ts_to(mut self, ts: impl Into<Timestamp>) -> Self {
        self.ts_to = Some(ts.into());
        self
    }

    /// Set pagination cursor
    pub fn cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set result limit
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}
