//! Response types for the files service.

use crate::types::{File, Paging, ResponseMetadata};
use serde::Deserialize;

/// Response from files.list
#[derive(Debug, Clone, Deserialize)]
pub struct ListFilesResponse {
    /// Success indicator
    pub ok: bool,
    /// Files matching the query
    #[serde(default)]
    pub files: Vec<File>,
    /// Page-based pagination info
    #[serde(default)]
    pub paging: Option<Paging>,
}

impl ListFilesResponse {
    /// Whether there are more pages after the current one
    pub fn has_more_pages(&self) -> bool {
        self.paging
            .as_ref()
            .map(|p| p.page < p.pages)
            .unwrap_or(false)
    }
}

/// Response from files.remote.list
#[derive(Debug, Clone, Deserialize)]
pub struct ListRemoteFilesResponse {
    /// Success indicator
    pub ok: bool,
    /// Remote files matching the query
    #[serde(default)]
    pub files: Vec<File>,
    /// Response metadata for pagination
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

impl ListRemoteFilesResponse {
    /// Get the next cursor if available
    pub fn next_cursor(&self) -> Option<&str> {
        self.response_metadata
            .as_ref()
            .and_then(|m| m.next_cursor.as_deref())
            .filter(|c| !c.is_empty())
    }
}
