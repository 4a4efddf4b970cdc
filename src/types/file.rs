//! File types for the Slack API.

use super::{ChannelId, FileId, UserId};
use serde::{Deserialize, Serialize};

/// Slack file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    /// File ID
    pub id: FileId,
    /// Creation timestamp (Unix)
    #[serde(default)]
    pub created: Option<i64>,
    /// Last update timestamp (Unix)
    #[serde(default)]
    pub timestamp: Option<i64>,
    /// File name
    #[serde(default)]
    pub name: Option<String>,
    /// Title
    #[serde(default)]
    pub title: Option<String>,
    /// MIME type
    #[serde(default)]
    pub mimetype: Option<String>,
    /// File type (e.g. "png")
    #[serde(default)]
    pub filetype: Option<String>,
    /// Uploading user
    #[serde(default)]
    pub user: Option<UserId>,
    /// Size in bytes
    #[serde(default)]
    pub size: Option<i64>,
    /// Whether this is an external (remote) file
    #[serde(default)]
    pub is_external: bool,
    /// External type for remote files
    #[serde(default)]
    pub external_type: Option<String>,
    /// External URL for remote files
    #[serde(default)]
    pub url_private: Option<String>,
    /// Permalink
    #[serde(default)]
    pub permalink: Option<String>,
    /// Channels the file is shared in
    #[serde(default)]
    pub channels: Vec<ChannelId>,
}

/// Paging block used by the files.list family
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging {
    /// Results per page
    #[serde(default)]
    pub count: i32,
    /// Total results
    #[serde(default)]
    pub total: i32,
    /// Current page (1-based)
    #[serde(default)]
    pub page: i32,
    /// Total pages
    #[serde(default)]
    pub pages: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_deserialize() {
        let json = r#"{
            "id": "F12345",
            "name": "report.pdf",
            "mimetype": "application/pdf",
            "user": "U123",
            "size": 1024,
            "channels": ["C1", "C2"]
        }"#;
        let file: File = serde_json::from_str(json).unwrap();
        assert_eq!(file.id.as_str(), "F12345");
        assert_eq!(file.channels.len(), 2);
        assert!(!file.is_external);
    }
}
