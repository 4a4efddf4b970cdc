//! Request types for the team service.

use crate::types::TeamId;
use serde::Serialize;

/// Request for team info
#[derive(Debug, Clone, Default, Serialize)]
pub struct TeamInfoRequest {
    /// Team to query; defaults to the token's team
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamId>,
}

impl TeamInfoRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Query a specific team
    pub fn team(mut self, team: impl Into<TeamId>) -> Self {
        self.team = Some(team.into());
        self
    }
}
