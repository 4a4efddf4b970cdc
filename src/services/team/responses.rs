//! Response types for the team service.

use crate::types::Team;
use serde::Deserialize;

/// Response from team.info
#[derive(Debug, Clone, Deserialize)]
pub struct TeamInfoResponse {
    /// Success indicator
    pub ok: bool,
    /// Team details
    pub team: Team,
}
