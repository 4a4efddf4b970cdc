//! Team/workspace types for the Slack API.

use super::TeamId;
use serde::{Deserialize, Serialize};

/// Slack team/workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Team ID
    pub id: TeamId,
    /// Team name
    #[serde(default)]
    pub name: Option<String>,
    /// Team domain
    #[serde(default)]
    pub domain: Option<String>,
    /// Email domain restriction
    #[serde(default)]
    pub email_domain: Option<String>,
    /// Enterprise Grid org ID
    #[serde(default)]
    pub enterprise_id: Option<String>,
    /// Enterprise Grid org name
    #[serde(default)]
    pub enterprise_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_deserialize() {
        let json = r#"{
            "id": "T024BE7LD",
            "name": "Acme",
            "domain": "acme",
            "email_domain": "acme.example"
        }"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.id.as_str(), "T024BE7LD");
        assert_eq!(team.domain.as_deref(), Some("acme"));
    }
}
