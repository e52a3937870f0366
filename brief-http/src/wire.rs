//! Response envelopes as the backend sends them.

use brief_core::{Project, UserProfile};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    #[serde(default)]
    pub user: UserProfile,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateProjectResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub project: Option<Project>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentProjectResponse {
    #[serde(default)]
    pub project: Option<Project>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SuccessFlag {
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtifactResponse {
    #[serde(default)]
    pub project: Option<Project>,
    #[serde(default)]
    pub timeline_content: Option<String>,
    #[serde(default)]
    pub narrative_content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Pulls a human-readable message out of an error response body.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_reads_message_then_error() {
        assert_eq!(
            error_message(r#"{"message":"Project not found"}"#).as_deref(),
            Some("Project not found")
        );
        assert_eq!(error_message(r#"{"error":"bad"}"#).as_deref(), Some("bad"));
        assert_eq!(error_message(r#"{"message":""}"#), None);
        assert_eq!(error_message("<html>500</html>"), None);
    }
}
