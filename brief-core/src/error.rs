use thiserror::Error;

/// Failures surfaced by a [`crate::BackendApi`] call or by client-side
/// validation before a call is made.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("network error: {0}")]
    Transport(String),

    /// HTTP 401/403: bad credentials or an expired session.
    #[error("not authenticated")]
    Unauthorized { message: Option<String> },

    #[error("{0}")]
    Validation(String),

    #[error("server error ({status})")]
    Server { status: u16, message: Option<String> },

    /// 2xx response whose payload reported `success: false`.
    #[error("request rejected by server")]
    Rejected,

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Message suitable for an inline alert. Backend-provided messages win,
    /// validation messages are shown as-is, everything else gets `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Unauthorized { message: Some(msg) } | Self::Server { message: Some(msg), .. }
                if !msg.trim().is_empty() =>
            {
                msg.clone()
            }
            _ => fallback.to_string(),
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
