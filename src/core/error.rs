use thiserror::Error;

/// Failures crossing the transport boundary.
///
/// Blank input is not represented here: callers short-circuit before any
/// request is built and treat it as a no-op.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Non-2xx response. `message` is the backend `detail` when it sent one.
    #[error("{message} (HTTP {status})")]
    Transport { status: u16, message: String },

    /// No stored credential, or the backend rejected it (401/403).
    #[error("Authentication required")]
    AuthRequired,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Map a failed response to an error, preferring the backend's `detail`
    /// string over the caller's fallback.
    pub fn from_status(status: u16, body: &str, fallback: &str) -> Self {
        if status == 401 || status == 403 {
            return ClientError::AuthRequired;
        }
        let message = detail_from_body(body).unwrap_or_else(|| fallback.to_string());
        ClientError::Transport { status, message }
    }

    pub fn is_auth_required(&self) -> bool {
        matches!(self, ClientError::AuthRequired)
    }

    /// Text suitable for an inline banner or a chat bubble.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport { message, .. } => message.clone(),
            ClientError::AuthRequired => "Your session has expired. Please sign in again".to_string(),
            ClientError::Network(_) => "Could not reach the server".to_string(),
            ClientError::Decode(_) => "The server sent an unexpected response".to_string(),
        }
    }
}

// FastAPI validation failures carry a list under `detail`; only plain strings are shown.
fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(|detail| detail.as_str())
        .map(str::trim)
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}
