// ABOUTME: Error kinds for a single chat request.
// ABOUTME: All of them surface to the user as one localized "request failed" message.

use thiserror::Error;

/// Why a chat request failed.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Connection, TLS, timeout, or body read failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body could not be parsed as JSON.
    #[error("response body is not JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The body is JSON but has no string `response` field.
    #[error("unexpected response shape: {0}")]
    MalformedResponse(String),
}

impl ChatError {
    /// Short machine-friendly name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ChatError::Transport(_) => "transport",
            ChatError::InvalidJson(_) => "invalid_json",
            ChatError::MalformedResponse(_) => "malformed_response",
        }
    }
}
