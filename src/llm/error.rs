//! Completion client error classification

use thiserror::Error;

/// Errors surfaced by a completion call
///
/// Every failure aborts the run; the client never retries internally.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The endpoint could not be reached at all (DNS, connect, timeout).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider rejected the API credential. The credential value is
    /// never included in the message.
    #[error("authentication failed (HTTP {status}): the provider rejected the API credential")]
    Auth { status: u16 },

    /// Structured error from the provider (rate limit, invalid request, ...).
    #[error("provider error {status}: {message}")]
    Provider { status: u16, message: String },

    /// The response body could not be parsed into the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The provider returned zero choices, or a choice without text.
    #[error("provider returned no completion")]
    NoCompletion,
}

impl LlmError {
    /// Classify an unsuccessful HTTP status with its error body.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => LlmError::Auth { status },
            _ => LlmError::Provider { status, message },
        }
    }

    /// Check if this is a credential rejection
    pub fn is_auth(&self) -> bool {
        matches!(self, LlmError::Auth { .. })
    }
}
