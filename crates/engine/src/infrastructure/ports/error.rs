//! Error types for port operations.

/// Failures of a single upstream dispatch.
///
/// Upstream HTTP error statuses are not represented here: a 4xx/5xx answer is
/// still a delivered payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The outbound request could not be built (bad URL, bad header value).
    #[error("error creating request: {0}")]
    RequestConstruction(String),

    /// Connecting, sending, or the transport-level timeout failed.
    #[error("error making request: {0}")]
    Transport(String),

    /// The response arrived but its body could not be read.
    #[error("error reading response body: {0}")]
    BodyRead(String),

    /// The caller stopped waiting before the upstream call finished.
    #[error("Request timed out")]
    DeadlineExceeded,
}

impl DispatchError {
    pub fn request_construction(message: impl ToString) -> Self {
        Self::RequestConstruction(message.to_string())
    }

    pub fn transport(message: impl ToString) -> Self {
        Self::Transport(message.to_string())
    }

    pub fn body_read(message: impl ToString) -> Self {
        Self::BodyRead(message.to_string())
    }

    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self, Self::DeadlineExceeded)
    }
}
