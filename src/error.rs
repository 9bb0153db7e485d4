// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while relaying a request.
///
/// Handlers never turn these into HTTP error codes; they are reported
/// in-band inside the JSON envelope the caller already expects.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Server configuration error")]
    MissingConfig,

    /// The upstream answered with a non-2xx status. Displays the body verbatim.
    #[error("{body}")]
    Upstream { status: StatusCode, body: String },

    /// Never carries the request URL, which may hold provider keys.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("Upstream request timed out")]
    Timeout,

    #[error("{0}")]
    BadRequest(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return AppError::Timeout;
        }
        AppError::Transport(err.without_url())
    }
}

impl AppError {
    /// Upstream status, when the failure came from a non-success reply.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Upstream { status, .. } => Some(*status),
            AppError::Transport(e) => e.status(),
            _ => None,
        }
    }
}
