use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Upstream returned HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("Failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Upstream HTTP status, when the failure was a non-2xx response
    pub fn upstream_status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
