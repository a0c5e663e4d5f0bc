use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IpApiError {
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("ipapi returned error ({status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Failed to decode ipapi response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Failure reported by a lookup client other than [`crate::IpApi`].
    #[error("{0}")]
    Other(String),
}

impl IpApiError {
    /// Classifies a reqwest failure that happened before or while reading
    /// the response.
    pub(crate) fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            IpApiError::Timeout(timeout)
        } else if err.is_builder() {
            IpApiError::Client(err)
        } else {
            IpApiError::Network(err)
        }
    }

    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            IpApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
