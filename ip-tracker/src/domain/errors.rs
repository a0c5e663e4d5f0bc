use axum::http::StatusCode;
use ipapi_rs::IpApiError;
use thiserror::Error;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch IP data";

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Please enter an IP address")]
    EmptyInput,
    #[error("Please enter a valid IP address")]
    InvalidFormat,
    #[error(transparent)]
    Client(#[from] IpApiError),
    #[error("Lookup superseded by a newer request")]
    Superseded,
}

impl LookupError {
    /// Text shown to the user in the `Error` state.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FETCH_FAILED_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// Input problems are caught locally and never reach the network.
    pub fn is_local(&self) -> bool {
        matches!(self, LookupError::EmptyInput | LookupError::InvalidFormat)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            LookupError::EmptyInput | LookupError::InvalidFormat => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            LookupError::Client(_) => StatusCode::BAD_GATEWAY,
            LookupError::Superseded => StatusCode::CONFLICT,
        }
    }
}
