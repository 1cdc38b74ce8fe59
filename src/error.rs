//! Request Errors

use thiserror::Error;

/// Why a backend request did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never reached the server, or no response came back
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with anything other than 200
    #[error("server responded with status {0}")]
    Status(u16),

    /// A 200 response whose body could not be read
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else if let Some(status) = error.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Network(error.to_string())
        }
    }
}
