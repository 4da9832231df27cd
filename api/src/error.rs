//! Failure modes of talking to the backend.

use thiserror::Error;

/// Every service call fails in exactly one of two ways: the request never
/// produced a usable response, or the backend answered with an error status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, or a success response whose body was not the JSON
    /// the backend contract promises. The cause is kept as the error source;
    /// the message stays generic.
    #[error("communication error")]
    Communication(#[from] reqwest::Error),

    /// The backend responded with a status of 400 or above.
    #[error("HTTP {0}")]
    Status(u16),
}

impl ApiError {
    /// The HTTP status code, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            ApiError::Communication(_) => None,
        }
    }
}
