//! API transport error types.

use thiserror::Error;

/// Errors from the WordPress REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP call could not be completed (connectivity, DNS, timeout).
    #[error("request failed: {0}")]
    Network(String),

    /// The remote returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
