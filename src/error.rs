//! API Errors

use thiserror::Error;

use crate::api::Method;

/// Failure talking to the (mock) API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{method} {path}: API endpoint not found")]
    NotFound { method: Method, path: String },

    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
}
