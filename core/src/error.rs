//! Error type for the posts API client.
//!
//! Every variant means "the request failed"; the UI renders them as text and
//! never branches on the kind. The split exists for logs and tests.

use std::fmt;

/// Errors returned by the posts client and its hosts.
///
/// `Clone` so a failed result can sit in a reactive signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    Transport(String),

    /// The server answered with an unexpected status.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "network error: {msg}"),
            ApiError::HttpError { status, body } if body.is_empty() => {
                write!(f, "request failed with status code {status}")
            }
            ApiError::HttpError { status, body } => {
                write!(f, "request failed with status code {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
