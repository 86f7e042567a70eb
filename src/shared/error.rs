//! Shared Error Types
//!
//! This module defines the error taxonomy for talking to the forum backend.
//! Every transport failure surfaced to callers is one of these variants, so
//! the UI can distinguish "server down" from "bad credentials" from "the
//! server rejected the request with a reason".
//!
//! # Error Categories
//!
//! - `Unreachable` - the server could not be contacted (connection refused,
//!   DNS failure, timeout)
//! - `Unauthorized` - the server rejected the credentials (HTTP 401)
//! - `Api` - any other non-success response, with the machine-readable
//!   `detail` message when the body carried one
//! - `Serialization` - JSON serialization/deserialization failures
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread
//! boundaries.
use thiserror::Error;

/// Errors produced by calls against the forum backend.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// The server could not be reached at all.
    #[error("server unreachable: {message}")]
    Unreachable {
        /// Human-readable error message
        message: String,
    },

    /// The server rejected the credentials (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,

    /// The server answered with a non-success status.
    #[error("request failed ({status}): {detail}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error detail from the response body, or the status text
        detail: String,
    },

    /// JSON serialization or deserialization error.
    #[error("serialization error: {message}")]
    Serialization {
        /// Human-readable error message
        message: String,
    },
}

impl ApiError {
    /// Create a new unreachable-server error
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable {
            message: message.into(),
        }
    }

    /// Create a new API error from a status code and detail message
    pub fn api(status: u16, detail: impl Into<String>) -> Self {
        Self::Api {
            status,
            detail: detail.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// The `detail` message attached by the server, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if status.as_u16() == 401 => Self::Unauthorized,
            Some(status) => Self::api(status.as_u16(), err.to_string()),
            None => Self::unreachable(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_error() {
        let error = ApiError::unreachable("connection refused");
        match error {
            ApiError::Unreachable { message } => {
                assert_eq!(message, "connection refused");
            }
            _ => panic!("Expected Unreachable"),
        }
    }

    #[test]
    fn test_api_error() {
        let error = ApiError::api(400, "You have already liked this post");
        match error {
            ApiError::Api { status, detail } => {
                assert_eq!(status, 400);
                assert_eq!(detail, "You have already liked this post");
            }
            _ => panic!("Expected Api"),
        }
    }

    #[test]
    fn test_error_display() {
        let error = ApiError::api(409, "Username already registered");
        let display = format!("{}", error);
        assert!(display.contains("409"));
        assert!(display.contains("Username already registered"));
    }

    #[test]
    fn test_detail_only_for_api_errors() {
        assert_eq!(ApiError::api(400, "taken").detail(), Some("taken"));
        assert_eq!(ApiError::api(500, "").detail(), None);
        assert_eq!(ApiError::Unauthorized.detail(), None);
        assert_eq!(ApiError::unreachable("down").detail(), None);
    }

    #[test]
    fn test_from_serde_error() {
        let invalid_json = "{ invalid json }";
        let result: Result<serde_json::Value, _> = serde_json::from_str(invalid_json);
        let serde_error = result.unwrap_err();
        let api_error: ApiError = serde_error.into();

        match api_error {
            ApiError::Serialization { .. } => {}
            _ => panic!("Expected Serialization from serde error"),
        }
    }

    #[test]
    fn test_error_clone() {
        let error = ApiError::api(404, "Post not found");
        let cloned = error.clone();
        match (error, cloned) {
            (
                ApiError::Api { status: s1, detail: d1 },
                ApiError::Api { status: s2, detail: d2 },
            ) => {
                assert_eq!(s1, s2);
                assert_eq!(d1, d2);
            }
            _ => panic!("Expected Api"),
        }
    }
}
