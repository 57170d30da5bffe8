//! Error types for the Hatch client

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Hatch client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid request, rejected before it was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The caller cancelled the request
    #[error("Request cancelled")]
    Cancelled,
}

/// Error body returned by the platform API
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseError {
    pub message: String,
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Build an API error from a raw response body
    ///
    /// Uses the `message` field of a JSON error body when there is one,
    /// otherwise the body text itself.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ResponseError>(body) {
            Ok(parsed) => parsed.message,
            Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => body.to_string(),
        };
        Self::api_error(status, message)
    }

    /// Message suitable for showing to a user
    pub fn message(&self) -> String {
        match self {
            Self::ApiError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }

    /// Check if the request was cancelled by the caller
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_uses_json_message() {
        let err = ClientError::from_body(404, r#"{"message":"Project not found"}"#);
        assert_eq!(err.message(), "Project not found");
        assert!(err.is_not_found());
        assert!(err.is_client_error());
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_from_body_falls_back_to_text() {
        let err = ClientError::from_body(502, "Bad Gateway");
        assert_eq!(err.message(), "Bad Gateway");
        assert!(err.is_server_error());

        let err = ClientError::from_body(500, "");
        assert_eq!(err.message(), "Unknown error");
    }

    #[test]
    fn test_non_api_errors() {
        let err = ClientError::InvalidRequest("Project ref is required".to_string());
        assert_eq!(err.message(), "Invalid request: Project ref is required");
        assert!(!err.is_client_error());
        assert!(ClientError::Cancelled.is_cancelled());
    }
}
