//! Error types for the mimix client toolkit.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, server-reported, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for mimix operations.
///
/// This error type covers all possible failure modes in the toolkit,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (rejected credentials, expired token).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Errors reported by the API (business errors, unexpected statuses).
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (invalid URL, id, or date format).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credentials rejected by the login endpoint. Carries the server's
    /// message verbatim so it can be shown inline.
    #[error("{message}")]
    InvalidCredentials { message: String },

    /// Token rejected on an authenticated call. Fatal to the session:
    /// the caller must clear stored credentials.
    #[error("session expired or invalid, log in again")]
    Unauthorized,

    /// Password and confirmation did not match. Caught locally before
    /// any request is sent.
    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Server-reported errors from API responses.
///
/// The backend returns error bodies as `{"error": "..."}`. The message is
/// surfaced verbatim when present; callers fall back to a generic message
/// when it is absent.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server's `error` field.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Check if this response means the session token was rejected.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// The server message, or a generic fallback.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid record id.
    #[error("invalid record id: {reason}")]
    RecordId { reason: String },

    /// A date that is neither dd/mm/yyyy nor a recognized ISO form.
    #[error("invalid date '{value}', use dd/mm/yyyy")]
    Date { value: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status_and_message() {
        let err = ApiError::new(409, Some("username already exists".to_string()));
        assert_eq!(err.to_string(), "HTTP 409: username already exists");
    }

    #[test]
    fn api_error_display_without_message() {
        let err = ApiError::new(503, None);
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[test]
    fn api_error_unauthorized_detection() {
        assert!(ApiError::new(401, None).is_unauthorized());
        assert!(!ApiError::new(403, None).is_unauthorized());
    }

    #[test]
    fn api_error_message_fallback() {
        let err = ApiError::new(500, None);
        assert_eq!(err.message_or("Failed to delete object"), "Failed to delete object");

        let err = ApiError::new(404, Some("obj not found".to_string()));
        assert_eq!(err.message_or("Failed to delete object"), "obj not found");
    }
}
