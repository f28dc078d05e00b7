//! Error types for the courrier client.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Collaborator failures are normalized once, here, into variants
//! carrying a human-readable cause; local form/file validation has its own
//! type and never reaches the remote service.

use thiserror::Error;

/// Errors surfaced by the remote record store.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Server unreachable (connection refused, DNS failure, ...)
    #[error("Cannot reach the server")]
    TransportUnavailable,

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Requested record absent
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rejected by remote validation
    #[error("Invalid data: {0}")]
    Invalid(String),

    /// Any other non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a JSON response
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP-level failure that fits no other variant
    #[error("HTTP request failed: {0}")]
    Http(String),
}

impl ApiError {
    /// Whether this is a missing-record failure.
    ///
    /// Detail/edit loads use this to decide to navigate back to the list
    /// view instead of showing an error page.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    /// The single normalized message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::TransportUnavailable => "Cannot reach the server".to_string(),
            ApiError::Timeout => "The server took too long to respond".to_string(),
            ApiError::NotFound(what) => format!("Not found: {what}"),
            ApiError::Invalid(message) => message.clone(),
            ApiError::Api { status: 500, .. } => "Internal server error".to_string(),
            ApiError::Api { status, message } => format!("Error {status}: {message}"),
            ApiError::Json(_) => "The server returned an unreadable response".to_string(),
            ApiError::Http(message) => message.clone(),
        }
    }
}

/// Local validation failures (forms, filters, attachments).
///
/// Raised synchronously, before any collaborator call.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty
    #[error("{field} is required")]
    Required { field: &'static str },

    /// A field is shorter than its minimum length
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    /// Attachment has the wrong media type
    #[error("Only PDF files are accepted")]
    UnsupportedFileType,

    /// Attachment exceeds the size limit
    #[error("The file must not exceed {max_bytes} bytes")]
    FileTooLarge { max_bytes: u64 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
