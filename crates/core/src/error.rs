//! Error types for Hostel Desk
//!
//! This module provides unified error handling across the whole application:
//! transport failures, client-side validation, server-rejected mutations,
//! and session/configuration problems.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Hostel Desk
#[derive(Debug, Error)]
pub enum DeskError {
    // ========================================================================
    // Validation Errors (caught client-side, before any network call)
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required form field was left empty
    #[error("'{label}' is required")]
    MissingField { label: String },

    /// A field value does not match its expected format
    #[error("'{label}' is not valid: {message}")]
    FieldFormat { label: String, message: String },

    // ========================================================================
    // Transport / API Errors
    // ========================================================================
    /// The request never produced a usable response (DNS, refused, timeout)
    #[error("Network error: {0}")]
    Transport(String),

    /// The server rejected the request and (maybe) said why
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded into the expected shape
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// No record with the given id exists on the server
    #[error("Record not found: {0}")]
    NotFound(String),

    // ========================================================================
    // Session Errors
    // ========================================================================
    /// No session is available, or the stored token was rejected
    #[error("Not signed in: {0}")]
    Auth(String),

    // ========================================================================
    // Configuration / IO Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read a local file (config, session store)
    #[error("Failed to read '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// Failed to write a local file (session store, CSV export)
    #[error("Failed to write '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// A load completed after a newer one already started; its result was dropped
    #[error("Stale response discarded")]
    Stale,

    /// Operation cancelled by user
    #[error("Operation cancelled")]
    Cancelled,

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl DeskError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DeskError::Validation(msg.into())
    }

    /// Create a missing-required-field error
    pub fn missing_field(label: impl Into<String>) -> Self {
        DeskError::MissingField {
            label: label.into(),
        }
    }

    /// Create a field-format error
    pub fn field_format(label: impl Into<String>, msg: impl Into<String>) -> Self {
        DeskError::FieldFormat {
            label: label.into(),
            message: msg.into(),
        }
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        DeskError::Transport(msg.into())
    }

    /// Create an API error from a status code and an optional server message
    pub fn api(status: u16, message: Option<String>) -> Self {
        DeskError::Api {
            status,
            message: message.unwrap_or_else(|| "Request failed".to_string()),
        }
    }

    /// Create an auth error
    pub fn auth(msg: impl Into<String>) -> Self {
        DeskError::Auth(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DeskError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        DeskError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a client-side validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DeskError::Validation(_)
                | DeskError::MissingField { .. }
                | DeskError::FieldFormat { .. }
        )
    }

    /// Check if this error came back from the server
    pub fn is_api(&self) -> bool {
        matches!(self, DeskError::Api { .. } | DeskError::NotFound(_))
    }

    /// Check if this error is a transport-level failure
    pub fn is_transport(&self) -> bool {
        matches!(self, DeskError::Transport(_) | DeskError::Decode(_))
    }

    /// Check if this error means the session is missing or rejected
    pub fn is_auth(&self) -> bool {
        matches!(self, DeskError::Auth(_)) || matches!(self, DeskError::Api { status: 401, .. })
    }

    /// The string shown to the user in an alert or status bar.
    ///
    /// Server messages pass through verbatim; everything else falls back to
    /// a generic string, matching the uniform "notify and let the user retry"
    /// policy.
    pub fn user_message(&self) -> String {
        match self {
            DeskError::Api { message, .. } => message.clone(),
            DeskError::MissingField { .. }
            | DeskError::FieldFormat { .. }
            | DeskError::Validation(_) => self.to_string(),
            DeskError::Auth(_) => "Session expired. Please log in again.".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

/// Result type alias using DeskError
pub type DeskResult<T> = Result<T, DeskError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> DeskResult<T>;
}

impl<T, E: Into<DeskError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> DeskResult<T> {
        self.map_err(|e| {
            let err: DeskError = e.into();
            DeskError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DeskError::validation("Name is required");
        assert!(err.is_validation());
        assert!(!err.is_api());
        assert_eq!(err.to_string(), "Validation error: Name is required");
    }

    #[test]
    fn test_missing_field_error() {
        let err = DeskError::missing_field("Bed No");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "'Bed No' is required");
        assert_eq!(err.user_message(), "'Bed No' is required");
    }

    #[test]
    fn test_api_error_message_passthrough() {
        let err = DeskError::api(409, Some("Record exists for this period.".to_string()));
        assert!(err.is_api());
        assert_eq!(err.user_message(), "Record exists for this period.");
    }

    #[test]
    fn test_api_error_generic_fallback() {
        let err = DeskError::api(500, None);
        assert_eq!(err.to_string(), "Request failed");
    }

    #[test]
    fn test_transport_error_is_generic_to_user() {
        let err = DeskError::transport("connection refused");
        assert!(err.is_transport());
        assert_eq!(
            err.user_message(),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn test_unauthorized_counts_as_auth() {
        let err = DeskError::api(401, Some("jwt expired".to_string()));
        assert!(err.is_auth());
        assert_eq!(err.user_message(), "jwt expired");

        let err = DeskError::auth("no stored session");
        assert!(err.is_auth());
        assert_eq!(err.user_message(), "Session expired. Please log in again.");
    }

    #[test]
    fn test_error_with_context() {
        let err = DeskError::with_context("Saving session", "Permission denied");
        assert_eq!(err.to_string(), "Saving session: Permission denied");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DeskError = io_err.into();
        assert!(matches!(err, DeskError::Io(_)));
    }
}
