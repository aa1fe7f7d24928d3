//! Error handling for HubDesk
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the HubDesk application
#[derive(Error, Debug)]
pub enum HubDeskError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend request timed out")]
    Timeout,

    #[error("Backend unreachable: {0}")]
    ServiceUnavailable(String),

    #[error("Backend returned HTTP {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for HubDesk operations
pub type Result<T> = std::result::Result<T, HubDeskError>;

impl HubDeskError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            HubDeskError::Http(_) => true,
            HubDeskError::Timeout => true,
            HubDeskError::ServiceUnavailable(_) => true,
            HubDeskError::Backend { .. } => true,
            HubDeskError::Rejected(_) => false,
            HubDeskError::Serialization(_) => false,
            HubDeskError::Io(_) => true,
            HubDeskError::UrlParse(_) => false,
            HubDeskError::Config(_) => false,
            HubDeskError::Authentication(_) => false,
            HubDeskError::PermissionDenied(_) => false,
            HubDeskError::NotFound { .. } => false,
            HubDeskError::InvalidStateTransition { .. } => false,
            HubDeskError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HubDeskError::Config(_) => ErrorSeverity::Critical,
            HubDeskError::Authentication(_) => ErrorSeverity::Warning,
            HubDeskError::PermissionDenied(_) => ErrorSeverity::Warning,
            HubDeskError::InvalidInput(_) => ErrorSeverity::Info,
            HubDeskError::Rejected(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// Collapse the error into the string shown in a transient notice.
    ///
    /// The backend distinguishes "success flag false" from transport
    /// failures; both end up as a display string at the screen edge.
    pub fn display_text(&self) -> String {
        match self {
            HubDeskError::Rejected(message) => message.clone(),
            HubDeskError::Timeout => "The server took too long to respond".to_string(),
            HubDeskError::ServiceUnavailable(_) => "The server is unreachable".to_string(),
            other => other.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display_text_is_backend_message() {
        let err = HubDeskError::Rejected("Email already registered".to_string());
        assert_eq!(err.display_text(), "Email already registered");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(HubDeskError::Config("missing".to_string()).severity(), ErrorSeverity::Critical);
        assert_eq!(HubDeskError::InvalidInput("bad".to_string()).severity(), ErrorSeverity::Info);
        assert_eq!(
            HubDeskError::Backend { status: 500, message: "boom".to_string() }.severity(),
            ErrorSeverity::Error
        );
    }
}
