//! Error handling for the college portal client
//!
//! This module defines the main error type used throughout the crate
//! and the classification helpers callers use to decide how to surface it.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Main error type for the portal client
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Attachment rejected: {0}")]
    Attachment(#[from] AttachmentError),

    #[error("Backend returned HTTP {status}{}", format_detail(.detail))]
    Api { status: u16, detail: Option<String> },

    #[error("Session expired or token rejected")]
    Unauthorized,

    #[error("No admin session; log in first")]
    NotAuthenticated,

    #[error("Request cancelled")]
    Cancelled,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Client-side attachment checks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttachmentError {
    #[error("File size must be less than {limit_mb}MB")]
    TooLarge { size: u64, limit: u64, limit_mb: u64 },

    #[error("{hint}")]
    UnsupportedType { content_type: String, hint: &'static str },
}

fn format_detail(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

/// Result type alias for portal operations
pub type Result<T> = std::result::Result<T, PortalError>;

impl From<ValidationErrors> for PortalError {
    fn from(errors: ValidationErrors) -> Self {
        PortalError::Validation(errors)
    }
}

impl PortalError {
    /// Check if the error is recoverable by resubmitting the same action later
    pub fn is_recoverable(&self) -> bool {
        match self {
            PortalError::Http(_) => true,
            PortalError::Serialization(_) => false,
            PortalError::Io(_) => true,
            PortalError::UrlParse(_) => false,
            PortalError::Config(_) => false,
            PortalError::Validation(_) => false,
            PortalError::Attachment(_) => false,
            PortalError::Api { status, .. } => *status >= 500,
            PortalError::Unauthorized => false,
            PortalError::NotAuthenticated => false,
            PortalError::Cancelled => true,
            PortalError::Storage(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortalError::Config(_) => ErrorSeverity::Critical,
            PortalError::UrlParse(_) => ErrorSeverity::Critical,
            PortalError::Unauthorized => ErrorSeverity::Warning,
            PortalError::NotAuthenticated => ErrorSeverity::Warning,
            PortalError::Validation(_) => ErrorSeverity::Info,
            PortalError::Attachment(_) => ErrorSeverity::Info,
            PortalError::Cancelled => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Whether the backend rejected the bearer token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, PortalError::Unauthorized)
    }

    /// Text to show the user: the backend's own message when it sent one,
    /// the first failing field for validation errors, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            PortalError::Api { detail: Some(detail), .. } => detail.clone(),
            PortalError::Validation(errors) => errors
                .first()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| fallback.to_string()),
            PortalError::Attachment(e) => e.to_string(),
            _ => fallback.to_string(),
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
