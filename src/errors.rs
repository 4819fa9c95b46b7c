//! Error types for signoff
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for signoff operations
pub type Result<T> = std::result::Result<T, SignoffError>;

/// Main error type for all signoff operations
#[derive(Debug, Error)]
pub enum SignoffError {
    /// The message carried no attachments to rebuild a workflow from
    #[error("Message has no attachments")]
    MissingAttachments,

    /// The current transition was requested after the last stage completed
    #[error("Workflow already finished ({progress}/{goal})")]
    WorkflowFinished { progress: usize, goal: usize },

    /// An approval record appeared before any transition marker
    #[error("Approval '{approve_key}' appears before any transition")]
    OrphanApproval { approve_key: String },

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl SignoffError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            SignoffError::MissingAttachments => "MISSING_ATTACHMENTS",
            SignoffError::WorkflowFinished { .. } => "WORKFLOW_FINISHED",
            SignoffError::OrphanApproval { .. } => "ORPHAN_APPROVAL",
            SignoffError::InvalidJson(_) => "INVALID_JSON",
            SignoffError::FileNotFound(_) => "FILE_NOT_FOUND",
            SignoffError::ConfigError(_) => "CONFIG_ERROR",
            SignoffError::Io(_) => "IO_ERROR",
            SignoffError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        SignoffError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &SignoffError) -> i32 {
    match error {
        SignoffError::InvalidJson(_) | SignoffError::MissingAttachments => 65, // EX_DATAERR
        SignoffError::FileNotFound(_) => 66,                                   // EX_NOINPUT
        SignoffError::ConfigError(_) => 78,                                    // EX_CONFIG
        _ => 1,
    }
}
