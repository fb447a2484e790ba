//! Error types for ndis-directory

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ndis-directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Malformed input rejected before persistence
    #[error("Validation error: {0}")]
    Validation(String),

    /// Persistence backend unreachable or failing
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Listing required by the caller does not exist
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Unsupported schema version
    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(u32),
}

/// Coarse classification used at the request/response boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller must resubmit corrected input
    Validation,
    /// Caller required an entity that is absent
    NotFound,
    /// Backend failure; retry policy belongs to the caller
    Unavailable,
    /// Bad local configuration
    Config,
}

impl DirectoryError {
    /// Wrap a storage-level failure as `Unavailable`
    pub fn unavailable(context: impl std::fmt::Display, err: impl std::fmt::Display) -> Self {
        DirectoryError::Unavailable(format!("{}: {}", context, err))
    }

    /// Classify the error
    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::Validation(_) => ErrorCategory::Validation,
            DirectoryError::ServiceNotFound(_) => ErrorCategory::NotFound,
            DirectoryError::Unavailable(_)
            | DirectoryError::Io(_)
            | DirectoryError::UnsupportedSchemaVersion(_) => ErrorCategory::Unavailable,
            DirectoryError::Config(_) | DirectoryError::FileNotFound(_) => ErrorCategory::Config,
        }
    }

    /// HTTP status a thin route layer should answer with
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Validation => 400,
            ErrorCategory::NotFound => 404,
            ErrorCategory::Unavailable | ErrorCategory::Config => 500,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }

    pub fn is_unavailable(&self) -> bool {
        self.category() == ErrorCategory::Unavailable
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }
}

/// Result type alias for ndis-directory
pub type Result<T> = std::result::Result<T, DirectoryError>;
