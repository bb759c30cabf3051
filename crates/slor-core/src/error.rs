//! Error types and exit codes for slor
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including a failed save, which is retryable)
//! - 2: Usage error (bad flags/args, operation not valid in the current phase)
//! - 3: Data/store error (missing store, unreadable catalog, unknown SLO)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the slor binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing store, invalid catalog (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for SlorError {
    fn from(err: rusqlite::Error) -> Self {
        SlorError::Database(err.to_string())
    }
}

/// Errors that can occur during slor operations
#[derive(Error, Debug)]
pub enum SlorError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("cannot {operation} while {phase}")]
    InvalidTransition {
        operation: &'static str,
        phase: String,
    },

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("invalid catalog file {path:?}: {reason}")]
    InvalidCatalog { path: PathBuf, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("database error: {0}")]
    Database(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl SlorError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        SlorError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        SlorError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        SlorError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unparsable catalog file
    pub fn invalid_catalog(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        SlorError::InvalidCatalog {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SlorError::UnknownFormat(_)
            | SlorError::UsageError(_)
            | SlorError::InvalidTransition { .. }
            | SlorError::InvalidValue { .. } => ExitCode::Usage,

            SlorError::StoreNotFound { .. }
            | SlorError::InvalidStore { .. }
            | SlorError::InvalidCatalog { .. }
            | SlorError::NotFound { .. } => ExitCode::Data,

            SlorError::Io(_)
            | SlorError::Yaml(_)
            | SlorError::Json(_)
            | SlorError::Toml(_)
            | SlorError::Database(_)
            | SlorError::FailedOperation { .. }
            | SlorError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SlorError::UnknownFormat(_) => "unknown_format",
            SlorError::UsageError(_) => "usage_error",
            SlorError::InvalidTransition { .. } => "invalid_transition",
            SlorError::StoreNotFound { .. } => "store_not_found",
            SlorError::InvalidStore { .. } => "invalid_store",
            SlorError::InvalidCatalog { .. } => "invalid_catalog",
            SlorError::NotFound { .. } => "not_found",
            SlorError::Io(_) => "io_error",
            SlorError::Yaml(_) => "yaml_error",
            SlorError::Json(_) => "json_error",
            SlorError::Toml(_) => "toml_error",
            SlorError::Database(_) => "database_error",
            SlorError::InvalidValue { .. } => "invalid_value",
            SlorError::FailedOperation { .. } => "failed_operation",
            SlorError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for slor operations
pub type Result<T> = std::result::Result<T, SlorError>;
