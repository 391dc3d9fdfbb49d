//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid config values)
//! - 3: Data error (unknown vertex, full graph, recursion too deep)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing vertex, full graph, recursion too deep (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphwalk operations
#[derive(Error, Debug)]
pub enum GraphwalkError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs, dfs-recursive, or dfs-iterative)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("starting vertex not found: {name}")]
    StartNotFound { name: String },

    #[error("vertex not found: {name}")]
    VertexNotFound { name: String },

    #[error("graph is full ({capacity} vertices), cannot add vertex {name}")]
    CapacityExceeded { name: String, capacity: usize },

    #[error("recursion depth limit of {limit} exceeded")]
    DepthLimitExceeded { limit: usize },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperation {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl GraphwalkError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphwalkError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphwalkError::FailedOperation {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphwalkError::UnknownFormat(_)
            | GraphwalkError::UnknownAlgorithm(_)
            | GraphwalkError::UsageError(_)
            | GraphwalkError::InvalidValue { .. } => ExitCode::Usage,

            GraphwalkError::StartNotFound { .. }
            | GraphwalkError::VertexNotFound { .. }
            | GraphwalkError::CapacityExceeded { .. }
            | GraphwalkError::DepthLimitExceeded { .. } => ExitCode::Data,

            GraphwalkError::Json(_)
            | GraphwalkError::Toml(_)
            | GraphwalkError::FailedOperation { .. }
            | GraphwalkError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphwalkError::UnknownFormat(_) => "unknown_format",
            GraphwalkError::UnknownAlgorithm(_) => "unknown_algorithm",
            GraphwalkError::UsageError(_) => "usage_error",
            GraphwalkError::InvalidValue { .. } => "invalid_value",
            GraphwalkError::StartNotFound { .. } => "start_not_found",
            GraphwalkError::VertexNotFound { .. } => "vertex_not_found",
            GraphwalkError::CapacityExceeded { .. } => "capacity_exceeded",
            GraphwalkError::DepthLimitExceeded { .. } => "depth_limit_exceeded",
            GraphwalkError::Json(_) => "json_error",
            GraphwalkError::Toml(_) => "toml_error",
            GraphwalkError::FailedOperation { .. } => "failed_operation",
            GraphwalkError::Other(_) => "other",
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

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphwalkError>;
