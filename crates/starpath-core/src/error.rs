//! Error types and exit codes for starpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid index, missing vertex or edge, empty graph, negative cycle)

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
    /// Data error - the graph cannot answer the request (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph construction and search
#[derive(Error, Debug)]
pub enum StarpathError {
    // Graph store errors (exit code 3)
    #[error("invalid vertex index {index} (graph has {len} vertices)")]
    InvalidIndex { index: usize, len: usize },

    #[error("a vertex named '{name}' already exists")]
    DuplicateName { name: String },

    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: usize, to: usize },

    #[error("vertex not found: {name}")]
    VertexNotFound { name: String },

    #[error("graph is unweighted; edge weights cannot be assigned")]
    UnweightedEdgeUpdate,

    #[error("invalid edge weight: {weight}")]
    InvalidWeight { weight: f64 },

    // Search errors (exit code 3)
    #[error("graph is empty")]
    EmptyGraph,

    #[error("no path from {from} to {to}")]
    NoPathFound { from: usize, to: usize },

    #[error("negative-cost cycle detected")]
    NegativeCycleDetected,

    #[error("negative edge weight {weight} on {from} -> {to}; dijkstra requires non-negative weights")]
    NegativeEdgeWeight { from: usize, to: usize, weight: f64 },

    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl StarpathError {
    /// Create an error for an index outside `0..len`
    pub fn invalid_index(index: usize, len: usize) -> Self {
        StarpathError::InvalidIndex { index, len }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        StarpathError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        StarpathError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            StarpathError::UsageError(_) | StarpathError::Unsupported { .. } => ExitCode::Usage,

            StarpathError::InvalidIndex { .. }
            | StarpathError::DuplicateName { .. }
            | StarpathError::EdgeNotFound { .. }
            | StarpathError::VertexNotFound { .. }
            | StarpathError::UnweightedEdgeUpdate
            | StarpathError::InvalidWeight { .. }
            | StarpathError::EmptyGraph
            | StarpathError::NoPathFound { .. }
            | StarpathError::NegativeCycleDetected
            | StarpathError::NegativeEdgeWeight { .. } => ExitCode::Data,

            StarpathError::Io(_)
            | StarpathError::Yaml(_)
            | StarpathError::Json(_)
            | StarpathError::Toml(_)
            | StarpathError::FailedOperationWithTarget { .. }
            | StarpathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            StarpathError::InvalidIndex { .. } => "invalid_index",
            StarpathError::DuplicateName { .. } => "duplicate_name",
            StarpathError::EdgeNotFound { .. } => "edge_not_found",
            StarpathError::VertexNotFound { .. } => "vertex_not_found",
            StarpathError::UnweightedEdgeUpdate => "unweighted_edge_update",
            StarpathError::InvalidWeight { .. } => "invalid_weight",
            StarpathError::EmptyGraph => "empty_graph",
            StarpathError::NoPathFound { .. } => "no_path_found",
            StarpathError::NegativeCycleDetected => "negative_cycle_detected",
            StarpathError::NegativeEdgeWeight { .. } => "negative_edge_weight",
            StarpathError::UsageError(_) => "usage_error",
            StarpathError::Unsupported { .. } => "unsupported",
            StarpathError::Io(_) => "io_error",
            StarpathError::Yaml(_) => "yaml_error",
            StarpathError::Json(_) => "json_error",
            StarpathError::Toml(_) => "toml_error",
            StarpathError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            StarpathError::Other(_) => "other",
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

/// Result type alias for starpath operations
pub type Result<T> = std::result::Result<T, StarpathError>;
