//! Engine error type for embedders.
//!
//! Use [`EngineError`] when you want to map engine and Polars errors to a
//! single type (e.g. for the CLI) without depending on Polars error types.
//!
//! Note: `From<PolarsError>` for `EngineError` lives in the root crate, which
//! has the Polars dependency.

use std::fmt;
use std::io;

/// Unified error type for spark-smoke operations.
#[derive(Debug)]
pub enum EngineError {
    /// User-facing error (invalid input, unsupported operation, stopped session).
    User(String),
    /// Internal / compute error.
    Internal(String),
    /// I/O error (permission, invalid read, etc.).
    Io(String),
    /// Resource not found (column, file).
    NotFound(String),
    /// Other / unclassified.
    Other(String),
}

impl EngineError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::NotFound(_))
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::User(s) => write!(f, "user error: {s}"),
            EngineError::Internal(s) => write!(f, "internal error: {s}"),
            EngineError::Io(s) => write!(f, "io error: {s}"),
            EngineError::NotFound(s) => write!(f, "not found: {s}"),
            EngineError::Other(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::Internal(e.to_string())
    }
}

impl From<io::Error> for EngineError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => EngineError::NotFound(e.to_string()),
            _ => EngineError::Io(e.to_string()),
        }
    }
}
