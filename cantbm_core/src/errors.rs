//! # Error Types
//!
//! Structured error types for cantbm_core. Every failure is detected by
//! validation before any computation starts; there are no partial results
//! and nothing is retried.
//!
//! ## Example
//!
//! ```rust
//! use cantbm_core::errors::{AnalysisError, AnalysisResult};
//!
//! fn validate_span(span: f64) -> AnalysisResult<()> {
//!     if span <= 0.0 {
//!         return Err(AnalysisError::invalid_input(
//!             "span",
//!             span.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for cantbm_core operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Structured error type for cantilever analysis.
///
/// Each variant provides specific context about what went wrong so callers
/// (a CLI, a web form, an API consumer) can surface a precise message or
/// handle the failure programmatically.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum AnalysisError {
    /// An input value is invalid (out of range, non-positive, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// More loads supplied than the documented capacity
    #[error("Too many {kind} loads: {count} supplied, at most {max} accepted")]
    TooManyLoads {
        kind: String,
        count: usize,
        max: usize,
    },

    /// Report file I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl AnalysisError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        AnalysisError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a TooManyLoads error
    pub fn too_many_loads(kind: impl Into<String>, count: usize, max: usize) -> Self {
        AnalysisError::TooManyLoads {
            kind: kind.into(),
            count,
            max,
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        AnalysisError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            AnalysisError::InvalidInput { .. } => "INVALID_INPUT",
            AnalysisError::TooManyLoads { .. } => "TOO_MANY_LOADS",
            AnalysisError::FileError { .. } => "FILE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = AnalysisError::invalid_input("span", "-5", "Span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: AnalysisError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AnalysisError::too_many_loads("point", 12, 10).error_code(),
            "TOO_MANY_LOADS"
        );
        assert_eq!(
            AnalysisError::file_error("open", "cantbm.out", "denied").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        let error = AnalysisError::too_many_loads("point", 12, 10);
        assert_eq!(
            error.to_string(),
            "Too many point loads: 12 supplied, at most 10 accepted"
        );
    }
}
