//! # Error Types
//!
//! Structured error types for longdiv_core. Every failure carries enough
//! context for a front-end to show a readable message, and serializes to
//! JSON for machine consumers.
//!
//! ## Example
//!
//! ```rust
//! use longdiv_core::errors::{DivError, DivResult};
//!
//! fn check_divisor(divisor: f64) -> DivResult<()> {
//!     if divisor == 0.0 {
//!         return Err(DivError::division_by_zero(12.0));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(check_divisor(0.0).unwrap_err().error_code(), "DIVISION_BY_ZERO");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for longdiv_core operations
pub type DivResult<T> = Result<T, DivError>;

/// Structured error type for division, session and file operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DivError {
    /// An input value is invalid (not a number, negative, non-finite)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// The divisor is zero; no steps are produced
    #[error("Cannot divide {dividend} by zero")]
    DivisionByZero { dividend: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DivError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DivError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        DivError::MissingField {
            field: field.into(),
        }
    }

    /// Create a DivisionByZero error for the given dividend
    pub fn division_by_zero(dividend: f64) -> Self {
        DivError::DivisionByZero {
            dividend: crate::numeric::format_number(dividend),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DivError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        DivError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Errors the user can fix by editing the form inputs
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DivError::InvalidInput { .. }
                | DivError::MissingField { .. }
                | DivError::DivisionByZero { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DivError::InvalidInput { .. } => "INVALID_INPUT",
            DivError::MissingField { .. } => "MISSING_FIELD",
            DivError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            DivError::FileError { .. } => "FILE_ERROR",
            DivError::SerializationError { .. } => "SERIALIZATION_ERROR",
            DivError::VersionMismatch { .. } => "VERSION_MISMATCH",
            DivError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
