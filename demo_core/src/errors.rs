//! # Error Types
//!
//! Structured error types for demo_core. Every failure a routine can hit
//! (bad physical inputs, unreadable record files, a closed standard input)
//! is a value of [`DemoError`]; the drivers print it and keep exit status 0.
//!
//! ## Example
//!
//! ```rust
//! use demo_core::errors::{DemoError, DemoResult};
//!
//! fn validate_height(y_init: f64) -> DemoResult<()> {
//!     if y_init <= 0.0 {
//!         return Err(DemoError::invalid_input(
//!             "y_init",
//!             y_init.to_string(),
//!             "Height must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_height(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for demo_core operations
pub type DemoResult<T> = Result<T, DemoError>;

/// Structured error type for demo routines and formulas.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DemoError {
    /// An input value is invalid (out of range, degenerate geometry, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A record line ended before a required field
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// File could not be opened, read or written
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Standard input ended while a prompt was waiting for a value
    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    /// Console read/write failure
    #[error("I/O error: {reason}")]
    Io { reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl DemoError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        DemoError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        DemoError::MissingField {
            field: field.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        DemoError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an InputClosed error
    pub fn input_closed(prompt: impl Into<String>) -> Self {
        DemoError::InputClosed {
            prompt: prompt.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DemoError::InvalidInput { .. } => "INVALID_INPUT",
            DemoError::MissingField { .. } => "MISSING_FIELD",
            DemoError::FileError { .. } => "FILE_ERROR",
            DemoError::InputClosed { .. } => "INPUT_CLOSED",
            DemoError::Io { .. } => "IO_ERROR",
            DemoError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<std::io::Error> for DemoError {
    fn from(err: std::io::Error) -> Self {
        DemoError::Io {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DemoError {
    fn from(err: serde_json::Error) -> Self {
        DemoError::SerializationError {
            reason: err.to_string(),
        }
    }
}
