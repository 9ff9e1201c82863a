//! Error types for statfmt.
//!
//! The formatter itself never fails: missing or non-finite inputs fall back
//! to the placeholder. These errors cover option parsing and the report/CLI
//! layer.

use thiserror::Error;

/// Result type alias for statfmt operations.
pub type Result<T> = std::result::Result<T, StatfmtError>;

/// Errors that can occur in statfmt.
#[derive(Debug, Error)]
pub enum StatfmtError {
    /// Precision was neither `auto` nor an integer in range.
    #[error("Invalid precision '{value}': expected 'auto' or an integer from 0 to {max}")]
    InvalidPrecision {
        /// The rejected input.
        value: String,
        /// Largest accepted fixed precision.
        max: u8,
    },

    /// A value could not be read as a number (strict mode only).
    #[error("Invalid number on line {line}: '{value}'")]
    InvalidNumber {
        /// 1-based position of the value in the input.
        line: usize,
        /// The rejected input.
        value: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StatfmtError {
    /// Create an InvalidPrecision error.
    pub fn invalid_precision(value: impl Into<String>, max: u8) -> Self {
        Self::InvalidPrecision {
            value: value.into(),
            max,
        }
    }

    /// Create an InvalidNumber error.
    pub fn invalid_number(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            line,
            value: value.into(),
        }
    }
}
