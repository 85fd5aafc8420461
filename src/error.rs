//! Error types for lanewise operations.
//!
//! The numeric layer itself is total: every lane operation is defined for
//! every input (wraparound, saturation, or approximation). The only runtime
//! failure in this crate is constructing a vector from a slice of the wrong
//! length; size and immediate-operand violations are compile-time errors.

use std::fmt;

/// Errors that can occur during lanewise operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanewiseError {
    /// A slice did not contain exactly one register's worth of lanes.
    LengthMismatch {
        /// The lane count of the destination vector type.
        expected: usize,
        /// The length of the slice that was supplied.
        actual: usize,
    },
}

impl fmt::Display for LanewiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanewiseError::LengthMismatch { expected, actual } => write!(
                f,
                "slice length mismatch: vector has {} lanes but slice has {} elements",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for LanewiseError {}

/// Result type alias for lanewise operations.
pub type Result<T> = std::result::Result<T, LanewiseError>;

/// Creates a length-mismatch error.
pub fn length_mismatch(expected: usize, actual: usize) -> LanewiseError {
    LanewiseError::LengthMismatch { expected, actual }
}
