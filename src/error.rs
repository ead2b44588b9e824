//! Error types for shape checks and the accelerated addition backend.

use thiserror::Error;

use crate::accel::AcceleratorStatus;

/// Result type alias for fallible `ketspace` operations.
pub type Result<T> = core::result::Result<T, LinalgError>;

/// Errors raised by vector, matrix and accelerator operations.
///
/// Scalar arithmetic never produces these: domain errors such as `sqrt(-1)`
/// or division by zero follow IEEE-754 and yield NaN or infinity.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Two vectors of different length were combined.
    #[error("length mismatch in {operation}: {left} vs {right}")]
    LengthMismatch {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// Two square matrices (or a matrix and a vector) of different dimension were combined.
    #[error("dimension mismatch in {operation}: {left}x{left} vs {right}")]
    DimensionMismatch {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Dimension of the matrix operand.
        left: usize,
        /// Dimension (or length) of the other operand.
        right: usize,
    },

    /// Matrix construction from a grid that is not square.
    #[error("matrix is not square: row {row} has {columns} entries, expected {expected}")]
    NotSquare {
        /// First offending row.
        row: usize,
        /// Number of entries found in that row.
        columns: usize,
        /// Number of rows, which every row length must match.
        expected: usize,
    },

    /// The accelerated backend reported a non-success status.
    #[error("accelerator failed with status {0}")]
    Accelerator(AcceleratorStatus),
}

impl LinalgError {
    pub(crate) fn length_mismatch(operation: &'static str, left: usize, right: usize) -> Self {
        Self::LengthMismatch {
            operation,
            left,
            right,
        }
    }

    pub(crate) fn dimension_mismatch(operation: &'static str, left: usize, right: usize) -> Self {
        Self::DimensionMismatch {
            operation,
            left,
            right,
        }
    }
}

/// Operator impls (`+`, `-`, `*`) cannot return `Result`; they panic with
/// the error's message instead.
#[inline]
#[track_caller]
pub(crate) fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
