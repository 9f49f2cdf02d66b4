//! Errors reported by polynomial operations.

use sparsa_rings::CoefficientError;
use thiserror::Error;

/// Polynomial operation errors.
///
/// Binary operations never mutate their operands, so an error always means
/// the partially built result was discarded and both inputs are untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A caller-supplied argument is outside the operation's domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two coefficients of incompatible shape were combined.
    #[error("dimension mismatch: {}x{} vs {}x{}", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        /// Shape (rows, cols) of the left coefficient.
        left: (usize, usize),
        /// Shape (rows, cols) of the right coefficient.
        right: (usize, usize),
    },

    /// Division by the zero polynomial or by a non-invertible coefficient.
    #[error("division by zero")]
    DivisionByZero,

    /// Fixed-width coefficient arithmetic overflowed.
    #[error("coefficient overflow")]
    Overflow,

    /// The operation is deliberately not provided.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

impl PolyError {
    pub(crate) fn negative_degree(degree: i64) -> Self {
        Self::InvalidArgument(format!("degree must be non-negative, got {degree}"))
    }
}

impl From<CoefficientError> for PolyError {
    fn from(err: CoefficientError) -> Self {
        match err {
            CoefficientError::ShapeMismatch { left, right } => Self::DimensionMismatch { left, right },
            CoefficientError::NotInvertible => Self::DivisionByZero,
            CoefficientError::Overflow => Self::Overflow,
        }
    }
}

/// Result type for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
