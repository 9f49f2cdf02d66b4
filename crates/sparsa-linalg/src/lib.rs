//! # sparsa-linalg
//!
//! Dense matrices for sparsa.
//!
//! Matrices serve two roles in the polynomial library:
//! - non-commutative coefficients, e.g. `A*x^2 + B` with `A, B` square
//! - structural substitution values, e.g. evaluating `p(M)` for a matrix `M`
//!
//! Shape errors surface as [`CoefficientError::ShapeMismatch`] so polynomial
//! arithmetic can report them instead of panicking. Large products run on
//! rayon's work-stealing pool.
//!
//! [`CoefficientError::ShapeMismatch`]: sparsa_rings::CoefficientError::ShapeMismatch

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;

pub use dense_matrix::{DenseMatrix, PARALLEL_THRESHOLD};
