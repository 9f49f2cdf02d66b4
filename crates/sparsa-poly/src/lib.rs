//! # sparsa-poly
//!
//! Sparse univariate polynomials over generic coefficients.
//!
//! This crate provides:
//! - A sparse degree → coefficient store that never holds a zero coefficient
//! - Addition, subtraction, multiplication (optionally rayon-parallel) and
//!   integer scaling
//! - Long division with quotient and remainder
//! - Evaluation at scalars and at structured values such as square matrices
//! - Composition `p(q(x))`
//! - A degree-only ordering
//!
//! Coefficients only need the capabilities in [`sparsa_rings::coefficient`];
//! nothing assumes they commute, so matrix coefficients work unchanged.
//!
//! ## Example
//!
//! ```
//! use sparsa_poly::Polynomial;
//! use sparsa_rings::Z;
//!
//! // 2x + 3
//! let p = Polynomial::from_terms([(1, Z::new(2)), (0, Z::new(3))])?;
//! assert_eq!(p.evaluate(&Z::new(5))?, Z::new(13));
//! # Ok::<(), sparsa_poly::PolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod arith;
pub mod compose;
pub mod division;
pub mod error;
pub mod eval;
pub mod ops;
pub mod ordering;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use arith::ArithmeticConfig;
pub use error::{PolyError, Result};
pub use sparse::Polynomial;
