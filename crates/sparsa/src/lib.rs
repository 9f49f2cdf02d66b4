//! # Sparsa
//!
//! Sparse univariate polynomial algebra over generic coefficients.
//!
//! Polynomials store only their non-zero terms and ask nothing of their
//! coefficients beyond the capabilities in [`rings::coefficient`], so the
//! same code runs over big integers, rationals, machine integers, floats
//! and square matrices.
//!
//! ## Quick Start
//!
//! ```rust
//! use sparsa::prelude::*;
//!
//! // (x + 1)^2
//! let p = Polynomial::from_terms([(1, Z::new(1)), (0, Z::new(1))])?;
//! let square = p.mul(&p)?;
//! assert_eq!(square.to_string(), "1 + 2*x + 1*x^2");
//!
//! let (quotient, remainder) = square.div_rem(&p)?;
//! assert!(quotient.terms_eq(&p));
//! assert!(remainder.is_zero());
//! # Ok::<(), PolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use sparsa_linalg as linalg;
pub use sparsa_poly as poly;
pub use sparsa_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use sparsa_linalg::DenseMatrix;
    pub use sparsa_poly::{ArithmeticConfig, PolyError, Polynomial};
    pub use sparsa_rings::{
        Coefficient, DivCoefficient, Field, Ring, ScalarCoefficient, StructuralCoefficient, Q, Z,
    };
}
