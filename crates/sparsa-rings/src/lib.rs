//! # sparsa-rings
//!
//! Coefficient algebra for sparsa polynomials.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `EuclideanDomain`, `Field`
//! - Arbitrary precision integers `Z` and rationals `Q`
//! - The coefficient capability traits polynomials are generic over
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── EuclideanDomain
//!  └── Field
//!
//! Coefficient
//!  ├── DivCoefficient
//!  ├── ScalarCoefficient
//!  └── StructuralCoefficient
//! ```
//!
//! Every `Ring` type in this crate is also a `Coefficient`; fixed-width
//! integers and floats are coefficients without being rings.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coefficient;
pub mod integers;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use coefficient::{
    Coefficient, CoefficientError, DivCoefficient, ScalarCoefficient, StructuralCoefficient,
};
pub use integers::Z;
pub use rationals::Q;
pub use traits::{EuclideanDomain, Field, Ring};
