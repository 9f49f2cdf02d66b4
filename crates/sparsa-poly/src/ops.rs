//! Operator overloads.
//!
//! Operators take their operands by reference and return `Result`, since
//! coefficient arithmetic can fail:
//!
//! ```
//! use sparsa_poly::Polynomial;
//!
//! let p = Polynomial::from_terms([(2, 1_i64), (0, -1)])?;
//! let q = Polynomial::from_terms([(1, 1_i64), (0, -1)])?;
//! let quotient = (&p / &q)?;
//! assert_eq!(quotient.coefficient(1), Some(&1));
//! assert!((&p % &q)?.is_zero());
//! # Ok::<(), sparsa_poly::PolyError>(())
//! ```

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use sparsa_rings::{Coefficient, DivCoefficient};

use crate::error::Result;
use crate::sparse::Polynomial;

impl<T: Coefficient> Add for &Polynomial<T> {
    type Output = Result<Polynomial<T>>;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl<T: Coefficient> Sub for &Polynomial<T> {
    type Output = Result<Polynomial<T>>;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl<T: Coefficient> Mul for &Polynomial<T> {
    type Output = Result<Polynomial<T>>;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}

impl<T: Coefficient> Mul<i64> for &Polynomial<T> {
    type Output = Result<Polynomial<T>>;

    fn mul(self, rhs: i64) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: DivCoefficient> Div for &Polynomial<T> {
    type Output = Result<Polynomial<T>>;

    fn div(self, rhs: Self) -> Self::Output {
        Polynomial::div(self, rhs)
    }
}

impl<T: DivCoefficient> Rem for &Polynomial<T> {
    type Output = Result<Polynomial<T>>;

    fn rem(self, rhs: Self) -> Self::Output {
        Polynomial::rem(self, rhs)
    }
}

impl<T: Coefficient> Neg for &Polynomial<T> {
    type Output = Result<Polynomial<T>>;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}
