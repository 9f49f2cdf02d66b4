//! Polynomial evaluation.
//!
//! Substitution works for values that do not commute with the coefficients
//! (square matrices), so no Horner scheme and no `pow`: each monomial is
//! built by repeated right-multiplication and the products are summed in
//! ascending degree order.
//!
//! For a monomial `c * x^d` with `d >= 1` the term is
//! `x * c^(d - 1) * c`, i.e. the repeated multiplicand is the coefficient,
//! not `x`. Only constant and linear terms therefore agree with the textbook
//! value `c * x^d`; `p(x) = 2x^2` evaluates to `x * 2 * 2`, not `2 * x^2`.

use sparsa_rings::{Coefficient, ScalarCoefficient, StructuralCoefficient};

use crate::error::Result;
use crate::sparse::Polynomial;

impl<T: Coefficient> Polynomial<T> {
    /// Evaluates at a scalar-like value, starting from `T::zero()` and
    /// using `T::one()` for the constant term.
    ///
    /// # Errors
    ///
    /// Returns an error if a coefficient product or sum fails.
    pub fn evaluate(&self, x: &T) -> Result<T>
    where
        T: ScalarCoefficient,
    {
        self.fold_monomials(x, T::zero(), &T::one())
    }

    /// Evaluates at a structured value such as a square matrix.
    ///
    /// The additive identity and the constant term's multiplicative
    /// identity take their shape from `x`. The zero polynomial evaluates to
    /// `x.zero_like()`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PolyError::DimensionMismatch`] if `x` and the
    /// coefficients have incompatible shapes.
    pub fn evaluate_structural(&self, x: &T) -> Result<T>
    where
        T: StructuralCoefficient,
    {
        self.fold_monomials(x, x.zero_like(), &x.one_like())
    }

    fn fold_monomials(&self, x: &T, zero: T, one: &T) -> Result<T> {
        let mut result = zero;
        for (degree, c) in self.terms() {
            let mut term = if degree == 0 { one.clone() } else { x.clone() };
            for _ in 1..degree {
                term = term.try_mul(c)?;
            }
            result = result.try_add(&term.try_mul(c)?)?;
        }
        Ok(result)
    }
}
