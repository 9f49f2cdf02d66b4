//! Polynomial composition.

use tracing::debug;

use sparsa_rings::Coefficient;

use crate::error::Result;
use crate::sparse::Polynomial;

impl<T: Coefficient> Polynomial<T> {
    /// Computes `self(inner)`.
    ///
    /// Each term `c * x^d` of `self` contributes `inner^d * c`, with the
    /// power built by `d - 1` repeated multiplications and the coefficient
    /// multiplied in from the right. Constant terms pass through unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if any coefficient product or sum fails.
    pub fn compose(&self, inner: &Self) -> Result<Self> {
        debug!(outer_terms = self.len(), inner_terms = inner.len(), "composing");

        let mut result = Self::new();
        for (degree, c) in self.terms() {
            if degree == 0 {
                result.add_term(0, c.clone())?;
                continue;
            }

            let mut power = inner.clone();
            for _ in 1..degree {
                power = power.mul(inner)?;
            }
            result = result.add(&power.mul(&Self::constant(c.clone()))?)?;
        }
        Ok(result)
    }
}
