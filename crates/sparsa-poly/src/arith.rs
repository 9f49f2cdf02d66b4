//! Polynomial arithmetic.
//!
//! Every operation builds a fresh result by replaying monomials through
//! [`Polynomial::add_term`]; operands are only borrowed. If a coefficient
//! operation fails midway the half-built result is dropped and the error is
//! returned.

use rayon::prelude::*;
use tracing::debug;

use sparsa_rings::Coefficient;

use crate::error::{PolyError, Result};
use crate::sparse::Polynomial;

/// Configuration for polynomial multiplication.
#[derive(Clone, Debug)]
pub struct ArithmeticConfig {
    /// Minimum number of term pairs before coefficient products are
    /// computed on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 4096,
        }
    }
}

impl<T: Coefficient> Polynomial<T> {
    /// Adds two polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DimensionMismatch`] if two coefficients of the
    /// same degree cannot be added.
    pub fn add(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone();
        for (degree, c) in other.terms() {
            result.add_term(degree, c.clone())?;
        }
        Ok(result)
    }

    /// Returns `-self` as a fresh polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Overflow`] if a fixed-width coefficient has no
    /// representable negation.
    pub fn neg(&self) -> Result<Self> {
        self.try_map_coefficients(Coefficient::try_neg)
    }

    /// Subtracts two polynomials: `self + (-other)`.
    ///
    /// # Errors
    ///
    /// Fails like [`Self::add`] and [`Self::neg`].
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.add(&other.neg()?)
    }

    /// Multiplies two polynomials with the default [`ArithmeticConfig`].
    ///
    /// Coefficients are multiplied as `left * right`, so non-commutative
    /// coefficients keep their order.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DimensionMismatch`] if coefficients cannot be
    /// multiplied or accumulated.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.mul_with(other, &ArithmeticConfig::default())
    }

    /// Multiplies two polynomials (schoolbook, O(|self| · |other|)).
    ///
    /// Products are accumulated in the same order whether or not the
    /// parallel path is taken, so both paths give identical results.
    ///
    /// # Errors
    ///
    /// See [`Self::mul`]. Degree overflow past `u32::MAX` is reported as
    /// [`PolyError::InvalidArgument`].
    pub fn mul_with(&self, other: &Self, config: &ArithmeticConfig) -> Result<Self> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::new());
        }

        let pairs = self.len().saturating_mul(other.len());
        let products: Vec<(u32, T)> = if pairs >= config.parallel_threshold {
            debug!(pairs, "multiplying on the parallel path");
            let left: Vec<_> = self.terms().collect();
            left.par_iter()
                .map(|&(p1, c1)| term_products(p1, c1, other))
                .collect::<Result<Vec<_>>>()?
                .into_iter()
                .flatten()
                .collect()
        } else {
            let mut products = Vec::with_capacity(pairs);
            for (p1, c1) in self.terms() {
                products.extend(term_products(p1, c1, other)?);
            }
            products
        };

        let mut result = Self::new();
        for (degree, c) in products {
            result.add_term(degree, c)?;
        }
        Ok(result)
    }

    /// Multiplies every coefficient by an integer magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Overflow`] if a fixed-width coefficient overflows.
    pub fn scale(&self, k: i64) -> Result<Self> {
        let mut result = Self::new();
        for (degree, c) in self.terms() {
            result.add_term(degree, c.scale(k)?)?;
        }
        Ok(result)
    }
}

/// `c1 * x^p1` times every term of `other`, in ascending degree order.
fn term_products<T: Coefficient>(p1: u32, c1: &T, other: &Polynomial<T>) -> Result<Vec<(u32, T)>> {
    other
        .terms()
        .map(|(p2, c2)| {
            let degree = p1
                .checked_add(p2)
                .ok_or_else(|| PolyError::InvalidArgument("product degree overflows u32".into()))?;
            Ok((degree, c1.try_mul(c2)?))
        })
        .collect()
}
