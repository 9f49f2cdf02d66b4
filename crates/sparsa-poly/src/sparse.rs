//! Sparse univariate polynomial storage.
//!
//! A polynomial is an ordered map from degree to coefficient. Two
//! invariants hold at rest:
//! - every stored coefficient is non-zero (the empty map is the zero polynomial)
//! - degrees are non-negative, enforced by the `u32` key type
//!
//! Incremental mutation goes through [`Polynomial::add_monomial`], which
//! combines same-degree coefficients and prunes a term whose sum is zero.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use sparsa_rings::{Coefficient, CoefficientError};

use crate::error::{PolyError, Result};

/// A sparse univariate polynomial with coefficients of type `T`.
///
/// Terms are kept in ascending degree order. Cloning deep-copies the term
/// map; a clone never aliases its source.
///
/// Equality and ordering compare *degrees only*; see [`crate::ordering`].
#[derive(Clone, Debug)]
pub struct Polynomial<T> {
    /// Degree → coefficient, ascending, no zero values.
    terms: BTreeMap<u32, T>,
}

impl<T> Default for Polynomial<T> {
    fn default() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }
}

impl<T: Coefficient> Polynomial<T> {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self::monomial(0, c)
    }

    /// Creates the monomial `c * x^degree`.
    #[must_use]
    pub fn monomial(degree: u32, c: T) -> Self {
        let mut terms = BTreeMap::new();
        if !c.is_zero() {
            terms.insert(degree, c);
        }
        Self { terms }
    }

    /// Creates a polynomial from a degree → coefficient map.
    ///
    /// Zero coefficients are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidArgument`] if any degree is negative.
    pub fn from_map(map: BTreeMap<i64, T>) -> Result<Self> {
        let mut terms = BTreeMap::new();
        for (degree, c) in map {
            let degree = to_degree(degree)?;
            if !c.is_zero() {
                terms.insert(degree, c);
            }
        }
        Ok(Self { terms })
    }

    /// Creates a polynomial by adding up `(degree, coefficient)` pairs.
    ///
    /// Repeated degrees are combined.
    ///
    /// # Errors
    ///
    /// Fails like [`Self::add_monomial`] on the first offending pair.
    pub fn from_terms(terms: impl IntoIterator<Item = (i64, T)>) -> Result<Self> {
        let mut poly = Self::new();
        for (degree, c) in terms {
            poly.add_monomial(degree, c)?;
        }
        Ok(poly)
    }

    /// Adds `coefficient * x^degree` in place.
    ///
    /// The coefficient is combined with any existing term of the same
    /// degree, and the term is removed if the sum is zero.
    ///
    /// # Errors
    ///
    /// - [`PolyError::InvalidArgument`] if `degree` is negative
    /// - [`PolyError::DimensionMismatch`] if the coefficients cannot be added
    ///
    /// On error the polynomial is left unchanged.
    pub fn add_monomial(&mut self, degree: i64, coefficient: T) -> Result<()> {
        self.add_term(to_degree(degree)?, coefficient)
    }

    /// [`Self::add_monomial`] for a degree already known to be valid.
    pub(crate) fn add_term(&mut self, degree: u32, coefficient: T) -> Result<()> {
        match self.terms.entry(degree) {
            Entry::Occupied(mut slot) => {
                let combined = slot.get().try_add(&coefficient)?;
                if combined.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = combined;
                }
            }
            Entry::Vacant(slot) => {
                if !coefficient.is_zero() {
                    slot.insert(coefficient);
                }
            }
        }
        Ok(())
    }

    /// Applies a fallible `f` to every coefficient, dropping terms that
    /// become zero. Stops at the first failure.
    pub(crate) fn try_map_coefficients(
        &self,
        f: impl Fn(&T) -> std::result::Result<T, CoefficientError>,
    ) -> Result<Self> {
        let mut terms = BTreeMap::new();
        for (&degree, c) in &self.terms {
            let mapped = f(c)?;
            if !mapped.is_zero() {
                terms.insert(degree, mapped);
            }
        }
        Ok(Self { terms })
    }

    /// Drops the term of the given degree outright.
    pub(crate) fn remove_term(&mut self, degree: u32) {
        self.terms.remove(&degree);
    }
}

impl<T> Polynomial<T> {
    /// Iterates `(degree, coefficient)` in ascending degree order.
    ///
    /// The iterator borrows the polynomial; call again to restart.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (u32, &T)> + ExactSizeIterator + Clone + '_ {
        self.terms.iter().map(|(&degree, c)| (degree, c))
    }

    /// Returns the term of maximum degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_term(&self) -> Option<(u32, &T)> {
        self.terms.last_key_value().map(|(&degree, c)| (degree, c))
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coefficient(&self) -> Option<&T> {
        self.leading_term().map(|(_, c)| c)
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.leading_term().map(|(degree, _)| degree)
    }

    /// Returns the coefficient of `x^degree`, if non-zero.
    #[must_use]
    pub fn coefficient(&self, degree: u32) -> Option<&T> {
        self.terms.get(&degree)
    }

    /// Returns the number of stored (non-zero) terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

fn to_degree(degree: i64) -> Result<u32> {
    if degree < 0 {
        return Err(PolyError::negative_degree(degree));
    }
    u32::try_from(degree)
        .map_err(|_| PolyError::InvalidArgument(format!("degree {degree} exceeds u32::MAX")))
}

impl<T: fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        let terms: Vec<_> = self
            .terms()
            .map(|(degree, c)| match degree {
                0 => format!("{c}"),
                1 => format!("{c}*x"),
                _ => format!("{c}*x^{degree}"),
            })
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}
