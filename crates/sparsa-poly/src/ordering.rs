//! Degree ordering of polynomials.
//!
//! Polynomials are ordered by degree alone, with the zero polynomial below
//! every other. This is a total *preorder*: `x^2 + 1` and `5x^2 - x` compare
//! equal. `==` on polynomials is that same degree comparison. Use
//! [`Polynomial::terms_eq`] to compare coefficients.
//!
//! `Hash` is not implemented since no hash is consistent with this `==`
//! and distinguishes different polynomials.

use std::any::Any;
use std::cmp::Ordering;

use crate::error::{PolyError, Result};
use crate::sparse::Polynomial;

impl<T> Polynomial<T> {
    /// Compares by degree only; the zero polynomial sorts first.
    #[must_use]
    pub fn degree_cmp(&self, other: &Self) -> Ordering {
        // `None < Some(_)` places the zero polynomial first.
        self.degree().cmp(&other.degree())
    }

    /// True when both polynomials have the same degree.
    #[must_use]
    pub fn degree_eq(&self, other: &Self) -> bool {
        self.degree_cmp(other) == Ordering::Equal
    }

    /// Term-by-term equality of degrees and coefficients.
    #[must_use]
    pub fn terms_eq(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self.len() == other.len() && self.terms().eq(other.terms())
    }

    /// [`Self::degree_cmp`] against a dynamically typed value.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidArgument`] if `other` is absent or is not
    /// a `Polynomial<T>`.
    pub fn compare_any(&self, other: Option<&dyn Any>) -> Result<Ordering>
    where
        T: 'static,
    {
        let other = other.ok_or_else(|| PolyError::InvalidArgument("comparison target is absent".into()))?;
        let other = other
            .downcast_ref::<Self>()
            .ok_or_else(|| PolyError::InvalidArgument("comparison target is not a polynomial".into()))?;
        Ok(self.degree_cmp(other))
    }

    /// Always fails: polynomials have no hash consistent with `==`.
    ///
    /// # Errors
    ///
    /// Always returns [`PolyError::Unsupported`].
    pub fn hash_code(&self) -> Result<u64> {
        Err(PolyError::Unsupported("hashing polynomials"))
    }
}

impl<T> PartialEq for Polynomial<T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.degree_eq(other)
    }
}

impl<T> Eq for Polynomial<T> {}

impl<T> PartialOrd for Polynomial<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Polynomial<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.degree_cmp(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparsa_rings::integers::Z;

    fn poly(terms: &[(i64, i64)]) -> Polynomial<Z> {
        Polynomial::from_terms(terms.iter().map(|&(d, c)| (d, Z::new(c)))).unwrap()
    }

    #[test]
    fn test_weak_equality() {
        let p = poly(&[(2, 1), (0, 1)]);
        let q = poly(&[(2, 5), (1, -1)]);
        assert_eq!(p.degree_cmp(&q), Ordering::Equal);
        assert!(p == q);
        assert!(!p.terms_eq(&q));
    }

    #[test]
    fn test_reflexive() {
        let p = poly(&[(3, 2), (1, 1)]);
        assert_eq!(p.degree_cmp(&p), Ordering::Equal);
        assert!(p == p.clone());
        assert!(p.terms_eq(&p.clone()));
    }

    #[test]
    fn test_zero_sorts_first() {
        let zero = Polynomial::<Z>::new();
        let constant = poly(&[(0, 9)]);
        assert!(zero < constant);
        assert!(constant > zero);
        assert_eq!(zero.degree_cmp(&Polynomial::new()), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_degree() {
        let mut polys = vec![poly(&[(4, 1)]), Polynomial::new(), poly(&[(1, 1)]), poly(&[(2, -1)])];
        polys.sort();
        let degrees: Vec<_> = polys.iter().map(Polynomial::degree).collect();
        assert_eq!(degrees, vec![None, Some(1), Some(2), Some(4)]);
    }

    #[test]
    fn test_compare_any() {
        let p = poly(&[(2, 1)]);
        let q = poly(&[(1, 1)]);
        assert_eq!(p.compare_any(Some(&q)), Ok(Ordering::Greater));
        assert!(matches!(p.compare_any(None), Err(PolyError::InvalidArgument(_))));
        assert!(matches!(p.compare_any(Some(&42_i64)), Err(PolyError::InvalidArgument(_))));

        let other_coefficients = Polynomial::<i64>::monomial(2, 1);
        assert!(p.compare_any(Some(&other_coefficients)).is_err());
    }

    #[test]
    fn test_hash_unsupported() {
        assert_eq!(
            poly(&[(0, 1)]).hash_code(),
            Err(PolyError::Unsupported("hashing polynomials"))
        );
    }
}
