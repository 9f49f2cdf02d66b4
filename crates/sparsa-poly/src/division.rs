//! Polynomial long division.
//!
//! The divisor's leading term is read once before the loop. Each step
//! cancels the dividend's leading term against it and drops that term
//! outright, so the loop ends as soon as the dividend's degree falls below
//! the divisor's.

use tracing::{debug, trace};

use sparsa_rings::DivCoefficient;

use crate::error::{PolyError, Result};
use crate::sparse::Polynomial;

impl<T: DivCoefficient> Polynomial<T> {
    /// Computes quotient and remainder of `self / divisor`.
    ///
    /// Coefficient quotients are taken as `c * lc / lc_divisor`, with `/`
    /// being [`DivCoefficient::try_div`].
    ///
    /// # Errors
    ///
    /// - [`PolyError::DivisionByZero`] if `divisor` is the zero polynomial
    ///   or a coefficient quotient is undefined
    /// - [`PolyError::DimensionMismatch`] if coefficient shapes disagree
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let (quotient, remainder) = self.long_division(divisor, true)?;
        Ok((quotient.unwrap_or_default(), remainder))
    }

    /// Quotient of `self / divisor`.
    ///
    /// # Errors
    ///
    /// See [`Self::div_rem`].
    pub fn div(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder of `self / divisor`.
    ///
    /// # Errors
    ///
    /// See [`Self::div_rem`].
    pub fn rem(&self, divisor: &Self) -> Result<Self> {
        self.long_division(divisor, false).map(|(_, r)| r)
    }

    fn long_division(&self, divisor: &Self, with_quotient: bool) -> Result<(Option<Self>, Self)> {
        let (divisor_degree, divisor_lc) = divisor.leading_term().ok_or(PolyError::DivisionByZero)?;

        let mut dividend = self.clone();
        let mut quotient = with_quotient.then(Self::new);

        while let Some((degree, lc)) = dividend.leading_term() {
            if degree < divisor_degree {
                break;
            }
            let shift = degree - divisor_degree;
            let lc = lc.clone();
            trace!(degree, shift, "eliminating leading term");

            for (d, c) in divisor.terms().take_while(|&(d, _)| d < divisor_degree) {
                let step = c.try_mul(&lc)?.try_div(divisor_lc)?;
                dividend.add_term(d + shift, step.try_neg()?)?;
            }
            if let Some(quotient) = quotient.as_mut() {
                quotient.add_term(shift, lc.try_div(divisor_lc)?)?;
            }

            // Cancelled by construction; removed without a zero test.
            dividend.remove_term(degree);
        }

        debug!(
            quotient_terms = quotient.as_ref().map_or(0, Polynomial::len),
            remainder_terms = dividend.len(),
            "long division finished"
        );
        Ok((quotient, dividend))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparsa_rings::integers::Z;
    use sparsa_rings::rationals::Q;

    fn poly(terms: &[(i64, i64)]) -> Polynomial<Z> {
        Polynomial::from_terms(terms.iter().map(|&(d, c)| (d, Z::new(c)))).unwrap()
    }

    fn qpoly(terms: &[(i64, i64)]) -> Polynomial<Q> {
        Polynomial::from_terms(terms.iter().map(|&(d, c)| (d, Q::from_integer(c)))).unwrap()
    }

    #[test]
    fn test_synthetic_division() {
        // (3x^2 + 2x + 1) / (x + 1) = 3x - 1 remainder 2
        let p = poly(&[(2, 3), (1, 2), (0, 1)]);
        let q = poly(&[(1, 1), (0, 1)]);

        let quotient = p.div(&q).unwrap();
        assert_eq!(quotient.leading_term(), Some((1, &Z::new(3))));
        assert!(quotient.terms_eq(&poly(&[(1, 3), (0, -1)])));

        let remainder = p.rem(&q).unwrap();
        assert_eq!(remainder.degree(), Some(0));
        assert!(remainder.terms_eq(&poly(&[(0, 2)])));
    }

    #[test]
    fn test_exact_division() {
        // (x^2 - 1) / (x - 1) = x + 1, remainder 0
        let p = poly(&[(2, 1), (0, -1)]);
        let q = poly(&[(1, 1), (0, -1)]);
        let (quotient, remainder) = p.div_rem(&q).unwrap();
        assert!(quotient.terms_eq(&poly(&[(1, 1), (0, 1)])));
        assert!(remainder.is_empty());
    }

    #[test]
    fn test_division_by_zero_polynomial() {
        let p = poly(&[(1, 1)]);
        let zero = Polynomial::new();
        assert_eq!(p.div(&zero).unwrap_err(), PolyError::DivisionByZero);
        assert_eq!(p.rem(&zero).unwrap_err(), PolyError::DivisionByZero);
        // even the zero dividend is rejected
        assert_eq!(zero.rem(&zero).unwrap_err(), PolyError::DivisionByZero);
    }

    #[test]
    fn test_divisor_of_higher_degree() {
        let p = poly(&[(1, 2), (0, 5)]);
        let q = poly(&[(3, 1)]);
        assert!(p.div(&q).unwrap().is_zero());
        assert!(p.rem(&q).unwrap().terms_eq(&p));
    }

    #[test]
    fn test_zero_dividend() {
        let zero = Polynomial::<Z>::new();
        let q = poly(&[(1, 1), (0, 1)]);
        assert!(zero.div(&q).unwrap().is_zero());
        assert!(zero.rem(&q).unwrap().is_zero());
    }

    #[test]
    fn test_rational_division() {
        // (x^3 + 1) / (2x + 1) over Q
        let p = qpoly(&[(3, 1), (0, 1)]);
        let q = qpoly(&[(1, 2), (0, 1)]);
        let (quotient, remainder) = p.div_rem(&q).unwrap();

        assert_eq!(quotient.coefficient(2), Some(&Q::new(1, 2)));
        assert_eq!(quotient.coefficient(1), Some(&Q::new(-1, 4)));
        assert_eq!(quotient.coefficient(0), Some(&Q::new(1, 8)));
        assert_eq!(remainder.coefficient(0), Some(&Q::new(7, 8)));

        let back = quotient.mul(&q).unwrap().add(&remainder).unwrap();
        assert!(back.terms_eq(&p));
    }

    #[test]
    fn test_constant_divisor() {
        let p = qpoly(&[(2, 4), (1, 2)]);
        let two = qpoly(&[(0, 2)]);
        let (quotient, remainder) = p.div_rem(&two).unwrap();
        assert!(quotient.terms_eq(&qpoly(&[(2, 2), (1, 1)])));
        assert!(remainder.is_zero());
    }

    #[test]
    fn test_fixed_width_overflow_is_reported() {
        // eliminating x against x + MIN needs -MIN
        let p = Polynomial::monomial(1, 1_i64);
        let q = Polynomial::from_terms([(1, 1_i64), (0, i64::MIN)]).unwrap();
        assert_eq!(p.div_rem(&q).unwrap_err(), PolyError::Overflow);
        assert_eq!(p.rem(&q).unwrap_err(), PolyError::Overflow);

        // MIN / -1 overflows rather than dividing by zero
        let p = Polynomial::monomial(1, i64::MIN);
        let q = Polynomial::monomial(1, -1_i64);
        assert_eq!(p.div(&q).unwrap_err(), PolyError::Overflow);
    }
}
