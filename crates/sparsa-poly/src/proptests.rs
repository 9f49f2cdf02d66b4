//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::arith::ArithmeticConfig;
    use crate::error::PolyError;
    use crate::sparse::Polynomial;
    use sparsa_rings::rationals::Q;
    use sparsa_rings::{Coefficient, ScalarCoefficient, Z};

    // Strategy for small integer polynomials, degrees 0..6, some terms cancelling
    fn small_poly() -> impl Strategy<Value = Polynomial<Z>> {
        proptest::collection::vec((0i64..6, -20i64..20), 0..6).prop_map(|terms| {
            Polynomial::from_terms(terms.into_iter().map(|(d, c)| (d, Z::new(c)))).unwrap()
        })
    }

    fn small_qpoly() -> impl Strategy<Value = Polynomial<Q>> {
        proptest::collection::vec((0i64..6, -20i64..20), 0..6).prop_map(|terms| {
            Polynomial::from_terms(terms.into_iter().map(|(d, c)| (d, Q::from_integer(c)))).unwrap()
        })
    }

    fn nonzero_qpoly() -> impl Strategy<Value = Polynomial<Q>> {
        small_qpoly().prop_filter("divisor must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        #[test]
        fn no_zero_coefficient_at_rest(p in small_poly(), q in small_poly()) {
            for r in [p.add(&q).unwrap(), p.sub(&q).unwrap(), p.mul(&q).unwrap()] {
                prop_assert!(r.terms().all(|(_, c)| !Coefficient::is_zero(c)));
            }
        }

        #[test]
        fn add_zero_identity(p in small_poly()) {
            let sum = p.add(&Polynomial::new()).unwrap();
            prop_assert!(sum == p);
            prop_assert!(sum.terms_eq(&p));
        }

        #[test]
        fn add_commutative(p in small_poly(), q in small_poly()) {
            let pq = p.add(&q).unwrap();
            let qp = q.add(&p).unwrap();
            prop_assert!(pq == qp);
            prop_assert!(pq.terms_eq(&qp));
        }

        #[test]
        fn sub_then_add_restores(p in small_poly(), q in small_poly()) {
            prop_assert!(p.sub(&q).unwrap().add(&q).unwrap().terms_eq(&p));
        }

        #[test]
        fn mul_term_count_bound(p in small_poly(), q in small_poly()) {
            let prod = p.mul(&q).unwrap();
            prop_assert!(prod.len() <= p.len() * q.len());
        }

        #[test]
        fn mul_degree_adds(p in small_poly(), q in small_poly()) {
            // Z has no zero divisors, so leading terms never cancel
            let prod = p.mul(&q).unwrap();
            match (p.degree(), q.degree()) {
                (Some(a), Some(b)) => prop_assert_eq!(prod.degree(), Some(a + b)),
                _ => prop_assert!(prod.is_zero()),
            }
        }

        #[test]
        fn parallel_mul_matches_sequential(p in small_poly(), q in small_poly()) {
            let forced = ArithmeticConfig { parallel_threshold: 0 };
            prop_assert!(p.mul_with(&q, &forced).unwrap().terms_eq(&p.mul(&q).unwrap()));
        }

        #[test]
        fn add_monomial_leaves_other_terms(p in small_poly(), d in 0i64..8, c in -20i64..20) {
            let mut q = p.clone();
            q.add_monomial(d, Z::new(c)).unwrap();
            for (degree, coefficient) in p.terms() {
                if i64::from(degree) != d {
                    prop_assert_eq!(q.coefficient(degree), Some(coefficient));
                }
            }
            // constant term is what evaluation at zero sees for degree > 0 terms
            if d > 0 {
                let zero = <Z as ScalarCoefficient>::zero();
                prop_assert_eq!(q.evaluate(&zero).unwrap(), p.evaluate(&zero).unwrap());
            }
        }

        #[test]
        fn division_round_trip(p in small_qpoly(), q in nonzero_qpoly()) {
            let (quotient, remainder) = p.div_rem(&q).unwrap();
            let back = quotient.mul(&q).unwrap().add(&remainder).unwrap();
            prop_assert!(back.terms_eq(&p));
            prop_assert!(remainder.degree() < q.degree());
        }

        #[test]
        fn monic_integer_division_round_trip(p in small_poly(), q in small_poly(), d in 0i64..4) {
            // A monic divisor keeps every integer quotient exact
            let mut divisor = q.clone();
            let lead = i64::from(divisor.degree().unwrap_or(0)) + d + 1;
            divisor.add_monomial(lead, Z::new(1)).unwrap();

            let (quotient, remainder) = p.div_rem(&divisor).unwrap();
            let back = quotient.mul(&divisor).unwrap().add(&remainder).unwrap();
            prop_assert!(back.terms_eq(&p));
        }

        #[test]
        fn div_and_rem_agree_with_div_rem(p in small_qpoly(), q in nonzero_qpoly()) {
            let (quotient, remainder) = p.div_rem(&q).unwrap();
            prop_assert!(p.div(&q).unwrap().terms_eq(&quotient));
            prop_assert!(p.rem(&q).unwrap().terms_eq(&remainder));
        }

        #[test]
        fn division_by_zero_fails(p in small_qpoly()) {
            let zero = Polynomial::new();
            prop_assert_eq!(p.div(&zero).unwrap_err(), PolyError::DivisionByZero);
            prop_assert_eq!(p.rem(&zero).unwrap_err(), PolyError::DivisionByZero);
        }

        #[test]
        fn degree_order_ignores_coefficients(p in small_poly(), c in 1i64..20) {
            let mut q = p.clone();
            if let Some(d) = p.degree() {
                q.add_monomial(i64::from(d), Z::new(c)).unwrap();
                if d > 0 {
                    q.add_monomial(0, Z::new(c)).unwrap();
                }
            }
            prop_assert!(p == p.clone());
            if q.degree() == p.degree() {
                prop_assert!(p == q);
            }
        }

        #[test]
        fn compose_with_x_is_identity(p in small_poly()) {
            let x = Polynomial::monomial(1, Z::new(1));
            prop_assert!(p.compose(&x).unwrap().terms_eq(&p));
        }

        #[test]
        fn evaluate_is_additive_for_linear(a in -20i64..20, b in -20i64..20, c in -20i64..20, d in -20i64..20, x in -20i64..20) {
            // For degree <= 1 the fold agrees with the textbook value
            let p = Polynomial::from_terms([(1, Z::new(a)), (0, Z::new(b))]).unwrap();
            let q = Polynomial::from_terms([(1, Z::new(c)), (0, Z::new(d))]).unwrap();
            let x = Z::new(x);
            let sum = p.add(&q).unwrap().evaluate(&x).unwrap();
            prop_assert_eq!(sum, p.evaluate(&x).unwrap() + q.evaluate(&x).unwrap());
        }
    }
}
