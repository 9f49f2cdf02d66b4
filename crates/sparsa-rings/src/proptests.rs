//! Property-based tests for the coefficient rings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::coefficient::{Coefficient, DivCoefficient};
    use crate::traits::{EuclideanDomain, Field, Ring};
    use crate::{Q, Z};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Z::new(a);
            let b = Z::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Z::new(a);
            let b = Z::new(b);
            let c = Z::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_division_identity(a in small_int(), b in non_zero_int()) {
            // a = b*q + r with |r| < |b|
            let (q, r) = Z::new(a).div_rem(&Z::new(b)).unwrap();
            prop_assert_eq!(Z::new(b) * q + r.clone(), Z::new(a));
            prop_assert!(r.to_i64().unwrap().abs() < b.abs());
        }

        #[test]
        fn rational_inverse(n in non_zero_int(), d in non_zero_int()) {
            let x = Q::new(n, d);
            let inv = x.inv().unwrap();
            prop_assert!(Ring::is_one(&(x * inv)));
        }

        #[test]
        fn rational_div_then_mul(a in small_int(), b in non_zero_int()) {
            let a = Q::from_integer(a);
            let b = Q::from_integer(b);
            let q = a.try_div(&b).unwrap();
            prop_assert_eq!(q.try_mul(&b).unwrap(), a);
        }

        #[test]
        fn scale_matches_ring_multiplication(a in small_int(), k in small_int()) {
            let scaled = Z::new(a).scale(k).unwrap();
            prop_assert_eq!(scaled, Z::new(a) * Z::new(k));
        }

        #[test]
        fn negation_is_additive_inverse(a in small_int()) {
            let x = Q::from_integer(a);
            prop_assert!(Coefficient::is_zero(&x.try_add(&x.try_neg().unwrap()).unwrap()));
        }
    }
}
