//! Algebraic structure traits.
//!
//! These are the classical, infallible structures: every element of a
//! `Ring` lives in one global ring with a type-level zero and one. Values
//! whose arithmetic can fail (matrices of mismatched shape) are described by
//! the capability traits in [`crate::coefficient`] instead.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// Multiplication is not required to commute.
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Embeds an integer into the ring as `1 + 1 + ... (n times)`.
    fn from_i64(n: i64) -> Self {
        Self::one().mul_by_scalar(n)
    }

    /// Computes self + self + ... (n times).
    fn mul_by_scalar(&self, n: i64) -> Self {
        if n == 0 {
            return Self::zero();
        }

        let mut result = self.clone();
        let abs_n = n.unsigned_abs();

        for _ in 1..abs_n {
            result = result + self.clone();
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }
}

/// A Euclidean domain supports division with remainder.
///
/// For any a, b with b ≠ 0, there exist q, r such that:
/// - a = b*q + r
/// - Either r = 0 or φ(r) < φ(b) for some Euclidean function φ
pub trait EuclideanDomain: Ring {
    /// Computes the quotient and remainder of division.
    ///
    /// Returns `None` if `other` is zero.
    fn div_rem(&self, other: &Self) -> Option<(Self, Self)>;
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// Returns `None` if `other` is zero.
    fn field_div(&self, other: &Self) -> Option<Self> {
        other.inv().map(|inv| self.clone() * inv)
    }
}
