//! Coefficient capabilities for polynomial arithmetic.
//!
//! A polynomial never assumes its coefficients commute, nor that every pair
//! of coefficients can be combined. Shape-checked values such as matrices
//! report a [`CoefficientError`] instead of panicking, and the polynomial
//! layer turns that into a recoverable error.
//!
//! ```text
//! Coefficient            (+, -, *, zero test, integer scaling)
//!  ├── DivCoefficient    (/ by another coefficient)
//!  ├── ScalarCoefficient (type-level 0 and 1)
//!  └── StructuralCoefficient (0 and 1 shaped like a sample value)
//! ```

use std::fmt::Debug;

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, One, Zero};
use thiserror::Error;

use crate::integers::Z;
use crate::rationals::Q;
use crate::traits::{EuclideanDomain, Field, Ring};

/// Failure of a single coefficient operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CoefficientError {
    /// The operands have incompatible shapes.
    #[error("shape mismatch: {}x{} vs {}x{}", left.0, left.1, right.0, right.1)]
    ShapeMismatch {
        /// Shape (rows, cols) of the left operand.
        left: (usize, usize),
        /// Shape (rows, cols) of the right operand.
        right: (usize, usize),
    },

    /// The divisor has no inverse.
    #[error("coefficient is not invertible")]
    NotInvertible,

    /// Fixed-width arithmetic left its range.
    #[error("coefficient arithmetic overflowed")]
    Overflow,
}

/// The minimal algebra a polynomial coefficient must support.
///
/// Multiplication order is significant: `a.try_mul(b)` computes `a * b`.
pub trait Coefficient: Clone + Debug + Send + Sync {
    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Computes `self + rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands cannot be combined.
    fn try_add(&self, rhs: &Self) -> Result<Self, CoefficientError>;

    /// Computes `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands cannot be combined.
    fn try_mul(&self, rhs: &Self) -> Result<Self, CoefficientError>;

    /// Returns the additive inverse.
    ///
    /// # Errors
    ///
    /// Returns [`CoefficientError::Overflow`] if the inverse is not
    /// representable.
    fn try_neg(&self) -> Result<Self, CoefficientError>;

    /// Multiplies by an integer magnitude.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not representable.
    fn scale(&self, k: i64) -> Result<Self, CoefficientError>;
}

/// Coefficients that can be divided by one another.
pub trait DivCoefficient: Coefficient {
    /// Computes `self / rhs`. For non-commutative types this is right
    /// division, `self * rhs⁻¹`.
    ///
    /// # Errors
    ///
    /// Returns [`CoefficientError::NotInvertible`] if `rhs` cannot divide.
    fn try_div(&self, rhs: &Self) -> Result<Self, CoefficientError>;
}

/// Coefficients with identities that do not depend on any particular value.
pub trait ScalarCoefficient: Coefficient {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;
}

/// Coefficients whose identities must match the shape of a sample value.
pub trait StructuralCoefficient: Coefficient {
    /// The additive identity shaped like `self`.
    fn zero_like(&self) -> Self;

    /// The multiplicative identity shaped like `self`.
    fn one_like(&self) -> Self;
}

macro_rules! impl_ring_coefficient {
    ($($ty:ty),*) => {$(
        impl Coefficient for $ty {
            fn is_zero(&self) -> bool {
                Ring::is_zero(self)
            }

            fn try_add(&self, rhs: &Self) -> Result<Self, CoefficientError> {
                Ok(self.clone() + rhs.clone())
            }

            fn try_mul(&self, rhs: &Self) -> Result<Self, CoefficientError> {
                Ok(self.clone() * rhs.clone())
            }

            fn try_neg(&self) -> Result<Self, CoefficientError> {
                Ok(-self.clone())
            }

            fn scale(&self, k: i64) -> Result<Self, CoefficientError> {
                Ok(self.mul_by_scalar(k))
            }
        }

        impl ScalarCoefficient for $ty {
            fn zero() -> Self {
                <Self as Ring>::zero()
            }

            fn one() -> Self {
                <Self as Ring>::one()
            }
        }

        impl StructuralCoefficient for $ty {
            fn zero_like(&self) -> Self {
                <Self as Ring>::zero()
            }

            fn one_like(&self) -> Self {
                <Self as Ring>::one()
            }
        }
    )*};
}

impl_ring_coefficient!(Z, Q);

impl DivCoefficient for Z {
    /// Truncating quotient; exact whenever `rhs` divides `self`.
    fn try_div(&self, rhs: &Self) -> Result<Self, CoefficientError> {
        self.div_rem(rhs)
            .map(|(q, _)| q)
            .ok_or(CoefficientError::NotInvertible)
    }
}

impl DivCoefficient for Q {
    fn try_div(&self, rhs: &Self) -> Result<Self, CoefficientError> {
        self.field_div(rhs).ok_or(CoefficientError::NotInvertible)
    }
}

// Fixed-width integers report overflow instead of wrapping.
macro_rules! impl_int_coefficient {
    ($($ty:ty),*) => {$(
        impl Coefficient for $ty {
            fn is_zero(&self) -> bool {
                Zero::is_zero(self)
            }

            fn try_add(&self, rhs: &Self) -> Result<Self, CoefficientError> {
                CheckedAdd::checked_add(self, rhs).ok_or(CoefficientError::Overflow)
            }

            fn try_mul(&self, rhs: &Self) -> Result<Self, CoefficientError> {
                CheckedMul::checked_mul(self, rhs).ok_or(CoefficientError::Overflow)
            }

            fn try_neg(&self) -> Result<Self, CoefficientError> {
                CheckedNeg::checked_neg(self).ok_or(CoefficientError::Overflow)
            }

            fn scale(&self, k: i64) -> Result<Self, CoefficientError> {
                let k = <$ty>::try_from(k).map_err(|_| CoefficientError::Overflow)?;
                CheckedMul::checked_mul(self, &k).ok_or(CoefficientError::Overflow)
            }
        }

        impl DivCoefficient for $ty {
            fn try_div(&self, rhs: &Self) -> Result<Self, CoefficientError> {
                if Zero::is_zero(rhs) {
                    return Err(CoefficientError::NotInvertible);
                }
                // MIN / -1 is the only other failure.
                CheckedDiv::checked_div(self, rhs).ok_or(CoefficientError::Overflow)
            }
        }

        impl ScalarCoefficient for $ty {
            fn zero() -> Self {
                <Self as Zero>::zero()
            }

            fn one() -> Self {
                <Self as One>::one()
            }
        }

        impl StructuralCoefficient for $ty {
            fn zero_like(&self) -> Self {
                <Self as Zero>::zero()
            }

            fn one_like(&self) -> Self {
                <Self as One>::one()
            }
        }
    )*};
}

impl_int_coefficient!(i32, i64, i128);

macro_rules! impl_float_coefficient {
    ($($ty:ty),*) => {$(
        impl Coefficient for $ty {
            fn is_zero(&self) -> bool {
                Zero::is_zero(self)
            }

            fn try_add(&self, rhs: &Self) -> Result<Self, CoefficientError> {
                Ok(self + rhs)
            }

            fn try_mul(&self, rhs: &Self) -> Result<Self, CoefficientError> {
                Ok(self * rhs)
            }

            fn try_neg(&self) -> Result<Self, CoefficientError> {
                Ok(-self)
            }

            #[allow(clippy::cast_precision_loss)]
            fn scale(&self, k: i64) -> Result<Self, CoefficientError> {
                Ok(self * k as $ty)
            }
        }

        impl DivCoefficient for $ty {
            fn try_div(&self, rhs: &Self) -> Result<Self, CoefficientError> {
                if Zero::is_zero(rhs) {
                    Err(CoefficientError::NotInvertible)
                } else {
                    Ok(self / rhs)
                }
            }
        }

        impl ScalarCoefficient for $ty {
            fn zero() -> Self {
                <Self as Zero>::zero()
            }

            fn one() -> Self {
                <Self as One>::one()
            }
        }

        impl StructuralCoefficient for $ty {
            fn zero_like(&self) -> Self {
                <Self as Zero>::zero()
            }

            fn one_like(&self) -> Self {
                <Self as One>::one()
            }
        }
    )*};
}

impl_float_coefficient!(f32, f64);
