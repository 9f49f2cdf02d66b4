//! Dense matrices as polynomial coefficients.
//!
//! Matrices are the canonical non-commutative, shape-checked coefficient:
//! `a * b != b * a` in general, and adding a 2x2 to a 3x3 is an error the
//! caller can recover from rather than a panic.

use std::ops::{Index, IndexMut};

use rayon::prelude::*;

use sparsa_rings::coefficient::{
    Coefficient, CoefficientError, DivCoefficient, StructuralCoefficient,
};
use sparsa_rings::traits::{Field, Ring};

/// Row count at which multiplication switches to the rayon kernel.
pub const PARALLEL_THRESHOLD: usize = 64;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Errors
    ///
    /// Returns [`CoefficientError::ShapeMismatch`] if the rows have different
    /// lengths, reporting the first row's shape against the offending row's.
    pub fn from_rows(rows: Vec<Vec<R>>) -> Result<Self, CoefficientError> {
        let Some(first) = rows.first() else {
            return Ok(Self::zeros(0, 0));
        };
        let num_rows = rows.len();
        let num_cols = first.len();
        if let Some(ragged) = rows.iter().find(|row| row.len() != num_cols) {
            return Err(CoefficientError::ShapeMismatch {
                left: (1, num_cols),
                right: (1, ragged.len()),
            });
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = R::one();
        }
        m
    }

    /// Creates `c * I`.
    #[must_use]
    pub fn scalar(n: usize, c: &R) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = c.clone();
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Entrywise sum.
    ///
    /// # Errors
    ///
    /// Returns [`CoefficientError::ShapeMismatch`] unless both shapes agree.
    pub fn checked_add(&self, other: &Self) -> Result<Self, CoefficientError> {
        if self.shape() != other.shape() {
            return Err(self.mismatch(other));
        }

        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        })
    }

    /// Matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// Returns [`CoefficientError::ShapeMismatch`] if the inner dimensions differ.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, CoefficientError>
    where
        R: Send + Sync,
    {
        if self.num_cols != other.num_rows {
            return Err(self.mismatch(other));
        }

        if self.num_rows >= PARALLEL_THRESHOLD {
            Ok(self.mm_parallel(other))
        } else {
            Ok(self.mm(other))
        }
    }

    /// Matrix-matrix multiply: C = A * B. Shapes must already agree.
    fn mm(&self, other: &Self) -> Self {
        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = R::zero();
                for k in 0..self.num_cols {
                    sum = sum + self[(i, k)].clone() * other[(k, j)].clone();
                }
                result[(i, j)] = sum;
            }
        }
        result
    }

    /// Row-parallel variant of [`Self::mm`].
    fn mm_parallel(&self, other: &Self) -> Self
    where
        R: Send + Sync,
    {
        let data: Vec<R> = (0..self.num_rows)
            .into_par_iter()
            .flat_map(|i| {
                (0..other.num_cols)
                    .map(|j| {
                        let mut sum = R::zero();
                        for k in 0..self.num_cols {
                            sum = sum + self[(i, k)].clone() * other[(k, j)].clone();
                        }
                        sum
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Self {
            data,
            num_rows: self.num_rows,
            num_cols: other.num_cols,
        }
    }

    /// Applies `f` to every entry.
    #[must_use]
    pub fn map(&self, f: impl Fn(&R) -> R) -> Self {
        Self {
            data: self.data.iter().map(f).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Swaps two rows in-place.
    fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    fn add_scaled_row(&mut self, target: usize, source: usize, scale: &R) {
        for k in 0..self.num_cols {
            let val = scale.clone() * self[(source, k)].clone();
            self[(target, k)] = self[(target, k)].clone() + val;
        }
    }

    /// Scales a row by a scalar from the left.
    fn scale_row(&mut self, row: usize, scale: &R) {
        for k in 0..self.num_cols {
            self[(row, k)] = scale.clone() * self[(row, k)].clone();
        }
    }

    fn mismatch(&self, other: &Self) -> CoefficientError {
        CoefficientError::ShapeMismatch {
            left: self.shape(),
            right: other.shape(),
        }
    }
}

impl<R: Field> DenseMatrix<R> {
    /// Reduced row echelon form by Gauss-Jordan elimination.
    ///
    /// Returns the reduced matrix and its rank.
    #[must_use]
    pub fn rref(&self) -> (Self, usize) {
        let mut m = self.clone();
        let mut pivot_row = 0;

        for pivot_col in 0..m.num_cols {
            if pivot_row == m.num_rows {
                break;
            }

            let Some(found) = (pivot_row..m.num_rows).find(|&row| !m[(row, pivot_col)].is_zero())
            else {
                continue;
            };
            m.swap_rows(pivot_row, found);

            if let Some(inv) = m[(pivot_row, pivot_col)].inv() {
                m.scale_row(pivot_row, &inv);
            }

            for row in 0..m.num_rows {
                if row != pivot_row && !m[(row, pivot_col)].is_zero() {
                    let factor = -m[(row, pivot_col)].clone();
                    m.add_scaled_row(row, pivot_row, &factor);
                }
            }

            pivot_row += 1;
        }

        (m, pivot_row)
    }

    /// Computes the inverse of a square matrix.
    ///
    /// Returns `None` if the matrix is singular or not square.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        if !self.is_square() {
            return None;
        }
        let n = self.num_rows;

        // Augmented matrix [A | I]
        let mut aug = Self::zeros(n, 2 * n);
        for i in 0..n {
            for j in 0..n {
                aug[(i, j)] = self[(i, j)].clone();
            }
            aug[(i, n + i)] = R::one();
        }

        let (rref, _) = aug.rref();

        // A is invertible exactly when the left block reduced to I.
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { R::one() } else { R::zero() };
                if rref[(i, j)] != expected {
                    return None;
                }
            }
        }

        let mut inv = Self::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                inv[(i, j)] = rref[(i, n + j)].clone();
            }
        }

        Some(inv)
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

impl<R: Ring + Send + Sync> Coefficient for DenseMatrix<R> {
    /// A matrix of any shape whose entries are all zero.
    fn is_zero(&self) -> bool {
        self.data.iter().all(Ring::is_zero)
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, CoefficientError> {
        self.checked_add(rhs)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, CoefficientError> {
        self.checked_mul(rhs)
    }

    fn try_neg(&self) -> Result<Self, CoefficientError> {
        Ok(self.map(|x| -x.clone()))
    }

    fn scale(&self, k: i64) -> Result<Self, CoefficientError> {
        let k = R::from_i64(k);
        Ok(self.map(|x| x.clone() * k.clone()))
    }
}

impl<R: Field + Send + Sync> DivCoefficient for DenseMatrix<R> {
    /// Right division `self * rhs⁻¹`.
    fn try_div(&self, rhs: &Self) -> Result<Self, CoefficientError> {
        if !rhs.is_square() {
            return Err(self.mismatch(rhs));
        }
        let inv = rhs.inverse().ok_or(CoefficientError::NotInvertible)?;
        self.checked_mul(&inv)
    }
}

impl<R: Ring + Send + Sync> StructuralCoefficient for DenseMatrix<R> {
    fn zero_like(&self) -> Self {
        Self::zeros(self.num_rows, self.num_cols)
    }

    /// The identity with as many rows as `self`.
    fn one_like(&self) -> Self {
        Self::identity(self.num_rows)
    }
}
