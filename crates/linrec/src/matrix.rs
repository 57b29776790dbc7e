//! Dense square matrices over a prime field
//!
//! Entries live in one contiguous row-major buffer. Multiplication is the
//! plain O(n^3) product with 128-bit accumulators, which dominates the cost
//! of evaluating a recurrence of large order.

use core::fmt::{self, Display};
use core::ops::Index;

use crate::field::ModField;
use crate::pow::{self, Monoid};

/// Accumulators are reduced once they reach this bound. Every product of two
/// residues is below 2^126, so adding one more can never overflow a u128.
const LAZY_REDUCTION_BOUND: u128 = 1 << 127;

/// An n x n matrix of residues
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareMatrix {
    n: usize,
    field: ModField,
    data: Vec<u64>,
}

impl SquareMatrix {
    /// Zero matrix
    pub fn zeros(n: usize, field: ModField) -> Self {
        Self {
            n,
            field,
            data: vec![0; n * n],
        }
    }

    /// Zero matrix with `value` on the diagonal
    pub fn with_diagonal(n: usize, field: ModField, value: u64) -> Self {
        let mut matrix = Self::zeros(n, field);
        let value = field.reduce_u64(value);
        for i in 0..n {
            matrix.data[i * n + i] = value;
        }
        matrix
    }

    /// Identity matrix
    pub fn identity(n: usize, field: ModField) -> Self {
        Self::with_diagonal(n, field, 1)
    }

    /// Build from row-major entries, reducing each one
    ///
    /// # Panics
    /// Panics if `data.len() != n * n`
    pub fn from_vec(n: usize, field: ModField, data: Vec<u64>) -> Self {
        assert_eq!(data.len(), n * n, "expected {} entries", n * n);
        let data = data.into_iter().map(|x| field.reduce_u64(x)).collect();
        Self { n, field, data }
    }

    /// Dimension n
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Field the entries live in
    #[inline]
    pub fn field(&self) -> ModField {
        self.field
    }

    /// Entry at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.data[row * self.n + col]
    }

    /// Set entry at (row, col), reducing the value
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u64) {
        self.data[row * self.n + col] = self.field.reduce_u64(value);
    }

    /// A row as a slice
    #[inline]
    pub fn row(&self, row: usize) -> &[u64] {
        &self.data[row * self.n..(row + 1) * self.n]
    }

    /// Row-major entries
    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.data
    }

    /// Matrix product self * rhs
    ///
    /// # Panics
    /// Panics if the dimensions or moduli differ
    pub fn multiply(&self, rhs: &Self) -> Self {
        assert_eq!(self.n, rhs.n, "dimension mismatch");
        assert_eq!(self.field, rhs.field, "modulus mismatch");

        let n = self.n;
        let mut data = vec![0u64; n * n];

        cfg_if::cfg_if! {
            if #[cfg(feature = "parallel")] {
                use rayon::prelude::*;
                data.par_chunks_mut(n.max(1))
                    .enumerate()
                    .for_each(|(i, out)| self.multiply_row(rhs, i, out));
            } else {
                for (i, out) in data.chunks_mut(n.max(1)).enumerate() {
                    self.multiply_row(rhs, i, out);
                }
            }
        }

        Self {
            n,
            field: self.field,
            data,
        }
    }

    /// Row i of self * rhs, written into `out`
    fn multiply_row(&self, rhs: &Self, i: usize, out: &mut [u64]) {
        let mut acc = vec![0u128; self.n];

        for (k, &a) in self.row(i).iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (slot, &b) in acc.iter_mut().zip(rhs.row(k)) {
                *slot += a as u128 * b as u128;
                if *slot >= LAZY_REDUCTION_BOUND {
                    *slot %= self.field.modulus() as u128;
                }
            }
        }

        for (dst, sum) in out.iter_mut().zip(acc) {
            *dst = self.field.reduce_u128(sum);
        }
    }

    /// Compute self^exp by repeated squaring
    pub fn power(&self, exp: u64) -> Self {
        pow::pow(self, exp)
    }
}

impl Monoid for SquareMatrix {
    fn identity_like(&self) -> Self {
        Self::identity(self.n, self.field)
    }

    fn combine(&self, rhs: &Self) -> Self {
        self.multiply(rhs)
    }
}

impl Index<(usize, usize)> for SquareMatrix {
    type Output = u64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &u64 {
        &self.data[row * self.n + col]
    }
}

impl Display for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            let row: Vec<String> = self.row(i).iter().map(u64::to_string).collect();
            writeln!(f, "[{}]", row.join(", "))?;
        }
        Ok(())
    }
}
