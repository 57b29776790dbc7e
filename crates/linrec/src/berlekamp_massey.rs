//! Berlekamp-Massey over a prime field
//!
//! Given s_0, ..., s_{n-1}, finds the shortest connection polynomial
//! C(x) = 1 + v_1 x + ... + v_L x^L such that
//!
//!   s_i + v_1 s_{i-1} + ... + v_L s_{i-L} = 0   for all L <= i < n.
//!
//! The sample length must be even so that a recurrence of order K is
//! recoverable from 2K terms.

use itertools::Itertools;
use tracing::{debug, trace};

use crate::error::{RecurrenceError, Result};
use crate::field::ModField;

/// Find the minimal connection coefficients v_1..v_L of a sequence
///
/// Elements are reduced into [0, p) first. The result is empty when the
/// sequence is identically zero modulo p.
pub fn berlekamp_massey(sequence: &[u64], field: ModField) -> Result<Vec<u64>> {
    let n = sequence.len();
    if n == 0 || n % 2 != 0 {
        return Err(RecurrenceError::invalid_length(n));
    }
    let sequence: Vec<u64> = sequence.iter().map(|&x| field.reduce_u64(x)).collect();

    // u: connection polynomial as it was before the last length change
    // v: current connection polynomial
    let mut u = vec![1u64];
    let mut v = vec![0u64; n + 1];
    v[0] = 1;

    let mut l = 0usize;
    let mut m = 1usize;
    let mut b = 1u64;
    let mut deg = 0usize;

    for i in 0..n {
        let d = discrepancy(&v, &sequence, i, l, field);

        if d == 0 {
            m += 1;
            continue;
        }

        let grows = 2 * l <= i;
        let snapshot = grows.then(|| v[..=l].to_vec());

        // v(x) -= (d / b) * x^m * u(x)
        let x = field.mul(field.neg(d), field.inv(b));
        if v.len() < m + deg + 1 {
            v.resize(m + deg + 1, 0);
        }
        for (j, &uj) in u.iter().enumerate().take(deg + 1) {
            v[m + j] = field.add(v[m + j], field.mul(x, uj));
        }

        match snapshot {
            Some(previous) => {
                u = previous;
                deg = u.len() - 1;
                b = d;
                m = 1;
                l = i - l + 1;
                debug!(step = i, order = l, "recurrence order increased");
            }
            None => {
                m += 1;
                trace!(step = i, order = l, "recurrence corrected");
            }
        }
    }

    if v.len() < l + 1 {
        v.resize(l + 1, 0);
    }
    v.truncate(l + 1);
    v.remove(0);
    Ok(v)
}

/// d = s_i + sum_{j=1..l} v_j * s_{i-j}
fn discrepancy(v: &[u64], sequence: &[u64], i: usize, l: usize, field: ModField) -> u64 {
    if l == 0 {
        return sequence[i];
    }
    let window = sequence[i - l..i].iter().rev();
    let correction = convolution(&v[1..=l], window, field);
    field.add(sequence[i], correction)
}

/// Modular inner product of two equally long sequences
///
/// # Panics
/// Panics if the lengths differ
fn convolution<'a>(
    coefficients: &[u64],
    values: impl Iterator<Item = &'a u64> + ExactSizeIterator,
    field: ModField,
) -> u64 {
    coefficients
        .iter()
        .zip_eq(values)
        .fold(0, |acc, (&c, &s)| field.add(acc, field.mul(c, s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::DEFAULT_MODULUS;

    fn field() -> ModField {
        ModField::new(DEFAULT_MODULUS).unwrap()
    }

    #[test]
    fn test_rejects_bad_lengths() {
        let f = field();
        assert_eq!(
            berlekamp_massey(&[], f),
            Err(RecurrenceError::InvalidSequenceLength { len: 0 })
        );
        assert_eq!(
            berlekamp_massey(&[1, 2, 3], f),
            Err(RecurrenceError::InvalidSequenceLength { len: 3 })
        );
    }

    #[test]
    fn test_fibonacci() {
        let f = field();
        let v = berlekamp_massey(&[0, 1, 1, 2, 3, 5, 8, 13], f).unwrap();
        // s_i - s_{i-1} - s_{i-2} = 0
        assert_eq!(v, vec![DEFAULT_MODULUS - 1, DEFAULT_MODULUS - 1]);
    }

    #[test]
    fn test_geometric() {
        let f = field();
        let v = berlekamp_massey(&[3, 6, 12, 24], f).unwrap();
        assert_eq!(v, vec![DEFAULT_MODULUS - 2]);
    }

    #[test]
    fn test_all_zero() {
        let v = berlekamp_massey(&[0, 0, 0, 0, 0, 0], field()).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_impulse() {
        // 0, 0, 0, 1: no recurrence shorter than the sample fits
        let v = berlekamp_massey(&[0, 0, 0, 1], field()).unwrap();
        assert_eq!(v, vec![0, 0, 0, DEFAULT_MODULUS - 1]);
    }

    #[test]
    fn test_zero_discrepancy_run() {
        // s_i = s_{i-3}: two zero coefficients
        let f = field();
        let seq = [1, 2, 3, 1, 2, 3, 1, 2, 3, 1];
        let v = berlekamp_massey(&seq, f).unwrap();
        assert_eq!(v, vec![0, 0, DEFAULT_MODULUS - 1]);
    }

    #[test]
    fn test_unreduced_input() {
        let f = ModField::new(7).unwrap();
        // same as 0, 0, 0, 1
        assert_eq!(berlekamp_massey(&[7, 14, 0, 1], f), Ok(vec![0, 0, 0, 6]));
        // u64::MAX = 1 mod 7
        assert_eq!(berlekamp_massey(&[u64::MAX, 1], f), Ok(vec![6]));
    }

    #[test]
    fn test_convolution() {
        let f = field();
        let values = [4u64, 5, 6];
        assert_eq!(convolution(&[1, 2, 3], values.iter(), f), 32);
    }
}
