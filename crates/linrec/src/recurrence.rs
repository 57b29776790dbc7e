//! Linear recurrences and far-term evaluation
//!
//! A [`Recurrence`] of order K is stored as its connection coefficients
//! v_1..v_K, i.e. s_i + v_1 s_{i-1} + ... + v_K s_{i-K} = 0. Term t is
//! evaluated by raising the K x K companion matrix to the power t - n + 1
//! and applying its first row to the last K known terms.

use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use crate::berlekamp_massey::berlekamp_massey;
use crate::config::SolverConfig;
use crate::error::{RecurrenceError, Result};
use crate::field::ModField;
use crate::matrix::SquareMatrix;

/// A linear recurrence over a prime field
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RecurrenceRepr", into = "RecurrenceRepr"))]
pub struct Recurrence {
    field: ModField,
    connection: Vec<u64>,
}

/// Wire form of [`Recurrence`]; coefficients are reduced on the way in
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RecurrenceRepr {
    field: ModField,
    connection: Vec<u64>,
}

#[cfg(feature = "serde")]
impl From<RecurrenceRepr> for Recurrence {
    fn from(repr: RecurrenceRepr) -> Self {
        Self::from_connection(repr.field, repr.connection)
    }
}

#[cfg(feature = "serde")]
impl From<Recurrence> for RecurrenceRepr {
    fn from(recurrence: Recurrence) -> Self {
        Self {
            field: recurrence.field,
            connection: recurrence.connection,
        }
    }
}

impl Recurrence {
    /// Create from connection coefficients v_1..v_K
    pub fn from_connection(field: ModField, connection: Vec<u64>) -> Self {
        let connection = connection.into_iter().map(|v| field.reduce_u64(v)).collect();
        Self { field, connection }
    }

    /// Create from coefficients c_1..c_K of s_i = c_1 s_{i-1} + ... + c_K s_{i-K}
    pub fn from_coefficients(field: ModField, coefficients: &[u64]) -> Self {
        let connection = coefficients
            .iter()
            .map(|&c| field.neg(field.reduce_u64(c)))
            .collect();
        Self { field, connection }
    }

    /// Order K
    #[inline]
    pub fn order(&self) -> usize {
        self.connection.len()
    }

    /// Field the recurrence is defined over
    #[inline]
    pub fn field(&self) -> ModField {
        self.field
    }

    /// Connection coefficients v_1..v_K
    #[inline]
    pub fn connection(&self) -> &[u64] {
        &self.connection
    }

    /// Coefficients c_1..c_K with s_i = sum c_j s_{i-j}
    pub fn coefficients(&self) -> Vec<u64> {
        self.connection.iter().map(|&v| self.field.neg(v)).collect()
    }

    /// The term following `window`, which must hold at least K terms
    ///
    /// # Panics
    /// Panics if `window` is shorter than the order
    pub fn next_term(&self, window: &[u64]) -> u64 {
        let n = window.len();
        assert!(n >= self.order(), "window shorter than recurrence order");
        self.connection
            .iter()
            .enumerate()
            .fold(0, |acc, (j, &v)| {
                self.field.sub(acc, self.field.mul(v, window[n - 1 - j]))
            })
    }

    /// Unroll `count` more terms after `prefix`, one step at a time
    pub fn extend(&self, prefix: &[u64], count: usize) -> Vec<u64> {
        let mut terms = prefix.to_vec();
        terms.reserve(count);
        for _ in 0..count {
            let next = self.next_term(&terms);
            terms.push(next);
        }
        terms.split_off(prefix.len())
    }

    /// Whether every term of `sequence` from index K on obeys the recurrence
    pub fn satisfies(&self, sequence: &[u64]) -> bool {
        (self.order()..sequence.len()).all(|i| self.next_term(&sequence[..i]) == sequence[i])
    }

    /// K x K companion matrix: the coefficients on row 0, ones on the subdiagonal
    pub fn companion_matrix(&self) -> SquareMatrix {
        let k = self.order();
        let mut matrix = SquareMatrix::zeros(k, self.field);
        for (i, &v) in self.connection.iter().enumerate() {
            matrix.set(0, i, self.field.neg(v));
            if i > 0 {
                matrix.set(i, i - 1, 1);
            }
        }
        matrix
    }

    /// Term `target` of the sequence that starts with `prefix`
    ///
    /// # Panics
    /// Panics if the prefix is shorter than the order and `target` lies past it
    pub fn nth_term(&self, prefix: &[u64], target: u64) -> u64 {
        let n = prefix.len();
        if target < n as u64 {
            return self.field.reduce_u64(prefix[target as usize]);
        }
        let k = self.order();
        assert!(n >= k, "prefix shorter than recurrence order");

        let exp = target - n as u64 + 1;
        let advanced = self.companion_matrix().power(exp);
        advanced
            .row(0)
            .iter()
            .zip(prefix.iter().rev())
            .fold(0, |acc, (&m, &s)| self.field.add(acc, self.field.mul(m, s)))
    }
}

/// Find the minimal recurrence of a raw sequence
///
/// Values are reduced into the field first; the length must be even and
/// non-zero.
pub fn find_recurrence(sequence: &[i64], field: ModField) -> Result<Recurrence> {
    let reduced = field.reduce_all(sequence);
    let connection = berlekamp_massey(&reduced, field)?;
    Ok(Recurrence { field, connection })
}

/// Term `target_index` of the recurrence sampled by `sequence`, modulo `modulus`
///
/// `modulus` must be prime (not checked; see [`SolverConfig::strict`]). If
/// the true recurrence has order K, `sequence` must hold at least 2K terms.
pub fn solve_linear_recurrence(sequence: &[i64], target_index: u64, modulus: u64) -> Result<u64> {
    RecurrenceSolver::new(SolverConfig::fast(modulus))?.solve(sequence, target_index)
}

/// Recovers recurrences and evaluates far terms under one configuration
#[derive(Clone, Debug)]
pub struct RecurrenceSolver {
    config: SolverConfig,
    field: ModField,
}

impl RecurrenceSolver {
    /// Create a solver, validating the configured modulus
    pub fn new(config: SolverConfig) -> Result<Self> {
        let field = config.field()?;
        Ok(Self { config, field })
    }

    /// Create with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(SolverConfig::default())
    }

    /// The configuration in use
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The field in use
    pub fn field(&self) -> ModField {
        self.field
    }

    /// Find the minimal recurrence of `sequence`
    pub fn find(&self, sequence: &[i64]) -> Result<Recurrence> {
        let _span = info_span!("find", modulus = self.field.modulus()).entered();

        let start = Instant::now();
        let recurrence = find_recurrence(sequence, self.field)?;
        info!(
            samples = sequence.len(),
            order = recurrence.order(),
            elapsed_us = %start.elapsed().as_micros(),
            "berlekamp_massey"
        );
        Ok(recurrence)
    }

    /// Term `target` of the sequence sampled by `sequence`
    pub fn solve(&self, sequence: &[i64], target: u64) -> Result<u64> {
        let _span = info_span!("solve", modulus = self.field.modulus(), index = target).entered();

        let n = sequence.len();
        if n == 0 || n % 2 != 0 {
            return Err(RecurrenceError::invalid_length(n));
        }

        let reduced = self.field.reduce_all(sequence);
        if target < n as u64 {
            debug!(index = target, "target inside known prefix");
            return Ok(reduced[target as usize]);
        }

        let start = Instant::now();
        let connection = berlekamp_massey(&reduced, self.field)?;
        let recurrence = Recurrence {
            field: self.field,
            connection,
        };
        debug!(order = recurrence.order(), elapsed_us = %start.elapsed().as_micros(), "berlekamp_massey");

        let start = Instant::now();
        let value = recurrence.nth_term(&reduced, target);
        info!(
            order = recurrence.order(),
            elapsed_us = %start.elapsed().as_micros(),
            "companion_power"
        );
        Ok(value)
    }
}
