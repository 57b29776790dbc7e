//! Errors returned by the library.

use thiserror::Error;

/// Errors reported before any recurrence work is done.
///
/// Contract violations that cannot be expressed as bad input (inverting zero,
/// multiplying matrices of different shapes) are panics, not variants here.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RecurrenceError {
    /// returned if the sample sequence is empty or has odd length
    #[error("sequence length must be even and non-zero, got {len}")]
    InvalidSequenceLength {
        /// Length of the rejected sequence
        len: usize,
    },
    /// returned if the modulus is below 2 or does not fit the wide-multiply path
    #[error("modulus {modulus} is out of range [2, 2^63)")]
    InvalidModulus {
        /// The rejected modulus
        modulus: u64,
    },
    /// returned if primality verification is enabled and the modulus is composite
    #[error("modulus {modulus} is not prime")]
    CompositeModulus {
        /// The rejected modulus
        modulus: u64,
    },
    /// returned if a prefix hash is built over more bytes than its power table covers
    #[error("text of length {len} exceeds the hash table capacity {capacity}")]
    TextTooLong {
        /// Length of the text
        len: usize,
        /// Longest text the table supports
        capacity: usize,
    },
    /// returned if a substring query is empty or reaches past the end of the text
    #[error("invalid substring range [{l}, {r}] for text of length {len}")]
    InvalidRange {
        /// Inclusive start
        l: usize,
        /// Inclusive end
        r: usize,
        /// Length of the text
        len: usize,
    },
}

impl RecurrenceError {
    /// Create an invalid sequence length error
    pub fn invalid_length(len: usize) -> Self {
        Self::InvalidSequenceLength { len }
    }
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, RecurrenceError>;
