//! String utilities: Z-array and polynomial prefix hashing
//!
//! Independent of the recurrence engine; they share only the field arithmetic.

use crate::error::{RecurrenceError, Result};
use crate::field::ModField;

/// Z-array in linear time
///
/// `z[i]` is the length of the longest common prefix of `text` and
/// `text[i..]`; `z[0]` is the full length.
pub fn z_function<T: PartialEq>(text: &[T]) -> Vec<usize> {
    let n = text.len();
    let mut z = vec![0usize; n];
    if n == 0 {
        return z;
    }

    // [l, r) is the rightmost window known to match a prefix
    let (mut l, mut r) = (0usize, 0usize);
    for i in 1..n {
        let mut len = if i < r { z[i - l].min(r - i) } else { 0 };
        while i + len < n && text[len] == text[i + len] {
            len += 1;
        }
        if i + len > r {
            l = i;
            r = i + len;
        }
        z[i] = len;
    }

    z[0] = n;
    z
}

/// Hash base used by [`HashParams::default`]
pub const DEFAULT_BASE: u64 = 997;

/// Hash modulus used by [`HashParams::default`]
pub const DEFAULT_HASH_MODULUS: u64 = 1_000_000_000_000_000_003;

/// Longest text supported by [`HashParams::default`]
pub const DEFAULT_MAX_LENGTH: usize = 100_000;

/// Offset added to every byte so that no symbol hashes to zero
const SYMBOL_OFFSET: u64 = 13;

/// Base, modulus and precomputed powers shared by many [`PrefixHash`]es
///
/// Build it once and pass it by reference to every hash that should be
/// comparable; hashes built from different parameters are unrelated.
#[derive(Clone, Debug)]
pub struct HashParams {
    base: u64,
    field: ModField,
    powers: Vec<u64>,
}

impl HashParams {
    /// Precompute base^0..=base^(max_length + 1)
    pub fn new(base: u64, modulus: u64, max_length: usize) -> Result<Self> {
        Ok(Self::with_field(base, ModField::new(modulus)?, max_length))
    }

    fn with_field(base: u64, field: ModField, max_length: usize) -> Self {
        let base = field.reduce_u64(base);
        let mut powers = Vec::with_capacity(max_length + 2);
        powers.push(1);
        for i in 1..max_length + 2 {
            powers.push(field.mul(powers[i - 1], base));
        }
        Self { base, field, powers }
    }

    /// Longest text these parameters can hash
    pub fn max_length(&self) -> usize {
        self.powers.len() - 2
    }

    /// Hash base
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Hash modulus
    pub fn modulus(&self) -> u64 {
        self.field.modulus()
    }
}

impl Default for HashParams {
    fn default() -> Self {
        let field = ModField::from_modulus_unchecked(DEFAULT_HASH_MODULUS);
        Self::with_field(DEFAULT_BASE, field, DEFAULT_MAX_LENGTH)
    }
}

/// O(1) substring hashes of a fixed text
#[derive(Clone, Debug)]
pub struct PrefixHash<'a> {
    params: &'a HashParams,
    prefix: Vec<u64>,
}

impl<'a> PrefixHash<'a> {
    /// Hash every prefix of `text`
    pub fn new(params: &'a HashParams, text: &[u8]) -> Result<Self> {
        if text.len() > params.max_length() {
            return Err(RecurrenceError::TextTooLong {
                len: text.len(),
                capacity: params.max_length(),
            });
        }

        let field = params.field;
        let mut prefix = Vec::with_capacity(text.len() + 1);
        prefix.push(0);
        for (i, &byte) in text.iter().enumerate() {
            let shifted = field.mul(prefix[i], params.base);
            prefix.push(field.add(shifted, field.reduce_u64(byte as u64 + SYMBOL_OFFSET)));
        }

        Ok(Self { params, prefix })
    }

    /// Length of the hashed text
    pub fn len(&self) -> usize {
        self.prefix.len() - 1
    }

    /// Whether the hashed text is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hash of the inclusive byte range [l, r]
    pub fn query(&self, l: usize, r: usize) -> Result<u64> {
        let len = self.len();
        if l > r || r >= len {
            return Err(RecurrenceError::InvalidRange { l, r, len });
        }
        let field = self.params.field;
        let shifted = field.mul(self.params.powers[r - l + 1], self.prefix[l]);
        Ok(field.sub(self.prefix[r + 1], shifted))
    }
}
