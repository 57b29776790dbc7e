//! Prime field arithmetic with a runtime modulus
//!
//! Residues are plain `u64` values in `[0, p)`. The modulus is restricted to
//! `[2, 2^63)` so that:
//!
//! - the sum of two residues fits in a `u64`,
//! - the product of two residues fits in a `u128` with room for one more
//!   product, which lets matrix kernels reduce lazily.
//!
//! Inverses use Fermat's little theorem, so `p` must be prime. Primality is a
//! caller contract; [`ModField::new_prime`] and [`is_prime`] are there for
//! callers who want it checked.

use core::fmt::{self, Display};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{RecurrenceError, Result};
use crate::pow::{self, Monoid};

/// Exclusive upper bound on supported moduli
pub const MODULUS_LIMIT: u64 = 1 << 63;

/// The usual competitive-programming prime, 10^9 + 7
pub const DEFAULT_MODULUS: u64 = 1_000_000_007;

/// A prime field Z/pZ described by its modulus
///
/// Serialized as the bare modulus; deserialization applies the range check
/// of [`ModField::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
pub struct ModField {
    p: u64,
}

impl TryFrom<u64> for ModField {
    type Error = RecurrenceError;

    fn try_from(modulus: u64) -> Result<Self> {
        Self::new(modulus)
    }
}

impl From<ModField> for u64 {
    #[inline]
    fn from(field: ModField) -> Self {
        field.p
    }
}

impl ModField {
    /// Create a field for `modulus` without checking primality
    pub fn new(modulus: u64) -> Result<Self> {
        if !(2..MODULUS_LIMIT).contains(&modulus) {
            return Err(RecurrenceError::InvalidModulus { modulus });
        }
        Ok(Self { p: modulus })
    }

    /// Create without range checks; `modulus` must lie in [2, 2^63)
    pub(crate) const fn from_modulus_unchecked(modulus: u64) -> Self {
        Self { p: modulus }
    }

    /// Create a field for `modulus`, rejecting composite values
    pub fn new_prime(modulus: u64) -> Result<Self> {
        let field = Self::new(modulus)?;
        if !is_prime(modulus) {
            return Err(RecurrenceError::CompositeModulus { modulus });
        }
        Ok(field)
    }

    /// Get the modulus
    #[inline]
    pub const fn modulus(self) -> u64 {
        self.p
    }

    /// Map any signed integer into [0, p)
    #[inline]
    pub fn reduce(self, x: i64) -> u64 {
        // p < 2^63, so it fits in i64
        x.rem_euclid(self.p as i64) as u64
    }

    /// Map any unsigned integer into [0, p)
    #[inline]
    pub const fn reduce_u64(self, x: u64) -> u64 {
        x % self.p
    }

    /// Reduce a wide accumulator into [0, p)
    #[inline]
    pub const fn reduce_u128(self, x: u128) -> u64 {
        (x % self.p as u128) as u64
    }

    /// Reduce every element of a raw sequence
    pub fn reduce_all(self, values: &[i64]) -> Vec<u64> {
        values.iter().map(|&x| self.reduce(x)).collect()
    }

    /// Addition (inputs must be residues)
    #[inline]
    pub const fn add(self, a: u64, b: u64) -> u64 {
        let sum = a + b;
        if sum >= self.p {
            sum - self.p
        } else {
            sum
        }
    }

    /// Subtraction (inputs must be residues)
    #[inline]
    pub const fn sub(self, a: u64, b: u64) -> u64 {
        if a >= b {
            a - b
        } else {
            a + self.p - b
        }
    }

    /// Negation
    #[inline]
    pub const fn neg(self, a: u64) -> u64 {
        if a == 0 {
            0
        } else {
            self.p - a
        }
    }

    /// Multiplication through a 128-bit intermediate
    #[inline]
    pub const fn mul(self, a: u64, b: u64) -> u64 {
        self.reduce_u128(a as u128 * b as u128)
    }

    /// Square
    #[inline]
    pub const fn square(self, a: u64) -> u64 {
        self.mul(a, a)
    }

    /// Compute a^exp using square-and-multiply
    pub fn pow(self, a: u64, exp: u64) -> u64 {
        pow::pow(&self.element(a), exp).value()
    }

    /// Multiplicative inverse using Fermat's little theorem
    /// a^(-1) = a^(p-2) mod p
    ///
    /// The result is meaningless if `p` is composite.
    ///
    /// # Panics
    /// Panics in debug builds if `a` is zero
    #[inline]
    pub fn inv(self, a: u64) -> u64 {
        debug_assert!(a % self.p != 0, "Cannot invert zero");
        self.pow(a, self.p - 2)
    }

    /// Wrap a value as a field element
    #[inline]
    pub const fn element(self, value: u64) -> Residue {
        Residue {
            value: self.reduce_u64(value),
            field: self,
        }
    }

    /// Zero element
    #[inline]
    pub const fn zero(self) -> Residue {
        Residue { value: 0, field: self }
    }

    /// One element (multiplicative identity)
    #[inline]
    pub const fn one(self) -> Residue {
        Residue { value: 1 % self.p, field: self }
    }
}

impl Display for ModField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z/{}Z", self.p)
    }
}

/// An element of a [`ModField`], carrying its field for operator overloads
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Residue {
    value: u64,
    field: ModField,
}

impl Residue {
    /// Get the inner value
    #[inline]
    pub const fn value(self) -> u64 {
        self.value
    }

    /// Get the field this element lives in
    #[inline]
    pub const fn field(self) -> ModField {
        self.field
    }

    /// Check if zero
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.value == 0
    }

    /// Compute self^exp
    pub fn pow(self, exp: u64) -> Self {
        pow::pow(&self, exp)
    }

    /// Multiplicative inverse
    ///
    /// # Panics
    /// Panics in debug builds if self is zero
    pub fn inv(self) -> Self {
        Self {
            value: self.field.inv(self.value),
            field: self.field,
        }
    }

    #[inline]
    fn with(self, value: u64) -> Self {
        Self { value, field: self.field }
    }
}

impl Monoid for Residue {
    #[inline]
    fn identity_like(&self) -> Self {
        self.field.one()
    }

    #[inline]
    fn combine(&self, rhs: &Self) -> Self {
        *self * *rhs
    }
}

// === Operator implementations ===

impl Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<Residue> for u64 {
    #[inline]
    fn from(value: Residue) -> Self {
        value.value
    }
}

impl Add for Residue {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        debug_assert_eq!(self.field, rhs.field);
        self.with(self.field.add(self.value, rhs.value))
    }
}

impl Sub for Residue {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        debug_assert_eq!(self.field, rhs.field);
        self.with(self.field.sub(self.value, rhs.value))
    }
}

impl Mul for Residue {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        debug_assert_eq!(self.field, rhs.field);
        self.with(self.field.mul(self.value, rhs.value))
    }
}

impl Neg for Residue {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.with(self.field.neg(self.value))
    }
}

impl AddAssign for Residue {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Residue {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Residue {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Deterministic Miller-Rabin for 64-bit integers
///
/// The witness set {2, 3, ..., 37} is exact for every n < 2^64.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for small in [2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37] {
        if n % small == 0 {
            return n == small;
        }
    }

    // Write n-1 = 2^s * d
    let mut d = n - 1;
    let mut s = 0u32;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    let mul = |a: u64, b: u64| (a as u128 * b as u128 % n as u128) as u64;
    let pow_mod = |mut base: u64, mut exp: u64| {
        let mut result = 1u64;
        while exp > 0 {
            if exp & 1 == 1 {
                result = mul(result, base);
            }
            base = mul(base, base);
            exp >>= 1;
        }
        result
    };

    'witness: for a in [2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37] {
        let mut x = pow_mod(a, d);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul(x, x);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }

    true
}
