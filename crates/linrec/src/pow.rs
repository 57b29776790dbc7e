//! Binary exponentiation shared by scalars and matrices
//!
//! Anything with an associative product and a multiplicative identity of
//! matching shape can be raised to a `u64` power in `O(log e)` products.

/// Trait for multiplicative monoids (enables generic exponentiation)
pub trait Monoid: Clone {
    /// Multiplicative identity with the same shape (and modulus) as `self`
    fn identity_like(&self) -> Self;

    /// Associative product
    fn combine(&self, rhs: &Self) -> Self;

    /// Square (same as combine with self unless overridden)
    #[inline]
    fn square(&self) -> Self {
        self.combine(self)
    }
}

/// Compute base^exp using square-and-multiply
///
/// The identity is the accumulator, so `exp == 0` returns the identity
/// regardless of `base`.
pub fn pow<T: Monoid>(base: &T, mut exp: u64) -> T {
    let mut result = base.identity_like();
    let mut base = base.clone();

    while exp > 0 {
        if exp & 1 == 1 {
            result = result.combine(&base);
        }
        exp >>= 1;
        if exp > 0 {
            base = base.square();
        }
    }

    result
}
