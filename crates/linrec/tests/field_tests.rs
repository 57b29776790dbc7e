//! Tests for prime field arithmetic

use linrec::field::{is_prime, ModField, DEFAULT_MODULUS, MODULUS_LIMIT};
use linrec::RecurrenceError;

const P: u64 = DEFAULT_MODULUS;

fn field() -> ModField {
    ModField::new(P).unwrap()
}

#[test]
fn test_field_constants() {
    assert_eq!(DEFAULT_MODULUS, 1_000_000_007);
    assert_eq!(MODULUS_LIMIT, 1 << 63);
    assert_eq!(field().zero().value(), 0);
    assert_eq!(field().one().value(), 1);
    assert_eq!(field().to_string(), "Z/1000000007Z");
}

#[test]
fn test_addition() {
    let f = field();

    // Basic addition
    assert_eq!(f.add(10, 20), 30);

    // Addition with wraparound
    assert_eq!(f.add(P - 10, 20), 10);

    // Commutativity and associativity
    let (x, y, z) = (123, 456, 789);
    assert_eq!(f.add(x, y), f.add(y, x));
    assert_eq!(f.add(f.add(x, y), z), f.add(x, f.add(y, z)));
}

#[test]
fn test_subtraction() {
    let f = field();
    assert_eq!(f.sub(30, 10), 20);
    assert_eq!(f.add(f.sub(10, 20), 20), 10);
    assert_eq!(f.sub(0, 1), P - 1);
}

#[test]
fn test_multiplication() {
    let f = field();
    assert_eq!(f.mul(6, 7), 42);
    assert_eq!(f.mul(12345, 0), 0);
    assert_eq!(f.mul(12345, 1), 12345);

    // (p-1)^2 = p^2 - 2p + 1 ≡ 1 (mod p)
    assert_eq!(f.mul(P - 1, P - 1), 1);

    let (x, y, z) = (123, 456, 789);
    assert_eq!(f.mul(f.mul(x, y), z), f.mul(x, f.mul(y, z)));
}

#[test]
fn test_products_past_u64() {
    // products of residues overflow u64 long before the modulus limit
    let f = ModField::new((1 << 61) - 1).unwrap();
    let a = (1 << 60) + 12345;
    let b = (1 << 59) + 678;
    let expected = ((a as u128 * b as u128) % ((1u128 << 61) - 1)) as u64;
    assert_eq!(f.mul(a, b), expected);
}

#[test]
fn test_negation() {
    let f = field();
    assert_eq!(f.add(100, f.neg(100)), 0);
    assert_eq!(f.neg(0), 0);
    assert_eq!(f.neg(f.neg(100)), 100);
    assert_eq!(f.neg(P - 1), 1);
}

#[test]
fn test_reduce() {
    let f = field();
    assert_eq!(f.reduce(P as i64), 0);
    assert_eq!(f.reduce(P as i64 + 1), 1);
    assert_eq!(f.reduce(-1), P - 1);
    assert_eq!(f.reduce(-(P as i64) - 5), P - 5);
    assert!(f.reduce(i64::MAX) < P);
    assert!(f.reduce_u128(u128::MAX) < P);
    assert_eq!(f.reduce_all(&[-1, 0, 1]), vec![P - 1, 0, 1]);
}

#[test]
fn test_inverse() {
    let f = field();
    for val in [1, 2, 3, 42, 1000, 999_999, 7, 13, 65537, 524_287, P - 1] {
        assert_eq!(f.mul(val, f.inv(val)), 1, "Inverse failed for {}", val);
    }
}

#[test]
fn test_inverse_large_modulus() {
    let f = ModField::new((1 << 61) - 1).unwrap();
    for val in [2, 3, 1 << 40, f.modulus() - 2] {
        assert_eq!(f.mul(val, f.inv(val)), 1, "Inverse failed for {}", val);
    }
}

#[test]
fn test_pow() {
    let f = field();
    assert_eq!(f.pow(2, 0), 1);
    assert_eq!(f.pow(2, 1), 2);
    assert_eq!(f.pow(2, 20), 1_048_576);

    // Fermat's little theorem: a^(p-1) = 1, a^p = a
    assert_eq!(f.pow(12345, P - 1), 1);
    assert_eq!(f.pow(12345, P), 12345);

    // 0^n = 0 for n > 0
    assert_eq!(f.pow(0, 5), 0);
}

#[test]
fn test_square() {
    let f = field();
    for val in [0, 1, 2, 3, 10, 100, 1000, P - 1] {
        assert_eq!(f.square(val), f.mul(val, val), "Square mismatch for {}", val);
    }
}

#[test]
fn test_residue_operators() {
    let f = field();
    let a = f.element(7);
    let b = f.element(11);
    let c = f.element(13);

    // a * (b + c) = a*b + a*c
    assert_eq!(a * (b + c), a * b + a * c);
    assert_eq!((a - b + b).value(), 7);
    assert_eq!((-f.one() + f.one()).value(), 0);
    assert_eq!(f.element(P + 3).value(), 3);
    assert!(f.zero().is_zero());
    assert_eq!(u64::from(a.pow(2)), 49);
    assert_eq!((b * b.inv()).value(), 1);
}

#[test]
fn test_modulus_validation() {
    assert_eq!(ModField::new(0), Err(RecurrenceError::InvalidModulus { modulus: 0 }));
    assert_eq!(ModField::new(1), Err(RecurrenceError::InvalidModulus { modulus: 1 }));
    assert!(ModField::new(u64::MAX).is_err());
    assert!(ModField::new_prime(998_244_353).is_ok());
    assert_eq!(
        ModField::new_prime(1 << 20),
        Err(RecurrenceError::CompositeModulus { modulus: 1 << 20 })
    );
}

#[test]
fn test_primality() {
    let primes = [2u64, 3, 7, 97, 7919, 998_244_353, P, 1_000_000_009, (1 << 61) - 1];
    for p in primes {
        assert!(is_prime(p), "{} is prime", p);
    }

    // Carmichael numbers and products of two large primes
    let composites = [1u64, 561, 1105, 41041, 825_265, P * 3, 1_000_000_007 * 998_244_353];
    for n in composites {
        assert!(!is_prime(n), "{} is composite", n);
    }
}
