//! Linrec - linear recurrences over prime fields
//!
//! Given an even-length prefix of a sequence that obeys an unknown linear
//! recurrence modulo a prime, this crate recovers the minimal recurrence with
//! Berlekamp-Massey and evaluates arbitrarily distant terms with
//! companion-matrix exponentiation.
//!
//! # Features
//!
//! - `parallel` - Compute matrix product rows in parallel with rayon
//! - `serde` - Derive `Serialize`/`Deserialize` for configs and recurrences
//!
//! # Components
//!
//! - `field` - Prime field arithmetic with a runtime modulus
//! - `pow` - Generic square-and-multiply
//! - `matrix` - Dense square matrices over the field
//! - `berlekamp_massey` - Minimal recurrence discovery
//! - `recurrence` - Recurrence type, far-term evaluation, solver
//! - `config` - Solver configuration
//! - `text` - Z-array and prefix hashing (independent of the rest)
//!
//! # Example
//!
//! ```
//! use linrec::solve_linear_recurrence;
//!
//! let fib = [0, 1, 1, 2, 3, 5, 8, 13];
//! assert_eq!(solve_linear_recurrence(&fib, 10, 1_000_000_007), Ok(55));
//! ```

pub mod berlekamp_massey;
pub mod config;
pub mod error;
pub mod field;
pub mod matrix;
pub mod pow;
pub mod recurrence;
pub mod text;

// Re-exports for convenience
pub use berlekamp_massey::berlekamp_massey;
pub use config::SolverConfig;
pub use error::{RecurrenceError, Result};
pub use field::{is_prime, ModField, Residue, DEFAULT_MODULUS};
pub use matrix::SquareMatrix;
pub use recurrence::{find_recurrence, solve_linear_recurrence, Recurrence, RecurrenceSolver};
pub use text::{z_function, HashParams, PrefixHash};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::SolverConfig;
    pub use crate::error::RecurrenceError;
    pub use crate::field::ModField;
    pub use crate::matrix::SquareMatrix;
    pub use crate::recurrence::{solve_linear_recurrence, Recurrence, RecurrenceSolver};
}
