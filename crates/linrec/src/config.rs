//! Solver configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::{ModField, DEFAULT_MODULUS};

/// Solver configuration
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// Prime modulus all arithmetic is done in
    pub modulus: u64,
    /// Reject composite moduli with a Miller-Rabin test before solving
    pub verify_modulus: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            modulus: DEFAULT_MODULUS,
            verify_modulus: false,
        }
    }
}

impl SolverConfig {
    /// Create a new solver config
    pub fn new(modulus: u64, verify_modulus: bool) -> Self {
        Self {
            modulus,
            verify_modulus,
        }
    }

    /// Primality of the modulus is checked up front
    pub fn strict(modulus: u64) -> Self {
        Self::new(modulus, true)
    }

    /// Primality of the modulus is the caller's responsibility
    pub fn fast(modulus: u64) -> Self {
        Self::new(modulus, false)
    }

    /// Build the field described by this config
    pub fn field(&self) -> Result<ModField> {
        if self.verify_modulus {
            ModField::new_prime(self.modulus)
        } else {
            ModField::new(self.modulus)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecurrenceError;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.modulus, 1_000_000_007);
        assert!(!config.verify_modulus);
        assert_eq!(config.field().unwrap().modulus(), 1_000_000_007);
    }

    #[test]
    fn test_strict_rejects_composite() {
        assert_eq!(
            SolverConfig::strict(21).field(),
            Err(RecurrenceError::CompositeModulus { modulus: 21 })
        );
        // unchecked configs accept it; inverses are then meaningless
        assert!(SolverConfig::fast(21).field().is_ok());
    }

    #[test]
    fn test_out_of_range_modulus() {
        assert_eq!(
            SolverConfig::fast(1).field(),
            Err(RecurrenceError::InvalidModulus { modulus: 1 })
        );
    }
}
