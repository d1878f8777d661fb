//! Modular exponentiation.

use num_traits::{One, Zero};
use smallvec::smallvec;

use crate::digits::{self, Magnitude};
use crate::error::{ArithError, Result};
use crate::integer::{Integer, Sign};

/// Reduces a product of two residues modulo `m`.
fn mul_mod(a: &[u64], b: &[u64], m: &[u64]) -> Magnitude {
    digits::div_rem(&digits::mul(a, b), m).1
}

impl Integer {
    /// Computes `self^exponent mod modulus` by binary exponentiation.
    ///
    /// Every product is reduced immediately, so intermediates stay below
    /// `modulus^2`. The result lies in `[0, modulus)`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::NegativeExponent`] if `exponent < 0` and
    /// [`ArithError::NonPositiveModulus`] if `modulus <= 0`.
    pub fn mod_exp(&self, exponent: &Self, modulus: &Self) -> Result<Self> {
        if exponent.is_negative() {
            return Err(ArithError::NegativeExponent);
        }
        if !modulus.is_positive() {
            return Err(ArithError::NonPositiveModulus);
        }
        if modulus.is_one() {
            return Ok(Self::zero());
        }

        let m = modulus.magnitude();
        let mut base = Magnitude::from_slice(self.modulo(modulus)?.magnitude());
        let mut result: Magnitude = smallvec![1];
        let bits = exponent.bit_len();

        for i in 0..bits {
            if digits::test_bit(exponent.magnitude(), i) {
                result = mul_mod(&result, &base, m);
            }
            if i + 1 < bits {
                base = mul_mod(&base, &base, m);
            }
        }

        Ok(Self::from_parts(Sign::Plus, result))
    }
}
