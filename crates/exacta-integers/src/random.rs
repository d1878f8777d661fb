//! Uniform random integers.
//!
//! The engine keeps no global generator. Callers either pass any
//! [`rand::Rng`] to [`Integer::random`] or own a [`RandomState`], which
//! remembers its seed so a stream can be restarted.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::digits::{self, Digit, Magnitude, DIGIT_BITS};
use crate::error::{ArithError, Result};
use crate::integer::{Integer, Sign};

/// A seeded random stream.
#[derive(Clone, Debug)]
pub struct RandomState {
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomState {
    /// Creates a stream from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The seed the stream was last started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restarts the stream from `seed`.
    pub fn set_seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Draws a uniform value in `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::NonPositiveBound`] if `bound <= 0`.
    pub fn random_below(&mut self, bound: &Integer) -> Result<Integer> {
        Integer::random(bound, &mut self.rng)
    }
}

impl Default for RandomState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Integer {
    /// Draws a uniform value in `[0, bound)` from `rng`.
    ///
    /// Candidates with the bit length of `bound` are drawn until one falls
    /// below it, which takes fewer than two draws on average.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::NonPositiveBound`] if `bound <= 0`.
    pub fn random<R: Rng + ?Sized>(bound: &Self, rng: &mut R) -> Result<Self> {
        if !bound.is_positive() {
            return Err(ArithError::NonPositiveBound);
        }

        let bits = bound.bit_len();
        let len = bound.magnitude().len();
        let top_bits = (bits % u64::from(DIGIT_BITS)) as u32;
        let top_mask: Digit = if top_bits == 0 {
            Digit::MAX
        } else {
            (1 << top_bits) - 1
        };

        let mut rejected = 0u32;
        loop {
            let mut candidate: Magnitude = (0..len).map(|_| RngCore::next_u64(rng)).collect();
            candidate[len - 1] &= top_mask;
            digits::trim(&mut candidate);

            if digits::cmp(&candidate, bound.magnitude()).is_lt() {
                return Ok(Self::from_parts(Sign::Plus, candidate));
            }
            rejected += 1;
            tracing::trace!(rejected, bits, "random candidate above bound, redrawing");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn test_values_below_bound() {
        let mut state = RandomState::new(42);
        let bound = Integer::new(10).pow(30).unwrap();
        for _ in 0..200 {
            let r = state.random_below(&bound).unwrap();
            assert!(!r.is_negative());
            assert!(r < bound);
        }
    }

    #[test]
    fn test_seed_replays_stream() {
        let bound = Integer::from(u64::MAX) * Integer::new(3);
        let mut a = RandomState::new(7);
        let first: Vec<Integer> = (0..5).map(|_| a.random_below(&bound).unwrap()).collect();

        a.set_seed(7);
        assert_eq!(a.seed(), 7);
        let again: Vec<Integer> = (0..5).map(|_| a.random_below(&bound).unwrap()).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_roughly_uniform() {
        let mut state = RandomState::new(1);
        let bound = Integer::new(10);
        let mut counts = [0u32; 10];
        for _ in 0..10_000 {
            let r = state.random_below(&bound).unwrap().to_u64().unwrap();
            counts[r as usize] += 1;
        }
        for count in counts {
            assert!((800..1200).contains(&count), "{counts:?}");
        }
    }

    #[test]
    fn test_unit_bound() {
        let mut state = RandomState::default();
        assert!(state.random_below(&Integer::new(1)).unwrap().is_zero());
    }

    #[test]
    fn test_rejects_non_positive_bound() {
        let mut state = RandomState::default();
        assert_eq!(
            state.random_below(&Integer::zero()),
            Err(ArithError::NonPositiveBound)
        );
        assert_eq!(
            state.random_below(&Integer::new(-5)),
            Err(ArithError::NonPositiveBound)
        );
    }

    #[test]
    fn test_accepts_any_rng() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let r = Integer::random(&Integer::new(1000), &mut rng).unwrap();
        assert!(r < Integer::new(1000));
    }
}
