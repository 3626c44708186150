//! Deterministic random number generation for simulated players.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: One match seed yields an independent stream per player
//!
//! ```
//! use pool_score::core::GameRng;
//!
//! let mut match_rng = GameRng::new(42);
//! let mut first = match_rng.fork();
//! let mut second = match_rng.fork();
//!
//! // Forks are deterministic: the same seed forks the same way.
//! let mut again = GameRng::new(42).fork();
//! assert_eq!(first.gen_range(0..100), again.gen_range(0..100));
//! # let _ = second.gen_range(0..100);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// Generate a random ball count in the given inclusive range.
    pub fn gen_balls(&mut self, range: std::ops::RangeInclusive<u8>) -> u8 {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Choose an index with weighted probability.
    ///
    /// Weights do not need to sum to 1.0.
    /// Returns `None` if weights are empty or all zero.
    pub fn choose_weighted(&mut self, weights: &[f64]) -> Option<usize> {
        if weights.is_empty() {
            return None;
        }

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return None;
        }

        let mut threshold = self.inner.gen::<f64>() * total;

        for (i, &weight) in weights.iter().enumerate() {
            threshold -= weight;
            if threshold < 0.0 {
                return Some(i);
            }
        }

        // Floating point edge case
        Some(weights.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range(0..1000), rng2.gen_range(0..1000));
        }
    }

    #[test]
    fn test_forks_are_independent_and_repeatable() {
        let mut parent = GameRng::new(7);
        let mut a = parent.fork();
        let mut b = parent.fork();
        assert_ne!(a.seed(), b.seed());

        let mut parent2 = GameRng::new(7);
        let mut a2 = parent2.fork();
        for _ in 0..20 {
            assert_eq!(a.gen_balls(0..=15), a2.gen_balls(0..=15));
        }
        let _ = b.gen_balls(0..=15);
    }

    #[test]
    fn test_gen_balls_in_range() {
        let mut rng = GameRng::new(3);
        for _ in 0..200 {
            let n = rng.gen_balls(2..=5);
            assert!((2..=5).contains(&n));
        }
    }

    #[test]
    fn test_choose_weighted() {
        let mut rng = GameRng::new(1);

        assert_eq!(rng.choose_weighted(&[]), None);
        assert_eq!(rng.choose_weighted(&[0.0, 0.0]), None);

        for _ in 0..50 {
            assert_eq!(rng.choose_weighted(&[0.0, 1.0, 0.0]), Some(1));
        }
    }
}
