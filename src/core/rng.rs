//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Forkable**: A master RNG hands out one seed per deal, so any deal can
//!   be replayed from its own seed without replaying the whole session
//!
//! ## Usage
//!
//! ```
//! use freecell_engine::core::GameRng;
//!
//! let mut master = GameRng::new(42);
//!
//! // One fork per deal
//! let deal = master.fork();
//! let replay = GameRng::new(deal.seed());
//!
//! let mut a: Vec<u32> = (0..52).collect();
//! let mut b = a.clone();
//! GameRng::new(deal.seed()).shuffle(&mut a);
//! GameRng::new(replay.seed()).shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking for per-deal seeds.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
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

    /// Create an RNG seeded from the thread-local OS-seeded generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(seed: u64) -> Vec<u32> {
        let mut data: Vec<u32> = (0..52).collect();
        GameRng::new(seed).shuffle(&mut data);
        data
    }

    #[test]
    fn test_determinism() {
        assert_eq!(shuffled(42), shuffled(42));
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(shuffled(1), shuffled(2));
    }

    #[test]
    fn test_forks_differ_from_each_other() {
        let mut rng = GameRng::new(42);
        let first = rng.fork();
        let second = rng.fork();

        assert_ne!(first.seed(), second.seed());
        assert_ne!(first.seed(), rng.seed());
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..5 {
            assert_eq!(rng1.fork().seed(), rng2.fork().seed());
        }
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=20).collect();
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_ne!(data, original);
        data.sort_unstable();
        assert_eq!(data, original);
    }
}
