//! Deterministic random number generation.
//!
//! Every source of randomness in a game (deck shuffles, the random move
//! source) is a `GameRng` derived from the configured seed, so a seed fully
//! determines a game.
//!
//! ```
//! use caravan_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Each player's deck is shuffled from its own fork
//! let mut deck_rng = rng.fork();
//! let mut data = vec![1, 2, 3, 4, 5];
//! deck_rng.shuffle(&mut data);
//!
//! // Same seed, same fork sequence, same shuffle
//! let mut again = GameRng::new(42).fork();
//! let mut data2 = vec![1, 2, 3, 4, 5];
//! again.shuffle(&mut data2);
//! assert_eq!(data, data2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG backed by ChaCha8.
///
/// Supports forking into independent deterministic streams.
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

    /// The seed this stream was created from.
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

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place with a uniformly random permutation.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
