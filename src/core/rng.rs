//! Deterministic random source for the opponent's ability choice.
//!
//! The engine never touches `rand` directly. It asks a [`RandomSource`]
//! for an index, so tests can pin the opponent's behaviour with a scripted
//! source while the game itself uses a seeded [`BattleRng`].
//!
//! ```
//! use strategy_arena::core::{BattleRng, RandomSource};
//!
//! let mut a = BattleRng::new(7);
//! let mut b = BattleRng::new(7);
//! assert_eq!(a.pick(4), b.pick(4));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform choices.
///
/// `pick(len)` must return a value in `0..len`. It is never called with
/// `len == 0`.
pub trait RandomSource {
    /// Pick an index uniformly from `0..len`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
}

impl BattleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for BattleRng {
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick called with an empty range");
        self.inner.gen_range(0..len)
    }
}
