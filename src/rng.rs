//! Deterministic random number generation.
//!
//! The opponent draws its moves from a seedable ChaCha8 stream so a
//! game can be replayed exactly by reusing its seed.

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG backing the opponent's move selection.
///
/// Same seed, same sequence of choices.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Creates an RNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates an RNG seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// Returns the seed this RNG was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Chooses an element uniformly at random. `None` on an empty slice.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
