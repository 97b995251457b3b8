//! Deterministic random number generation for tile shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical tile layouts
//! - **Suffix shuffles**: Fisher-Yates over the tail of a persistent vector,
//!   so solved tiles at the front never move
//!
//! ```
//! use connections_engine::core::GameRng;
//! use im::Vector;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut x: Vector<u8> = (1..=8).collect();
//! let mut y = x.clone();
//! a.shuffle_suffix(&mut x, 4);
//! b.shuffle_suffix(&mut y, 4);
//! assert_eq!(x, y);
//! assert_eq!(x.take(4), (1..=4).collect::<Vector<u8>>());
//! ```

use im::Vector;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle `vector[from..]` in place, leaving `vector[..from]` untouched.
    ///
    /// Unbiased Fisher-Yates walking down from the end. A `from` at or past
    /// the end is a no-op.
    pub fn shuffle_suffix<A: Clone>(&mut self, vector: &mut Vector<A>, from: usize) {
        let len = vector.len();
        if from >= len {
            return;
        }
        for current in (from + 1..len).rev() {
            let other = self.gen_range_usize(from..current + 1);
            vector.swap(current, other);
        }
    }
}
