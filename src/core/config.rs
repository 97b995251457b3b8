//! Puzzle dimensions and engine configuration.
//!
//! The puzzle shape is fixed: 4 groups of 4 words, 4 mistakes allowed.
//! What callers can tune is the tile-shuffle seed and the pacing of the
//! auto-solve sequence.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Number of hidden groups in a puzzle.
pub const GROUP_COUNT: usize = 4;

/// Number of words in each group.
pub const GROUP_SIZE: usize = 4;

/// Number of incorrect user guesses before play is blocked.
pub const MISTAKES_ALLOWED: usize = 4;

/// Total number of tiles on the grid.
pub const WORD_COUNT: usize = GROUP_COUNT * GROUP_SIZE;

/// Pacing of the auto-solve sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveTiming {
    /// Pause after the unsolved tiles are sorted into their groups.
    pub settle: Duration,

    /// Pause after each tile is added to the selection.
    pub select: Duration,

    /// Pause after a group is submitted, before the next one starts.
    pub reveal: Duration,
}

impl Default for SolveTiming {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(1000),
            select: Duration::from_millis(500),
            reveal: Duration::from_millis(1500),
        }
    }
}

impl SolveTiming {
    /// All delays zero. Useful for headless replays and tests.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            settle: Duration::ZERO,
            select: Duration::ZERO,
            reveal: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn with_settle(mut self, delay: Duration) -> Self {
        self.settle = delay;
        self
    }

    #[must_use]
    pub fn with_select(mut self, delay: Duration) -> Self {
        self.select = delay;
        self
    }

    #[must_use]
    pub fn with_reveal(mut self, delay: Duration) -> Self {
        self.reveal = delay;
        self
    }
}

/// Engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for tile shuffling. `None` draws a fresh seed per engine.
    pub seed: Option<u64>,

    /// Auto-solve pacing.
    pub timing: SolveTiming,
}

impl EngineConfig {
    /// Create a config with a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a config with custom auto-solve pacing.
    #[must_use]
    pub fn with_timing(mut self, timing: SolveTiming) -> Self {
        self.timing = timing;
        self
    }
}
