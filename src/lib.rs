//! # connections-engine
//!
//! Game-state engine for a word-grouping puzzle: 16 words on a grid, 4
//! hidden groups of 4, and a limited number of mistakes to find them.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: Every operation builds a new `GameState`
//!    and swaps it in atomically. `im` persistent vectors keep that cheap.
//!
//! 2. **Observable**: UI code subscribes to the engine and is called
//!    synchronously after every update. The engine knows nothing about
//!    rendering.
//!
//! 3. **Tolerant input**: Bad tile positions are ignored and rejected
//!    guesses are ordinary outcomes. Only loading a malformed puzzle fails.
//!
//! ## Modules
//!
//! - `core`: Word IDs, groups, guesses, state, RNG, configuration, errors
//! - `engine`: Store, pure transitions, auto-solve sequence, `Engine`
//! - `share`: Share-code encoding of puzzle rows

pub mod core;
pub mod engine;
pub mod share;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, GameRng, GameState, GameStatus, Guess, GuessOutcome, GuessVerdict, LoadError,
    ShapeError, ShareCodeError, SolveTiming, Word, WordGroup, WordId,
    GROUP_COUNT, GROUP_SIZE, MISTAKES_ALLOWED, WORD_COUNT,
};

pub use crate::engine::{
    AutoSolve, Engine, Immediate, Scheduler, SolveAction, Store, SubscriptionId, ThreadSleep,
};
