//! Core puzzle types: words, groups, guesses, state, RNG, configuration.
//!
//! Everything here is plain data plus pure queries. Mutation goes through
//! the `engine` module.

pub mod config;
pub mod error;
pub mod group;
pub mod guess;
pub mod rng;
pub mod state;
pub mod word;

pub use config::{EngineConfig, SolveTiming, GROUP_COUNT, GROUP_SIZE, MISTAKES_ALLOWED, WORD_COUNT};
pub use error::{LoadError, ShapeError, ShareCodeError};
pub use group::WordGroup;
pub use guess::{Guess, GuessOutcome, GuessVerdict};
pub use rng::GameRng;
pub use state::{GameState, GameStatus};
pub use word::{Word, WordId};
