//! The game engine: state container, transitions and auto-solve.
//!
//! - `store`: subscribable snapshot container
//! - `reducer`: pure `GameState -> GameState` transitions
//! - `autosolve`: the reveal sequence as a state machine, and schedulers
//! - `game`: the `Engine` facade that ties them together

pub mod autosolve;
pub mod game;
pub mod reducer;
pub mod store;

pub use autosolve::{AutoSolve, Immediate, Scheduler, SolveAction, ThreadSleep};
pub use game::Engine;
pub use store::{Store, SubscriptionId};
