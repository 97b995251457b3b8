//! Auto-solve sequencing.
//!
//! Revealing the rest of the puzzle is a timed sequence: sort the unsolved
//! tiles, then select each remaining group one tile at a time and submit it.
//! `AutoSolve` is the plan for that sequence as a state machine. It only
//! says what to do next; the `Engine` applies each step and reports the
//! delay to wait before the following one, and a `Scheduler` does the waiting.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{GROUP_SIZE, WORD_COUNT};

/// One discrete auto-solve transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveAction {
    /// Add the tile at this grid position to the selection.
    Select(usize),
    /// Submit the selected group as a non-user guess.
    Submit,
}

/// Remaining auto-solve plan.
///
/// Starts at the first unsolved position and walks the sorted unsolved
/// suffix, emitting a `Submit` after every `GROUP_SIZE` selections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoSolve {
    cursor: usize,
    submit_pending: bool,
}

impl AutoSolve {
    /// Plan a reveal of every group from position `first_unsolved` onward.
    #[must_use]
    pub fn new(first_unsolved: usize) -> Self {
        Self {
            cursor: first_unsolved,
            submit_pending: false,
        }
    }

    /// Number of groups still to be submitted.
    #[must_use]
    pub fn groups_remaining(&self) -> usize {
        let unsubmitted = WORD_COUNT.saturating_sub(self.cursor).div_ceil(GROUP_SIZE);
        unsubmitted + usize::from(self.submit_pending)
    }
}

impl Iterator for AutoSolve {
    type Item = SolveAction;

    fn next(&mut self) -> Option<SolveAction> {
        if self.submit_pending {
            self.submit_pending = false;
            return Some(SolveAction::Submit);
        }

        if self.cursor >= WORD_COUNT {
            return None;
        }

        let position = self.cursor;
        self.cursor += 1;
        if self.cursor % GROUP_SIZE == 0 {
            self.submit_pending = true;
        }
        Some(SolveAction::Select(position))
    }
}

/// Waits between auto-solve steps.
pub trait Scheduler {
    fn wait(&mut self, delay: Duration);
}

/// Blocks the current thread for each delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleep;

impl Scheduler for ThreadSleep {
    fn wait(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Does not wait at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct Immediate;

impl Scheduler for Immediate {
    fn wait(&mut self, _delay: Duration) {}
}

impl<F: FnMut(Duration)> Scheduler for F {
    fn wait(&mut self, delay: Duration) {
        self(delay);
    }
}
