//! Guess records and submission outcomes.
//!
//! A `Guess` is an immutable entry in the append-only guess log. A
//! `GuessOutcome` is what a single `submit_guess` call reports back,
//! whether or not it ended up in the log.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GROUP_SIZE;
use super::word::WordId;

/// A submitted selection and its result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    /// The submitted word IDs, in selection order.
    pub words: SmallVec<[WordId; GROUP_SIZE]>,

    /// All words belong to one group.
    pub correct: bool,

    /// Submitted by the player rather than the auto-solve sequence.
    pub user_submitted: bool,
}

impl Guess {
    #[must_use]
    pub fn new(words: &[WordId], correct: bool, user_submitted: bool) -> Self {
        Self {
            words: SmallVec::from_slice(words),
            correct,
            user_submitted,
        }
    }

    /// Check if this guess used the same words as `selection`, ignoring order.
    #[must_use]
    pub fn same_words(&self, selection: &[WordId]) -> bool {
        self.words.len() == selection.len() && self.words.iter().all(|w| selection.contains(w))
    }
}

/// Why a submission was or wasn't recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessVerdict {
    /// Recorded; the selection was exactly one group.
    Correct,
    /// Recorded as a mistake.
    Incorrect,
    /// Rejected: the selection did not hold exactly `GROUP_SIZE` words.
    WrongSize,
    /// Rejected: the player has no mistakes left.
    OutOfMistakes,
    /// Rejected: the same words were guessed before.
    AlreadyGuessed,
    /// Rejected: the auto-solve sequence is running.
    Busy,
}

impl GuessVerdict {
    /// Check if the guess was appended to the log.
    #[must_use]
    pub fn is_recorded(self) -> bool {
        matches!(self, GuessVerdict::Correct | GuessVerdict::Incorrect)
    }
}

/// Result of a `submit_guess` call.
///
/// `off_by` is `GROUP_SIZE` minus the best single-group hit count of the
/// attempted selection. Wrong-size and busy rejections always report
/// `GROUP_SIZE` so that a malformed submission never leaks a hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    pub off_by: usize,
    pub already_guessed: bool,
    pub verdict: GuessVerdict,
}

impl GuessOutcome {
    /// Outcome for a submission that was never scored.
    #[must_use]
    pub fn unscored(verdict: GuessVerdict, already_guessed: bool) -> Self {
        Self {
            off_by: GROUP_SIZE,
            already_guessed,
            verdict,
        }
    }

    /// Check if the submission solved a group.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.verdict == GuessVerdict::Correct
    }
}
