//! Pure state transitions.
//!
//! Each function takes the current snapshot and returns the next one. None
//! of them mutate their input, so the `Store` can swap snapshots atomically.
//! Out-of-range or otherwise inapplicable input yields an unchanged copy.

use tracing::trace;

use crate::core::{
    GameRng, GameState, Guess, GuessOutcome, GuessVerdict, GROUP_SIZE, MISTAKES_ALLOWED,
};

/// Toggle the word at grid `position` in or out of the selection.
///
/// A new word is appended only while fewer than `GROUP_SIZE` are selected.
#[must_use]
pub fn select_tile(state: &GameState, position: usize) -> GameState {
    let mut next = state.clone();
    let Some(id) = state.word_at(position) else {
        trace!(position, "tile position out of range");
        return next;
    };

    if let Some(index) = next.selections.iter().position(|&s| s == id) {
        next.selections.remove(index);
    } else if next.selections.len() < GROUP_SIZE {
        next.selections.push(id);
    }
    next
}

/// Add the word at `position` to the selection without toggling.
///
/// Used by the auto-solve sequence. Already-selected words and a full
/// selection are left alone.
#[must_use]
pub fn append_selection(state: &GameState, position: usize) -> GameState {
    let mut next = state.clone();
    if let Some(id) = state.word_at(position) {
        if !next.is_selected(id) && next.selections.len() < GROUP_SIZE {
            next.selections.push(id);
        }
    }
    next
}

#[must_use]
pub fn deselect_all(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.selections.clear();
    next
}

/// Shuffle the unsolved tiles; the solved prefix stays put.
#[must_use]
pub fn shuffle_unsolved(state: &GameState, rng: &mut GameRng) -> GameState {
    let mut next = state.clone();
    rng.shuffle_suffix(&mut next.positions, state.first_unsolved_index());
    next
}

/// Sort the unsolved tiles by word ID, which lays remaining groups out in
/// group order.
#[must_use]
pub fn sort_unsolved(state: &GameState) -> GameState {
    let mut next = state.clone();
    let mut unsolved = next.positions.split_off(state.first_unsolved_index());
    unsolved.sort();
    next.positions.append(unsolved);
    next
}

/// Score the current selection.
///
/// Rejections leave the state unchanged. A selection that is exactly one
/// group is moved into the block right after the solved prefix, the group is
/// marked solved and the selection cleared. Anything else is logged as a
/// mistake and the selection kept.
#[must_use]
pub fn submit_guess(state: &GameState, user_submitted: bool) -> (GameState, GuessOutcome) {
    let already_guessed = state.already_guessed();

    if state.selections.len() != GROUP_SIZE {
        let outcome = GuessOutcome::unscored(GuessVerdict::WrongSize, already_guessed);
        return (state.clone(), outcome);
    }

    let (group_index, hits) = state.best_group_match();
    let off_by = GROUP_SIZE - hits;

    let rejected = if user_submitted && state.num_mistakes_made() >= MISTAKES_ALLOWED {
        Some(GuessVerdict::OutOfMistakes)
    } else if already_guessed {
        Some(GuessVerdict::AlreadyGuessed)
    } else {
        None
    };
    if let Some(verdict) = rejected {
        let outcome = GuessOutcome {
            off_by,
            already_guessed,
            verdict,
        };
        return (state.clone(), outcome);
    }

    let mut next = state.clone();
    let correct = hits == GROUP_SIZE;
    next.guesses.push_back(Guess::new(&state.selections, correct, user_submitted));

    if correct {
        let boundary = state.first_unsolved_index();
        for (offset, id) in state.selections.iter().enumerate() {
            if let Some(current) = next.position_of(*id) {
                next.positions.swap(boundary + offset, current);
            }
        }

        next.groups[group_index].solved = true;
        next.selections.clear();
    }

    let verdict = if correct {
        GuessVerdict::Correct
    } else {
        GuessVerdict::Incorrect
    };
    let outcome = GuessOutcome {
        off_by,
        already_guessed,
        verdict,
    };
    (next, outcome)
}
