//! Puzzle state: the aggregate every engine operation reads and replaces.
//!
//! ## GameState
//!
//! - `groups`: the 4 word groups, in construction order
//! - `positions`: grid cell -> word ID, always a permutation of all 16 IDs
//! - `selections`: up to 4 distinct selected word IDs, oldest first
//! - `guesses`: append-only guess log
//!
//! Solved groups pack to the front of `positions` in the order they were
//! solved, so `positions[..first_unsolved_index()]` is the settled prefix.
//!
//! Uses `im` persistent vectors so a snapshot clone is O(1) and operations
//! can build the next state without aliasing the previous one.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{GROUP_COUNT, GROUP_SIZE, MISTAKES_ALLOWED};
use super::error::ShapeError;
use super::group::WordGroup;
use super::guess::Guess;
use super::rng::GameRng;
use super::word::{Word, WordId};

/// Where the puzzle stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Groups remain and the player can still guess.
    InProgress,
    /// Every group is solved.
    Solved,
    /// The mistake budget is spent with groups still hidden.
    OutOfMistakes,
}

/// Complete puzzle state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub groups: Vector<WordGroup>,
    pub positions: Vector<WordId>,
    pub selections: SmallVec<[WordId; GROUP_SIZE]>,
    pub guesses: Vector<Guess>,
}

impl GameState {
    /// Build the initial state from 4 rows of 4 words plus a trailing label.
    ///
    /// Word IDs are assigned group-major, so identical input always yields
    /// identical IDs. Only the tile layout depends on `rng`.
    ///
    /// ## Errors
    ///
    /// `ShapeError::WrongGroupCount` if there are not exactly 4 rows, and
    /// `ShapeError::WrongGroupLength` for the first row without 5 fields.
    pub fn from_groups<G, S>(rows: &[G], rng: &mut GameRng) -> Result<Self, ShapeError>
    where
        G: AsRef<[S]>,
        S: AsRef<str>,
    {
        if rows.len() != GROUP_COUNT {
            return Err(ShapeError::WrongGroupCount { found: rows.len() });
        }

        if let Some((group, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != GROUP_SIZE + 1)
        {
            return Err(ShapeError::WrongGroupLength {
                group,
                found: row.as_ref().len(),
            });
        }

        let groups = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let (values, label) = row.as_ref().split_at(GROUP_SIZE);
                WordGroup::new(index, values, label[0].as_ref())
            })
            .collect();

        let mut positions: Vector<WordId> = WordId::all().collect();
        rng.shuffle_suffix(&mut positions, 0);

        Ok(Self {
            groups,
            positions,
            selections: SmallVec::new(),
            guesses: Vector::new(),
        })
    }

    // === Derived Queries ===

    /// Number of guesses recorded as incorrect.
    #[must_use]
    pub fn num_mistakes_made(&self) -> usize {
        self.guesses.iter().filter(|g| !g.correct).count()
    }

    /// Mistakes the player can still make.
    #[must_use]
    pub fn mistakes_remaining(&self) -> usize {
        MISTAKES_ALLOWED.saturating_sub(self.num_mistakes_made())
    }

    /// Number of groups marked solved.
    #[must_use]
    pub fn num_groups_solved(&self) -> usize {
        self.groups.iter().filter(|g| g.solved).count()
    }

    /// First position not occupied by a solved group.
    #[must_use]
    pub fn first_unsolved_index(&self) -> usize {
        self.num_groups_solved() * GROUP_SIZE
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.num_groups_solved() == GROUP_COUNT {
            GameStatus::Solved
        } else if self.num_mistakes_made() >= MISTAKES_ALLOWED {
            GameStatus::OutOfMistakes
        } else {
            GameStatus::InProgress
        }
    }

    /// Word ID shown at grid `position`, if in range.
    #[must_use]
    pub fn word_at(&self, position: usize) -> Option<WordId> {
        self.positions.get(position).copied()
    }

    /// Grid position currently holding `id`.
    #[must_use]
    pub fn position_of(&self, id: WordId) -> Option<usize> {
        self.positions.index_of(&id)
    }

    /// Look up a word by ID.
    #[must_use]
    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.groups
            .iter()
            .flat_map(|g| g.words.iter())
            .find(|w| w.id == id)
    }

    /// Index of the group `id` belongs to.
    #[must_use]
    pub fn group_index_of(&self, id: WordId) -> Option<usize> {
        self.groups.iter().position(|g| g.contains(id))
    }

    #[must_use]
    pub fn is_selected(&self, id: WordId) -> bool {
        self.selections.contains(&id)
    }

    /// Check if some earlier guess used exactly the current selection.
    #[must_use]
    pub fn already_guessed(&self) -> bool {
        self.guesses.iter().any(|g| g.same_words(&self.selections))
    }

    /// Best single-group hit count for the current selection.
    ///
    /// Returns `(group_index, hits)`. Ties go to the lowest group index.
    #[must_use]
    pub fn best_group_match(&self) -> (usize, usize) {
        self.groups
            .iter()
            .map(|g| g.hit_count(&self.selections))
            .enumerate()
            .fold((0, 0), |best, (index, hits)| if hits > best.1 { (index, hits) } else { best })
    }
}
