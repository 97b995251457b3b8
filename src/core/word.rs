//! Word identification.
//!
//! Every word on the grid has a stable `WordId` in `1..=16`, assigned once at
//! construction and never reassigned.
//!
//! ## ID Layout
//!
//! IDs are group-major: group `g`, word `i` gets `1 + 4*g + i`.
//!
//! ```
//! use connections_engine::core::WordId;
//!
//! let id = WordId::from_coords(2, 3);
//! assert_eq!(id.raw(), 12);
//! assert_eq!(id.group_index(), 2);
//! ```

use serde::{Deserialize, Serialize};

use super::config::{GROUP_SIZE, WORD_COUNT};

/// Stable identifier of a word, independent of its grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordId(pub u8);

impl WordId {
    /// Create a word ID from its raw value.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// ID of the `index`-th word of group `group`.
    #[must_use]
    pub const fn from_coords(group: usize, index: usize) -> Self {
        Self((1 + GROUP_SIZE * group + index) as u8)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Index of the group this word was constructed in.
    #[must_use]
    pub const fn group_index(self) -> usize {
        (self.0 as usize).saturating_sub(1) / GROUP_SIZE
    }

    /// Iterate over all word IDs in ascending order.
    pub fn all() -> impl Iterator<Item = WordId> {
        (1..=WORD_COUNT as u8).map(WordId)
    }
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Word({})", self.0)
    }
}

/// A word and its display text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub value: String,
}

impl Word {
    #[must_use]
    pub fn new(id: WordId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}
