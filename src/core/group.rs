//! Word groups: the hidden answer structure.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GROUP_SIZE;
use super::word::{Word, WordId};

/// One of the puzzle's categories.
///
/// `words` and `label` are fixed at construction. `solved` flips to true
/// once the group is guessed and never reverts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordGroup {
    pub label: String,
    pub words: SmallVec<[Word; GROUP_SIZE]>,
    pub solved: bool,
}

impl WordGroup {
    /// Build group `index` from its word values and label.
    ///
    /// IDs are assigned as `WordId::from_coords(index, i)`.
    pub fn new<S: AsRef<str>>(index: usize, values: &[S], label: impl Into<String>) -> Self {
        let words = values
            .iter()
            .enumerate()
            .map(|(i, value)| Word::new(WordId::from_coords(index, i), value.as_ref()))
            .collect();

        Self {
            label: label.into(),
            words,
            solved: false,
        }
    }

    /// Check if `id` belongs to this group.
    #[must_use]
    pub fn contains(&self, id: WordId) -> bool {
        self.words.iter().any(|w| w.id == id)
    }

    /// Iterate over member IDs in construction order.
    pub fn ids(&self) -> impl Iterator<Item = WordId> + '_ {
        self.words.iter().map(|w| w.id)
    }

    /// Number of `selection` entries that belong to this group.
    #[must_use]
    pub fn hit_count(&self, selection: &[WordId]) -> usize {
        selection.iter().filter(|&&id| self.contains(id)).count()
    }
}
