//! ID-based selection state.

use std::collections::HashSet;
use std::hash::Hash;

use crate::row::TableRow;

/// Tracks selected rows by their identifiers.
///
/// Selection is keyed by id rather than position, so it is unaffected by the
/// display order and survives row replacement for ids that still exist.
#[derive(Debug, Clone)]
pub struct Selection<K: Eq + Hash> {
    selected: HashSet<K>,
}

impl<K: Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle selection of a key. Returns true if the key is now selected.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.selected.remove(&key) {
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all selections. Returns true if anything was selected.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.selected.is_empty();
        self.selected.clear();
        had_any
    }

    /// Keep only the keys for which `keep` returns true.
    /// Returns the number of keys removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) -> usize {
        let before = self.selected.len();
        self.selected.retain(|key| keep(key));
        before - self.selected.len()
    }

    /// Selected rows of `rows`, in the order they appear there.
    pub fn resolve<'a, T>(&self, rows: &'a [T]) -> Vec<&'a T>
    where
        T: TableRow<Id = K>,
    {
        rows.iter()
            .filter(|row| self.selected.contains(&row.id()))
            .collect()
    }

    /// Selected ids, in the order their rows appear in `rows`.
    pub fn ids_in<T>(&self, rows: &[T]) -> Vec<K>
    where
        T: TableRow<Id = K>,
    {
        rows.iter()
            .map(|row| row.id())
            .filter(|id| self.selected.contains(id))
            .collect()
    }
}
