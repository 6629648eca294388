//! Sort state and the stable row ordering derived from it.

use serde::Deserialize;
use serde::Serialize;

use crate::column::Column;
use crate::row::TableRow;
use crate::value::Value;

/// Which column a table is sorted by, and in which direction.
///
/// At most one column is active at a time. Without an active column rows keep
/// their original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    column: Option<String>,
    ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: None,
            ascending: true,
        }
    }
}

impl SortState {
    /// Unsorted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorted by `column` in the given direction.
    pub fn by(column: impl Into<String>, ascending: bool) -> Self {
        Self {
            column: Some(column.into()),
            ascending,
        }
    }

    /// Key of the active column, if any.
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Current direction. Meaningless while no column is active.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Whether `key` is the active column.
    pub fn is_active(&self, key: &str) -> bool {
        self.column.as_deref() == Some(key)
    }

    /// Direction for `key` if it is the active column.
    pub fn direction_of(&self, key: &str) -> Option<bool> {
        self.is_active(key).then_some(self.ascending)
    }

    /// Toggle sort for a column.
    ///
    /// If the column is already active, flips the direction. Otherwise makes it
    /// active and ascending.
    pub fn toggle(&mut self, key: &str) {
        if self.is_active(key) {
            self.ascending = !self.ascending;
        } else {
            self.column = Some(key.to_string());
            self.ascending = true;
        }
    }

    /// Return to the unsorted state.
    pub fn clear(&mut self) {
        self.column = None;
        self.ascending = true;
    }
}

/// Indices of `rows` in sorted order by the field `data_index`.
///
/// The sort is stable in both directions: rows with equal values keep their
/// relative input order.
pub fn sorted_indices<T: TableRow>(rows: &[T], data_index: &str, ascending: bool) -> Vec<usize> {
    let keys: Vec<Value> = rows.iter().map(|row| row.field(data_index)).collect();
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| {
        let ordering = keys[a].compare(&keys[b]);
        if ascending { ordering } else { ordering.reverse() }
    });
    order
}

/// Indices of `rows` in display order for the given sort state.
///
/// Returns the identity order when no column is active or the active column is
/// not among `columns`.
pub fn derive_order<T: TableRow>(rows: &[T], columns: &[Column], sort: &SortState) -> Vec<usize> {
    let column = sort
        .column()
        .and_then(|key| columns.iter().find(|c| c.key == key));
    match column {
        Some(column) => sorted_indices(rows, &column.data_index, sort.ascending()),
        None => (0..rows.len()).collect(),
    }
}

/// Rows in display order for the given sort state.
pub fn derive<'a, T: TableRow>(rows: &'a [T], columns: &[Column], sort: &SortState) -> Vec<&'a T> {
    derive_order(rows, columns, sort)
        .into_iter()
        .map(|index| &rows[index])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(u32, i64);

    impl TableRow for Pair {
        type Id = u32;

        fn id(&self) -> u32 {
            self.0
        }

        fn field(&self, data_index: &str) -> Value {
            match data_index {
                "v" => self.1.into(),
                _ => Value::Null,
            }
        }
    }

    #[test]
    fn test_toggle_law() {
        let mut sort = SortState::new();
        sort.toggle("age");
        assert_eq!(sort, SortState::by("age", true));
        sort.toggle("age");
        assert_eq!(sort, SortState::by("age", false));
        sort.toggle("age");
        assert_eq!(sort, SortState::by("age", true));
    }

    #[test]
    fn test_switching_column_resets_to_ascending() {
        let mut sort = SortState::by("age", false);
        sort.toggle("name");
        assert_eq!(sort, SortState::by("name", true));
    }

    #[test]
    fn test_descending_keeps_ties_in_input_order() {
        let rows = vec![Pair(1, 5), Pair(2, 7), Pair(3, 5), Pair(4, 7)];
        assert_eq!(sorted_indices(&rows, "v", true), vec![0, 2, 1, 3]);
        assert_eq!(sorted_indices(&rows, "v", false), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_unknown_active_column_is_identity() {
        let rows = vec![Pair(1, 9), Pair(2, 1)];
        let columns = vec![Column::new("v", "V").sortable()];
        let sort = SortState::by("missing", true);
        assert_eq!(derive_order(&rows, &columns, &sort), vec![0, 1]);
    }
}
