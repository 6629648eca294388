//! Render-ready view of a table.
//!
//! The view model carries everything a rendering layer needs to draw a table
//! without touching the controller: header labels with the sort glyph on the
//! active column, an optional checkbox per row, and the stringified cells in
//! display order. Styling is left to the renderer.

use crate::row::TableRow;
use crate::state::Table;

/// Placeholder shown while rows are loading.
pub const LOADING_TEXT: &str = "Loading...";

/// Placeholder shown when there are no rows.
pub const EMPTY_TEXT: &str = "No data";

/// Sort glyph for the active column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Ascending,
    Descending,
}

impl SortIndicator {
    fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// The glyph drawn next to the header title.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    /// Clickable for sorting.
    pub sortable: bool,
    /// Set on the active sort column only.
    pub indicator: Option<SortIndicator>,
}

impl HeaderCell {
    /// Title followed by the sort glyph, if any.
    pub fn label(&self) -> String {
        match self.indicator {
            Some(indicator) => format!("{} {}", self.title, indicator.glyph()),
            None => self.title.clone(),
        }
    }
}

/// One body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow<K> {
    pub id: K,
    /// Checkbox state; `None` when the table is not selectable.
    pub checked: Option<bool>,
    /// Cell text in column order.
    pub cells: Vec<String>,
}

/// What the rendering layer should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView<K> {
    /// Rows are still loading.
    Loading,
    /// There are no rows to show.
    Empty,
    /// Header and rows in display order.
    Grid {
        header: Vec<HeaderCell>,
        rows: Vec<ViewRow<K>>,
    },
}

impl<K> TableView<K> {
    /// Placeholder text for the loading and empty states.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_TEXT),
            Self::Empty => Some(EMPTY_TEXT),
            Self::Grid { .. } => None,
        }
    }
}

impl<T: TableRow> Table<T> {
    /// Build the view model for the current state.
    ///
    /// `loading` takes precedence over an empty table. Rows carry checkbox
    /// state only when the table [is selectable](Table::is_selectable).
    pub fn view(&self, loading: bool) -> TableView<T::Id> {
        if loading {
            return TableView::Loading;
        }
        if self.is_empty() {
            return TableView::Empty;
        }

        let sort = self.sort();
        let selectable = self.is_selectable();
        let header = self
            .columns()
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                title: column.title.clone(),
                sortable: column.sortable,
                indicator: sort
                    .direction_of(&column.key)
                    .map(SortIndicator::from_ascending),
            })
            .collect();

        let rows = self
            .derive()
            .into_iter()
            .map(|row| {
                let id = row.id();
                ViewRow {
                    checked: selectable.then(|| self.is_selected(&id)),
                    cells: self
                        .columns()
                        .iter()
                        .map(|column| row.field(&column.data_index).to_string())
                        .collect(),
                    id,
                }
            })
            .collect();

        TableView::Grid { header, rows }
    }
}
