//! Table controller state.

use std::cell::OnceCell;
use std::collections::HashSet;
use std::fmt;

use log::{debug, trace};

use crate::column::Column;
use crate::config::TableConfig;
use crate::error::TableError;
use crate::row::TableRow;
use crate::selection::Selection;
use crate::sort::{SortState, derive_order};

/// Callback invoked with the selected rows whenever the selection changes.
pub type SelectHandler<T> = Box<dyn FnMut(&[&T])>;

/// Sort and selection state for a table of `T` rows.
///
/// `Table<T>` owns:
/// - the column definitions (static after construction)
/// - the row data, in its original order
/// - the sort state (at most one active column)
/// - the selection (by row id)
///
/// Display order is derived from the rows and sort state on demand and cached
/// until either changes. Every state change marks the table dirty so a
/// rendering layer can poll [`take_dirty`](Table::take_dirty) and re-render.
///
/// # Example
///
/// ```
/// use datatable::{Column, Table, TableRow, Value};
///
/// #[derive(Clone, Debug)]
/// struct User { id: u32, name: &'static str, age: u32 }
///
/// impl TableRow for User {
///     type Id = u32;
///     fn id(&self) -> u32 { self.id }
///     fn field(&self, data_index: &str) -> Value {
///         match data_index {
///             "name" => self.name.into(),
///             "age" => self.age.into(),
///             _ => Value::Null,
///         }
///     }
/// }
///
/// let users = vec![
///     User { id: 1, name: "Ali", age: 24 },
///     User { id: 2, name: "Sara", age: 21 },
/// ];
/// let mut table = Table::new(vec![Column::new("age", "Age").sortable()], users);
///
/// table.set_sort("age");
/// let names: Vec<_> = table.derive().iter().map(|u| u.name).collect();
/// assert_eq!(names, ["Sara", "Ali"]);
/// ```
pub struct Table<T: TableRow> {
    /// Column definitions.
    columns: Vec<Column>,
    /// Rows in their original order.
    rows: Vec<T>,
    /// Current sort state.
    sort: SortState,
    /// Selection state (by row id).
    selection: Selection<T::Id>,
    /// Cached display order as indices into `rows`.
    order: OnceCell<Vec<usize>>,
    /// Selection observer.
    on_select: Option<SelectHandler<T>>,
    /// Whether rows show a selection checkbox.
    selectable: bool,
    /// Dirty flag for re-render.
    dirty: bool,
}

impl<T: TableRow> Table<T> {
    /// Create a table with column definitions and initial rows.
    pub fn new(columns: Vec<Column>, rows: Vec<T>) -> Self {
        Self {
            columns,
            rows,
            sort: SortState::default(),
            selection: Selection::new(),
            order: OnceCell::new(),
            on_select: None,
            selectable: false,
            dirty: false,
        }
    }

    /// Create a table from a validated configuration, applying its initial
    /// sort and selectable flag.
    pub fn from_config(config: &TableConfig, rows: Vec<T>) -> Result<Self, TableError> {
        config.validate()?;
        let mut table = Self::new(config.columns.clone(), rows).with_selectable(config.selectable);
        table.sort = config.sort_state();
        Ok(table)
    }

    /// Set whether rows show a selection checkbox.
    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Whether rows show a selection checkbox.
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Show or hide the selection checkbox column.
    ///
    /// Only affects the view; the selection itself is kept.
    pub fn set_selectable(&mut self, selectable: bool) {
        if self.selectable != selectable {
            self.selectable = selectable;
            self.dirty = true;
        }
    }

    /// Register the callback invoked with the selected rows, in data order,
    /// after every selection change. Replaces any previous callback.
    pub fn on_row_select(&mut self, handler: impl FnMut(&[&T]) + 'static) {
        self.on_select = Some(Box::new(handler));
    }

    // -------------------------------------------------------------------------
    // Column access
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Find a column by key.
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    // -------------------------------------------------------------------------
    // Row access
    // -------------------------------------------------------------------------

    /// Rows in their original order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace all rows.
    ///
    /// Selected ids that no longer exist are dropped without notifying the
    /// selection callback.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        let ids: HashSet<T::Id> = self.rows.iter().map(|row| row.id()).collect();
        let pruned = self.selection.retain(|id| ids.contains(id));
        if pruned > 0 {
            debug!("Dropped {pruned} selected ids no longer present in rows");
        }
        self.invalidate();
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get current sort state.
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Toggle sort for a column.
    ///
    /// Ignored if the column is unknown or not sortable. If the column is
    /// already sorted, toggles the direction; otherwise sorts ascending by it.
    /// Returns true if the sort state changed.
    pub fn set_sort(&mut self, key: &str) -> bool {
        if !self.column(key).is_some_and(|c| c.sortable) {
            trace!("Ignoring sort request for non-sortable column '{key}'");
            return false;
        }
        self.sort.toggle(key);
        debug!(
            "Table sorted by '{key}' {}",
            if self.sort.ascending() { "ascending" } else { "descending" }
        );
        self.invalidate();
        true
    }

    /// Clear sort state, restoring the original row order.
    pub fn clear_sort(&mut self) {
        if self.sort.column().is_some() {
            self.sort.clear();
            self.invalidate();
        }
    }

    /// Display order as indices into [`rows`](Table::rows).
    pub fn order(&self) -> &[usize] {
        self.order.get_or_init(|| {
            trace!("Rebuilding display order for {} rows", self.rows.len());
            derive_order(&self.rows, &self.columns, &self.sort)
        })
    }

    /// Rows in display order.
    ///
    /// Without an active sort column this is the original order. Otherwise rows
    /// are stably sorted by the active column's field.
    pub fn derive(&self) -> Vec<&T> {
        self.order().iter().map(|&index| &self.rows[index]).collect()
    }

    fn invalidate(&mut self) {
        self.order.take();
        self.dirty = true;
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle selection of a row by id and notify the selection callback.
    ///
    /// Ids with no matching row are ignored. Returns true if the row is
    /// selected afterwards.
    pub fn toggle_select(&mut self, id: T::Id) -> bool {
        if !self.rows.iter().any(|row| row.id() == id) {
            trace!("Ignoring selection of unknown row {id:?}");
            return false;
        }
        let selected = self.selection.toggle(id.clone());
        debug!(
            "Row {id:?} {}, {} selected",
            if selected { "selected" } else { "deselected" },
            self.selection.len()
        );
        self.dirty = true;
        self.notify();
        selected
    }

    /// Clear all selection, notifying the callback if anything was selected.
    pub fn clear_selection(&mut self) {
        if self.selection.clear() {
            self.dirty = true;
            self.notify();
        }
    }

    /// Check if a row is selected by id.
    pub fn is_selected(&self, id: &T::Id) -> bool {
        self.selection.is_selected(id)
    }

    /// Number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Selected ids, in original data order.
    pub fn selected_ids(&self) -> Vec<T::Id> {
        self.selection.ids_in(&self.rows)
    }

    /// Selected rows, in original data order.
    pub fn selected_rows(&self) -> Vec<&T> {
        self.selection.resolve(&self.rows)
    }

    fn notify(&mut self) {
        if let Some(handler) = self.on_select.as_mut() {
            let selected = self.selection.resolve(&self.rows);
            handler(selected.as_slice());
        }
    }

    // -------------------------------------------------------------------------
    // Re-render tracking
    // -------------------------------------------------------------------------

    /// Whether state changed since the last [`take_dirty`](Table::take_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return and clear the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl<T: TableRow + fmt::Debug> fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("sort", &self.sort)
            .field("selection", &self.selection)
            .field("has_handler", &self.on_select.is_some())
            .field("selectable", &self.selectable)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}
