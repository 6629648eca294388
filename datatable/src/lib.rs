//! Sort and selection state for sortable, selectable data tables.
//!
//! The [`Table`] controller owns column definitions, row data, the active
//! sort column and the set of selected row ids. It derives the display order
//! on demand and reports selection changes to an optional callback. A
//! rendering layer reads the [`TableView`] model and forwards header clicks
//! to [`Table::set_sort`] and checkbox toggles to [`Table::toggle_select`].

pub mod column;
pub mod config;
pub mod error;
pub mod row;
pub mod selection;
pub mod sort;
pub mod state;
pub mod value;
pub mod view;

pub use column::Column;
pub use config::{InitialSort, TableConfig};
pub use error::TableError;
pub use row::TableRow;
pub use selection::Selection;
pub use sort::SortState;
pub use state::{SelectHandler, Table};
pub use value::Value;
pub use view::{HeaderCell, SortIndicator, TableView, ViewRow};

pub mod prelude {
    pub use crate::column::Column;
    pub use crate::config::TableConfig;
    pub use crate::error::TableError;
    pub use crate::row::TableRow;
    pub use crate::sort::SortState;
    pub use crate::state::Table;
    pub use crate::value::Value;
    pub use crate::view::{HeaderCell, SortIndicator, TableView, ViewRow};
}
