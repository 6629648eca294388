//! Table configuration.

use serde::Deserialize;
use serde::Serialize;

use crate::column::{Column, validate_columns};
use crate::error::TableError;
use crate::sort::SortState;

/// Sort applied when a table is built from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialSort {
    /// Key of the column to sort by.
    pub column: String,
    /// Sort direction.
    #[serde(default = "default_ascending")]
    pub ascending: bool,
}

fn default_ascending() -> bool {
    true
}

impl From<&InitialSort> for SortState {
    fn from(initial: &InitialSort) -> Self {
        SortState::by(initial.column.clone(), initial.ascending)
    }
}

/// Declarative description of a table.
///
/// # Example
///
/// ```
/// use datatable::TableConfig;
///
/// let config = TableConfig::from_json(
///     r#"{
///         "columns": [
///             { "key": "name", "title": "Name", "dataIndex": "name", "sortable": true },
///             { "key": "age", "title": "Age", "dataIndex": "age", "sortable": true }
///         ],
///         "selectable": true,
///         "initial_sort": { "column": "age" }
///     }"#,
/// )
/// .unwrap();
/// assert!(config.selectable);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Column definitions.
    pub columns: Vec<Column>,
    /// Whether rows show a selection checkbox.
    #[serde(default)]
    pub selectable: bool,
    /// Sort applied on construction.
    #[serde(default, alias = "initialSort")]
    pub initial_sort: Option<InitialSort>,
}

impl TableConfig {
    /// Create a configuration from column definitions.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Show selection checkboxes.
    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    /// Sort by `column` on construction.
    pub fn initial_sort(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.initial_sort = Some(InitialSort {
            column: column.into(),
            ascending,
        });
        self
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check column keys are unique and the initial sort names a sortable column.
    pub fn validate(&self) -> Result<(), TableError> {
        validate_columns(&self.columns)?;
        if let Some(initial) = &self.initial_sort {
            let column = self
                .columns
                .iter()
                .find(|c| c.key == initial.column)
                .ok_or_else(|| TableError::unknown_column(&initial.column))?;
            if !column.sortable {
                return Err(TableError::not_sortable(&column.key));
            }
        }
        Ok(())
    }

    /// Sort state described by this configuration.
    pub fn sort_state(&self) -> SortState {
        self.initial_sort
            .as_ref()
            .map(SortState::from)
            .unwrap_or_default()
    }
}
