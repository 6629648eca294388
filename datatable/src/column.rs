//! Column descriptors.

use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

use crate::error::TableError;

/// Column configuration.
///
/// Columns describe how a row field is labelled and whether clicking the
/// header sorts by it.
///
/// # Examples
///
/// ```
/// use datatable::Column;
///
/// let columns = vec![
///     Column::new("name", "Name").sortable(),
///     Column::new("age", "Age").sortable(),
///     Column::new("email", "Email").data_index("contact_email"),
/// ];
/// assert_eq!(columns[2].data_index, "contact_email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique key of the column.
    pub key: String,
    /// Header text.
    pub title: String,
    /// Row field rendered in this column.
    #[serde(alias = "dataIndex")]
    pub data_index: String,
    /// Whether this column is sortable.
    #[serde(default)]
    pub sortable: bool,
}

impl Column {
    /// Create a new column whose data index equals its key.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            data_index: key.clone(),
            key,
            title: title.into(),
            sortable: false,
        }
    }

    /// Render a different row field than the column key.
    pub fn data_index(mut self, data_index: impl Into<String>) -> Self {
        self.data_index = data_index.into();
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Check that every column key is unique.
pub fn validate_columns(columns: &[Column]) -> Result<(), TableError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if !seen.insert(column.key.as_str()) {
            return Err(TableError::duplicate_column(&column.key));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let column = Column::new("age", "Age");
        assert_eq!(column.data_index, "age");
        assert!(!column.sortable);
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let columns = vec![Column::new("age", "Age"), Column::new("age", "Years")];
        assert!(matches!(
            validate_columns(&columns),
            Err(TableError::DuplicateColumn { key }) if key == "age"
        ));
    }

    #[test]
    fn test_deserialize_accepts_data_index_alias() {
        let column: Column =
            serde_json::from_str(r#"{"key":"age","title":"Age","dataIndex":"years"}"#).unwrap();
        assert_eq!(column.data_index, "years");
        assert!(!column.sortable);
    }
}
