//! Error types

/// Errors raised while building a table from configuration.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Two columns share the same key.
    #[error("Duplicate column key '{key}'")]
    DuplicateColumn { key: String },

    /// A column key does not exist.
    #[error("Unknown column '{key}'")]
    UnknownColumn { key: String },

    /// The column exists but cannot be sorted.
    #[error("Column '{key}' is not sortable")]
    NotSortable { key: String },

    /// The configuration could not be parsed.
    #[error("Invalid table configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl TableError {
    /// Creates a new duplicate column error.
    pub fn duplicate_column(key: impl Into<String>) -> Self {
        Self::DuplicateColumn { key: key.into() }
    }

    /// Creates a new unknown column error.
    pub fn unknown_column(key: impl Into<String>) -> Self {
        Self::UnknownColumn { key: key.into() }
    }

    /// Creates a new not sortable error.
    pub fn not_sortable(key: impl Into<String>) -> Self {
        Self::NotSortable { key: key.into() }
    }
}
