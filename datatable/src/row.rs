//! TableRow trait for records displayed by a table.

use std::fmt::Debug;
use std::hash::Hash;

use crate::value::Value;

/// Trait for records that can be displayed as rows in a [`Table`](crate::Table).
///
/// A row exposes a unique identifier, used for stable selection across sorting
/// and row replacement, and its fields by name so columns can read them.
///
/// # Example
///
/// ```
/// use datatable::{TableRow, Value};
///
/// #[derive(Clone, Debug)]
/// struct User {
///     id: u32,
///     name: String,
///     age: u32,
/// }
///
/// impl TableRow for User {
///     type Id = u32;
///
///     fn id(&self) -> u32 {
///         self.id
///     }
///
///     fn field(&self, data_index: &str) -> Value {
///         match data_index {
///             "id" => self.id.into(),
///             "name" => self.name.as_str().into(),
///             "age" => self.age.into(),
///             _ => Value::Null,
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// The identifier type, typically an integer or a string.
    type Id: Clone + Eq + Hash + Debug;

    /// Unique identifier for this row.
    fn id(&self) -> Self::Id;

    /// Value of the field named by a column's `data_index`.
    ///
    /// Unknown fields should return [`Value::Null`].
    fn field(&self, data_index: &str) -> Value;
}
