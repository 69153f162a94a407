//! Allow-list configuration.
//!
//! An [`AllowList`] names every token that may appear verbatim in generated
//! SQL. It is built once, handed to [`crate::JsonSql::new`], and never
//! mutated afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Scalar kind expected for a filterable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// JSON strings.
    String,
    /// Integral JSON numbers that fit in an `i64`.
    Integer,
    /// Any JSON number.
    Float,
    /// `true` or `false`.
    Boolean,
}

impl ColumnType {
    /// Returns true if `value` is a literal of this kind.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64(),
            Self::Float => value.is_number(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

/// The set of tokens a parser instance accepts.
///
/// # Example
///
/// ```rust
/// use jsonsql_core::{AllowList, ColumnType};
///
/// let allow = AllowList::new()
///     .query("SELECT")
///     .item("*")
///     .table("orders")
///     .connection("WHERE")
///     .column("total", ColumnType::Float);
///
/// assert!(allow.tables.contains("orders"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowList {
    /// Permitted leading query keywords.
    #[serde(alias = "allowed_queries")]
    pub queries: BTreeSet<String>,
    /// Permitted projected item names.
    #[serde(alias = "allowed_items")]
    pub items: BTreeSet<String>,
    /// Permitted source tables.
    #[serde(alias = "allowed_tables")]
    pub tables: BTreeSet<String>,
    /// Permitted connector keywords placed before the filter.
    #[serde(alias = "allowed_connections")]
    pub connections: BTreeSet<String>,
    /// Filterable columns and their expected types.
    #[serde(alias = "allowed_columns")]
    pub columns: BTreeMap<String, ColumnType>,
}

impl AllowList {
    /// Creates an empty allow-list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows a query keyword.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.queries.insert(query.into());
        self
    }

    /// Allows a projected item.
    #[must_use]
    pub fn item(mut self, item: impl Into<String>) -> Self {
        self.items.insert(item.into());
        self
    }

    /// Allows a table.
    #[must_use]
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.tables.insert(table.into());
        self
    }

    /// Allows a connector keyword.
    #[must_use]
    pub fn connection(mut self, connection: impl Into<String>) -> Self {
        self.connections.insert(connection.into());
        self
    }

    /// Allows filtering on a column of the given type.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>, kind: ColumnType) -> Self {
        self.columns.insert(name.into(), kind);
        self
    }

    /// Returns the configured type of a column.
    #[must_use]
    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.columns.get(name).copied()
    }

    /// Returns true if `name` is a configured column.
    #[must_use]
    pub fn is_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Parses an allow-list from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads an allow-list from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
