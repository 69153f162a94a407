//! Rendered SQL text paired with its bound parameters.

use serde::Serialize;

use crate::value::SqlValue;

/// A piece of SQL with one bound parameter per `?` placeholder.
///
/// Parameters are ordered left to right, matching placeholder positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Fragment {
    /// The SQL text.
    pub sql: String,
    /// Values bound to the placeholders, in order.
    pub params: Vec<SqlValue>,
}

impl Fragment {
    /// Creates a fragment from trusted SQL text with no parameters.
    ///
    /// **Warning**: Only use this for text built from allow-listed tokens.
    #[must_use]
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: vec![],
        }
    }

    /// Creates a single placeholder bound to `value`.
    #[must_use]
    pub fn value(value: SqlValue) -> Self {
        Self {
            sql: String::from(SqlValue::placeholder()),
            params: vec![value],
        }
    }

    /// Joins fragments with `sep`, concatenating their parameters in order.
    #[must_use]
    pub fn join(parts: Vec<Self>, sep: &str) -> Self {
        let mut sql = Vec::with_capacity(parts.len());
        let mut params = Vec::new();
        for part in parts {
            sql.push(part.sql);
            params.extend(part.params);
        }
        Self {
            sql: sql.join(sep),
            params,
        }
    }

    /// Wraps the fragment in parentheses.
    #[must_use]
    pub fn paren(self) -> Self {
        Self {
            sql: format!("({})", self.sql),
            params: self.params,
        }
    }

    /// Prefixes the fragment with trusted SQL text and a space.
    #[must_use]
    pub fn prefixed(self, prefix: &str) -> Self {
        Self {
            sql: format!("{prefix} {}", self.sql),
            params: self.params,
        }
    }

    /// Returns the number of `?` placeholders in the SQL text.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches(SqlValue::placeholder()).count()
    }

    /// Consumes the fragment, returning the SQL text and parameters.
    #[must_use]
    pub fn build(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.params)
    }
}
