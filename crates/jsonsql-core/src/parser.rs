//! The parser entry points.

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::AllowList;
use crate::error::{ParseError, Result};
use crate::fragment::Fragment;

/// Translates JSON query descriptions into parameterized SQL.
///
/// The allow-list is fixed at construction. A parser holds no other state,
/// stays usable after a rejected input, and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use jsonsql_core::{AllowList, ColumnType, JsonSql, SqlValue};
/// use serde_json::json;
///
/// let parser = JsonSql::new(AllowList::new().column("col1", ColumnType::String));
///
/// let (sql, params) = parser
///     .logic_parse(&json!({"col1": {"=": "value"}}))
///     .unwrap()
///     .build();
///
/// assert_eq!(sql, "col1 = ?");
/// assert_eq!(params, vec![SqlValue::Text(String::from("value"))]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonSql {
    allow: AllowList,
}

impl JsonSql {
    /// Creates a parser accepting the tokens in `allow`.
    #[must_use]
    pub fn new(allow: AllowList) -> Self {
        Self { allow }
    }

    /// Returns the allow-list this parser was built with.
    #[must_use]
    pub fn allow_list(&self) -> &AllowList {
        &self.allow
    }

    /// Renders a filter tree into a SQL condition and its parameters.
    pub fn logic_parse(&self, node: &Value) -> std::result::Result<Fragment, ParseError> {
        let result = self.filter(node);
        match &result {
            Ok(fragment) => trace!(
                sql = %fragment.sql,
                params = fragment.params.len(),
                "rendered filter"
            ),
            Err(err) => debug!(reason = %err, "rejected filter"),
        }
        result
    }

    /// Decodes `json` and renders it as a filter tree.
    pub fn logic_parse_str(&self, json: &str) -> Result<Fragment> {
        let node: Value = serde_json::from_str(json)?;
        Ok(self.logic_parse(&node)?)
    }

    /// Renders a complete request into a SQL statement and its parameters.
    pub fn sql_parse(&self, request: &Value) -> std::result::Result<Fragment, ParseError> {
        let result = self.statement(request);
        match &result {
            Ok(fragment) => trace!(
                sql = %fragment.sql,
                params = fragment.params.len(),
                "rendered statement"
            ),
            Err(err) => debug!(reason = %err, "rejected request"),
        }
        result
    }

    /// Decodes `json` and renders it as a request.
    pub fn sql_parse_str(&self, json: &str) -> Result<Fragment> {
        let request: Value = serde_json::from_str(json)?;
        Ok(self.sql_parse(&request)?)
    }

    pub(crate) fn filter(&self, node: &Value) -> std::result::Result<Fragment, ParseError> {
        self.parse_expr(node).map(|expr| expr.into_fragment())
    }
}
