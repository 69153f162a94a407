//! Filter expression trees.
//!
//! A filter arrives as JSON where every node is a one-key mapping:
//!
//! ```json
//! {"AND": [
//!     {"status": {"=": "open"}},
//!     {"OR": [{"total": {">": 100}}, {"priority": {"IN": [1, 2]}}]}
//! ]}
//! ```
//!
//! [`JsonSql::parse_expr`] validates such a tree against the allow-list and
//! produces an [`Expr`]. Rendering an `Expr` cannot fail.
//!
//! Recursion depth follows the nesting depth of the input. Callers accepting
//! untrusted input should bound request size before parsing.

use serde_json::Value;

use crate::error::ParseError;
use crate::fragment::Fragment;
use crate::parser::JsonSql;
use crate::validator::{sole_entry, Operand};
use crate::value::SqlValue;
use crate::vocabulary::{is_comparator_token, Comparator, LogicalOp, SpecialComparator};

/// A validated filter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Two or more expressions joined by AND or OR.
    Logical {
        /// The connective.
        op: LogicalOp,
        /// The operands, in input order.
        children: Vec<Expr>,
    },
    /// `column <comparator> operand`
    Compare {
        /// The filtered column.
        column: String,
        /// The comparator.
        comparator: Comparator,
        /// The right-hand side.
        operand: Operand,
    },
    /// `column BETWEEN a AND b` or `column IN (...)`
    Special {
        /// The filtered column.
        column: String,
        /// BETWEEN or IN.
        comparator: SpecialComparator,
        /// The bound list entries, in input order.
        values: Vec<SqlValue>,
    },
}

impl Expr {
    /// Renders the expression.
    #[must_use]
    pub fn into_fragment(self) -> Fragment {
        match self {
            Self::Logical { op, children } => {
                let parts = children.into_iter().map(Self::into_fragment).collect();
                Fragment::join(parts, &format!(" {op} ")).paren()
            }
            Self::Compare {
                column,
                comparator,
                operand,
            } => operand
                .into_fragment()
                .prefixed(&format!("{column} {comparator}")),
            Self::Special {
                column,
                comparator,
                values,
            } => {
                let parts = values.into_iter().map(Fragment::value).collect();
                let list = match comparator {
                    SpecialComparator::Between => Fragment::join(parts, " AND "),
                    SpecialComparator::In => Fragment::join(parts, ",").paren(),
                };
                list.prefixed(&format!("{column} {comparator}"))
            }
        }
    }
}

/// Formats a JSON value for an error message, leaving strings unquoted.
pub(crate) fn display_json(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl JsonSql {
    /// Validates a filter tree node and everything below it.
    ///
    /// Children are validated left to right and the first failure is
    /// returned unchanged.
    pub fn parse_expr(&self, node: &Value) -> Result<Expr, ParseError> {
        let Value::Object(map) = node else {
            return Err(ParseError::InvalidInput(display_json(node)));
        };
        if map.is_empty() {
            return Err(ParseError::Empty);
        }
        let Some((key, value)) = sole_entry(map) else {
            return Err(ParseError::Ambiguous(map.keys().cloned().collect()));
        };

        if let Some(op) = LogicalOp::parse(key) {
            let Value::Array(children) = value else {
                return Err(ParseError::NonList(key.clone()));
            };
            if children.len() < 2 {
                return Err(ParseError::BooleanLength);
            }
            let children = children
                .iter()
                .map(|child| self.parse_expr(child))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Expr::Logical { op, children })
        } else if self.allow_list().is_column(key) {
            self.resolve_comparison(key, value)
        } else if is_comparator_token(key) {
            Err(ParseError::Comparator(key.clone()))
        } else {
            Err(ParseError::InvalidInput(key.clone()))
        }
    }
}
