//! Comparison and value validation.
//!
//! Each `is_*` predicate has a `resolve_*` counterpart returning the typed
//! operand it accepted, so the parser checks a value once and renders
//! exactly what was checked.

use serde_json::{Map, Value};

use crate::config::ColumnType;
use crate::error::ParseError;
use crate::fragment::Fragment;
use crate::logic::Expr;
use crate::parser::JsonSql;
use crate::value::SqlValue;
use crate::vocabulary::{AggregateFn, Comparator, SpecialComparator};

/// The right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A literal, bound as a parameter.
    Value(SqlValue),
    /// Another allowed column, rendered bare.
    Column(String),
    /// An aggregate call over a column or a literal.
    Aggregate {
        /// The aggregate function.
        function: AggregateFn,
        /// Its argument, a `Value` or a `Column`.
        arg: Box<Operand>,
    },
}

impl Operand {
    /// Renders the operand, binding any literal it holds.
    #[must_use]
    pub fn into_fragment(self) -> Fragment {
        match self {
            Self::Value(value) => Fragment::value(value),
            Self::Column(name) => Fragment::raw(name),
            Self::Aggregate { function, arg } => {
                let inner = arg.into_fragment();
                Fragment {
                    sql: function.call(&inner.sql),
                    params: inner.params,
                }
            }
        }
    }
}

/// Returns the single entry of a one-key mapping.
pub(crate) fn sole_entry(map: &Map<String, Value>) -> Option<(&String, &Value)> {
    if map.len() == 1 {
        map.iter().next()
    } else {
        None
    }
}

impl JsonSql {
    /// Returns true if `value` may be compared against a column of `kind`.
    ///
    /// Accepts a valid aggregate call, the name of an allowed column, or a
    /// literal of `kind`. A list is never a valid value on its own.
    #[must_use]
    pub fn is_valid_value(&self, value: &Value, kind: ColumnType) -> bool {
        self.resolve_value(value, kind).is_some()
    }

    /// Returns true if `aggregate` is `{FN: arg}` with a known function and
    /// an argument that is an allowed column or a literal of `kind`.
    #[must_use]
    pub fn is_valid_aggregate(&self, aggregate: &Value, kind: ColumnType) -> bool {
        self.resolve_aggregate(aggregate, kind).is_some()
    }

    /// Returns true if `value` is a well-typed operand list for BETWEEN
    /// (exactly two entries) or IN (at least one entry).
    #[must_use]
    pub fn is_special_comparison(&self, comparator: &str, value: &Value, kind: ColumnType) -> bool {
        SpecialComparator::parse(comparator)
            .and_then(|special| self.resolve_special(special, value, kind))
            .is_some()
    }

    /// Returns true if `comparison` is a valid `{comparator: value}` mapping
    /// for `column`.
    #[must_use]
    pub fn is_valid_comparison(&self, column: &str, comparison: &Value) -> bool {
        self.resolve_comparison(column, comparison).is_ok()
    }

    /// Resolves a scalar comparison operand.
    #[must_use]
    pub fn resolve_value(&self, value: &Value, kind: ColumnType) -> Option<Operand> {
        match value {
            Value::Object(_) => self.resolve_aggregate(value, kind),
            Value::Array(_) => None,
            Value::String(name) if self.allow_list().is_column(name) => {
                Some(Operand::Column(name.clone()))
            }
            _ if kind.matches(value) => SqlValue::from_json(value).map(Operand::Value),
            _ => None,
        }
    }

    /// Resolves an aggregate call operand.
    #[must_use]
    pub fn resolve_aggregate(&self, aggregate: &Value, kind: ColumnType) -> Option<Operand> {
        let (name, arg) = sole_entry(aggregate.as_object()?)?;
        let function = AggregateFn::parse(name)?;
        let arg = match arg {
            Value::String(column) if self.allow_list().is_column(column) => {
                Operand::Column(column.clone())
            }
            Value::Array(_) | Value::Object(_) => return None,
            _ if kind.matches(arg) => Operand::Value(SqlValue::from_json(arg)?),
            _ => return None,
        };
        Some(Operand::Aggregate {
            function,
            arg: Box::new(arg),
        })
    }

    /// Resolves the operand list of a special comparator.
    ///
    /// Every entry is bound as a parameter, so an allowed column name is
    /// bound as its text and an aggregate call, which cannot be bound, is
    /// rejected.
    #[must_use]
    pub fn resolve_special(
        &self,
        comparator: SpecialComparator,
        value: &Value,
        kind: ColumnType,
    ) -> Option<Vec<SqlValue>> {
        let entries = value.as_array()?;
        if !comparator.accepts_len(entries.len()) {
            return None;
        }
        entries
            .iter()
            .map(|entry| match entry {
                Value::Array(_) | Value::Object(_) => None,
                Value::String(name) if self.allow_list().is_column(name) => {
                    Some(SqlValue::Text(name.clone()))
                }
                _ if kind.matches(entry) => SqlValue::from_json(entry),
                _ => None,
            })
            .collect()
    }

    /// Resolves `{comparator: value}` for a configured column into a leaf
    /// expression.
    ///
    /// An unknown comparator is reported before any type mismatch.
    pub fn resolve_comparison(&self, column: &str, comparison: &Value) -> Result<Expr, ParseError> {
        let kind = self
            .allow_list()
            .column_type(column)
            .ok_or_else(|| ParseError::InvalidInput(String::from(column)))?;
        let bad_type = || ParseError::BadType {
            column: String::from(column),
            expected: kind.to_string(),
        };

        let Value::Object(map) = comparison else {
            return Err(bad_type());
        };
        if map.len() > 1 {
            return Err(ParseError::Ambiguous(map.keys().cloned().collect()));
        }
        let Some((token, operand)) = sole_entry(map) else {
            return Err(bad_type());
        };

        if let Some(comparator) = Comparator::parse(token) {
            let operand = self.resolve_value(operand, kind).ok_or_else(bad_type)?;
            Ok(Expr::Compare {
                column: String::from(column),
                comparator,
                operand,
            })
        } else if let Some(comparator) = SpecialComparator::parse(token) {
            let values = self
                .resolve_special(comparator, operand, kind)
                .ok_or_else(bad_type)?;
            Ok(Expr::Special {
                column: String::from(column),
                comparator,
                values,
            })
        } else {
            Err(ParseError::InvalidComparator(token.clone()))
        }
    }
}
