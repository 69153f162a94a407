//! Top-level request rendering.
//!
//! A request is a flat mapping:
//!
//! | key          | type   | required                  |
//! |--------------|--------|---------------------------|
//! | `query`      | string | yes                       |
//! | `items`      | list   | yes                       |
//! | `table`      | string | yes                       |
//! | `connection` | string | only when `logic` is set  |
//! | `logic`      | filter | no                        |

use serde_json::{Map, Value};

use crate::error::ParseError;
use crate::fragment::Fragment;
use crate::logic::display_json;
use crate::parser::JsonSql;
use crate::validator::sole_entry;
use crate::vocabulary::AggregateFn;

fn required_str<'a>(
    fields: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a str, ParseError> {
    match fields.get(name) {
        None => Err(ParseError::MissingArgument(name)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ParseError::WrongType {
            name,
            expected: "string",
        }),
    }
}

fn required_list<'a>(
    fields: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a [Value], ParseError> {
    match fields.get(name) {
        None => Err(ParseError::MissingArgument(name)),
        Some(Value::Array(list)) => Ok(list.as_slice()),
        Some(_) => Err(ParseError::WrongType {
            name,
            expected: "list",
        }),
    }
}

impl JsonSql {
    /// Resolves one projected item to its SQL text.
    ///
    /// Plain items must be allowed. `{FN: item}` becomes `FN(item)`.
    pub fn resolve_item(&self, item: &Value) -> Result<String, ParseError> {
        let items = &self.allow_list().items;
        match item {
            Value::String(name) if items.contains(name) => Ok(name.clone()),
            Value::Object(map) => {
                let Some((name, arg)) = sole_entry(map) else {
                    return Err(ParseError::ItemNotAllowed(display_json(item)));
                };
                let function = AggregateFn::parse(name)
                    .ok_or_else(|| ParseError::ItemNotAllowed(name.clone()))?;
                match arg {
                    Value::String(column) if items.contains(column) => Ok(function.call(column)),
                    _ => Err(ParseError::ItemNotAllowed(display_json(arg))),
                }
            }
            _ => Err(ParseError::ItemNotAllowed(display_json(item))),
        }
    }

    pub(crate) fn statement(&self, request: &Value) -> Result<Fragment, ParseError> {
        let Value::Object(fields) = request else {
            return Err(ParseError::MissingArgument("query"));
        };
        let query = required_str(fields, "query")?;
        let items = required_list(fields, "items")?;
        let table = required_str(fields, "table")?;

        let allow = self.allow_list();
        if !allow.queries.contains(query) {
            return Err(ParseError::QueryNotAllowed(String::from(query)));
        }
        if items.is_empty() {
            return Err(ParseError::ItemNotAllowed(String::from("[]")));
        }
        let items = items
            .iter()
            .map(|item| self.resolve_item(item))
            .collect::<Result<Vec<_>, _>>()?;
        if !allow.tables.contains(table) {
            return Err(ParseError::TableNotAllowed(String::from(table)));
        }
        let connection = match fields.get("connection") {
            None => None,
            Some(_) => Some(required_str(fields, "connection")?),
        };
        if let Some(connection) = connection {
            if !allow.connections.contains(connection) {
                return Err(ParseError::ConnectionNotAllowed(String::from(connection)));
            }
        }

        let base = format!("{query} {} FROM {table}", items.join(","));

        let Some(logic) = fields.get("logic") else {
            return Ok(Fragment::raw(base));
        };
        let connection = connection.ok_or(ParseError::MissingArgument("connection"))?;
        let filter = self
            .filter(logic)
            .map_err(|err| ParseError::Logic(Box::new(err)))?;
        Ok(filter.prefixed(&format!("{base} {connection}")))
    }
}
