#![allow(dead_code)]

use jsonsql_core::{AllowList, ColumnType, Fragment, JsonSql, ParseError, SqlValue};
use serde_json::Value;

/// A parser with no allow-listed tokens besides the given columns.
pub fn with_columns(columns: &[(&str, ColumnType)]) -> JsonSql {
    let allow = columns
        .iter()
        .fold(AllowList::new(), |allow, (name, kind)| allow.column(*name, *kind));
    JsonSql::new(allow)
}

/// The allow-list shared by the request tests.
pub fn request_parser() -> JsonSql {
    JsonSql::new(
        AllowList::new()
            .query("SELECT")
            .item("*")
            .item("column")
            .table("table1")
            .connection("WHERE")
            .column("col1", ColumnType::Integer)
            .column("col2", ColumnType::String),
    )
}

pub fn logic(parser: &JsonSql, input: Value) -> Fragment {
    parser
        .logic_parse(&input)
        .unwrap_or_else(|e| panic!("Failed to parse: {input}\nError: {e}"))
}

pub fn logic_err(parser: &JsonSql, input: Value) -> String {
    match parser.logic_parse(&input) {
        Ok(f) => panic!("Expected rejection for: {input}, got {f:?}"),
        Err(e) => e.to_string(),
    }
}

pub fn sql(parser: &JsonSql, input: Value) -> Fragment {
    parser
        .sql_parse(&input)
        .unwrap_or_else(|e| panic!("Failed to parse: {input}\nError: {e}"))
}

pub fn sql_err(parser: &JsonSql, input: Value) -> ParseError {
    match parser.sql_parse(&input) {
        Ok(f) => panic!("Expected rejection for: {input}, got {f:?}"),
        Err(e) => e,
    }
}

pub fn text(s: &str) -> SqlValue {
    SqlValue::Text(String::from(s))
}

/// Checks that the fragment binds exactly one value per placeholder.
pub fn assert_balanced(fragment: &Fragment) {
    assert_eq!(
        fragment.placeholder_count(),
        fragment.params.len(),
        "unbalanced fragment: {fragment:?}"
    );
}
