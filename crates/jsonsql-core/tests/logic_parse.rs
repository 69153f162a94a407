//! Tests for filter tree rendering.

mod common;
use common::*;

use jsonsql_core::{ColumnType, SqlValue};
use serde_json::json;

#[test]
fn invalid_input() {
    let p = with_columns(&[]);
    assert_eq!(logic_err(&p, json!({"invalid": "value"})), "Invalid Input - invalid");
}

#[test]
fn nothing_to_compute() {
    let p = with_columns(&[]);
    assert_eq!(logic_err(&p, json!({})), "Nothing To Compute");
}

#[test]
fn bad_and_non_list() {
    let p = with_columns(&[]);
    assert_eq!(logic_err(&p, json!({"AND": "value"})), "Bad AND, non list");
    assert_eq!(logic_err(&p, json!({"OR": {"a": 1}})), "Bad OR, non list");
}

#[test]
fn bad_column_type() {
    let p = with_columns(&[("col1", ColumnType::String)]);
    assert_eq!(logic_err(&p, json!({"col1": {"=": 123}})), "Bad col1, non string");
}

#[test]
fn bad_column_type_for_non_mapping() {
    let p = with_columns(&[("col1", ColumnType::Integer)]);
    assert_eq!(logic_err(&p, json!({"col1": 5})), "Bad col1, non integer");
    assert_eq!(logic_err(&p, json!({"col1": {}})), "Bad col1, non integer");
}

#[test]
fn valid_single_column() {
    let p = with_columns(&[("col1", ColumnType::String)]);
    let f = logic(&p, json!({"col1": {"=": "value"}}));
    assert_eq!(f.sql, "col1 = ?");
    assert_eq!(f.params, vec![text("value")]);
}

#[test]
fn invalid_boolean_len() {
    let p = with_columns(&[]);
    assert_eq!(
        logic_err(&p, json!({"AND": ["cond"]})),
        "Invalid boolean length, must be >= 2"
    );
    assert_eq!(
        logic_err(&p, json!({"OR": []})),
        "Invalid boolean length, must be >= 2"
    );
}

#[test]
fn valid_multi_condition() {
    let p = with_columns(&[("col1", ColumnType::String), ("col2", ColumnType::String)]);
    let f = logic(
        &p,
        json!({"AND": [{"col1": {"=": "value1"}}, {"col2": {"=": "value2"}}]}),
    );
    assert_eq!(f.sql, "(col1 = ? AND col2 = ?)");
    assert_eq!(f.params, vec![text("value1"), text("value2")]);
}

#[test]
fn scalar_comparators() {
    let p = with_columns(&[("col1", ColumnType::Integer)]);
    for (op, rendered) in [
        ("=", "="),
        (">", ">"),
        ("<", "<"),
        (">=", ">="),
        ("<=", "<="),
        ("<>", "<>"),
        ("!=", "<>"),
    ] {
        let f = logic(&p, json!({"col1": {op: 10}}));
        assert_eq!(f.sql, format!("col1 {rendered} ?"));
        assert_eq!(f.params, vec![SqlValue::Int(10)]);
    }
}

#[test]
fn invalid_operator() {
    let p = with_columns(&[("col1", ColumnType::Integer)]);
    assert_eq!(logic_err(&p, json!({"col1": {"!": 10}})), "Non Valid comparitor - !");
    assert_eq!(
        logic_err(&p, json!({"col1": {"LIKE": "x%"}})),
        "Non Valid comparitor - LIKE"
    );
}

#[test]
fn valid_between_condition() {
    let p = with_columns(&[("col1", ColumnType::Integer)]);
    let f = logic(&p, json!({"col1": {"BETWEEN": [5, 10]}}));
    assert_eq!(f.sql, "col1 BETWEEN ? AND ?");
    assert_eq!(f.params, vec![SqlValue::Int(5), SqlValue::Int(10)]);
}

#[test]
fn between_requires_two_values() {
    let p = with_columns(&[("col1", ColumnType::Integer)]);
    assert_eq!(
        logic_err(&p, json!({"col1": {"BETWEEN": [5, 10, 15]}})),
        "Bad col1, non integer"
    );
    assert_eq!(
        logic_err(&p, json!({"col1": {"BETWEEN": 5}})),
        "Bad col1, non integer"
    );
}

#[test]
fn valid_in_condition() {
    let p = with_columns(&[("col1", ColumnType::Integer)]);
    let f = logic(&p, json!({"col1": {"IN": [5, 10, 15]}}));
    assert_eq!(f.sql, "col1 IN (?,?,?)");
    assert_eq!(
        f.params,
        vec![SqlValue::Int(5), SqlValue::Int(10), SqlValue::Int(15)]
    );
}

#[test]
fn in_single_value() {
    let p = with_columns(&[("col1", ColumnType::String)]);
    let f = logic(&p, json!({"col1": {"IN": ["only"]}}));
    assert_eq!(f.sql, "col1 IN (?)");
    assert_eq!(f.params, vec![text("only")]);
}

#[test]
fn in_rejects_mixed_types_and_empty() {
    let p = with_columns(&[("col1", ColumnType::Integer)]);
    assert_eq!(
        logic_err(&p, json!({"col1": {"IN": [1, "two"]}})),
        "Bad col1, non integer"
    );
    assert_eq!(logic_err(&p, json!({"col1": {"IN": []}})), "Bad col1, non integer");
}

#[test]
fn scalar_comparator_rejects_list() {
    let p = with_columns(&[("col1", ColumnType::Integer)]);
    assert_eq!(
        logic_err(&p, json!({"col1": {"=": [1, 2]}})),
        "Bad col1, non integer"
    );
}

#[test]
fn column_to_column_comparisons() {
    let p = with_columns(&[("col1", ColumnType::Integer), ("col2", ColumnType::Integer)]);
    for (op, rendered) in [
        ("=", "="),
        (">", ">"),
        ("<", "<"),
        (">=", ">="),
        ("<=", "<="),
        ("!=", "<>"),
    ] {
        let f = logic(&p, json!({"col1": {op: "col2"}}));
        assert_eq!(f.sql, format!("col1 {rendered} col2"));
        assert!(f.params.is_empty());
    }
}

#[test]
fn unknown_column_operand_is_a_type_error() {
    let p = with_columns(&[("col1", ColumnType::Integer)]);
    assert_eq!(
        logic_err(&p, json!({"col1": {"=": "col1; DROP TABLE x"}})),
        "Bad col1, non integer"
    );
}

#[test]
fn string_literal_is_bound_not_inlined() {
    let p = with_columns(&[("name", ColumnType::String)]);
    let f = logic(&p, json!({"name": {"=": "'; DROP TABLE users; --"}}));
    assert_eq!(f.sql, "name = ?");
    assert_eq!(f.params, vec![text("'; DROP TABLE users; --")]);
}

#[test]
fn aggregate_operands() {
    let p = with_columns(&[("col1", ColumnType::Integer), ("col2", ColumnType::Integer)]);
    let f = logic(&p, json!({"col1": {">=": {"MAX": "col2"}}}));
    assert_eq!(f.sql, "col1 >= MAX(col2)");
    assert!(f.params.is_empty());

    let f = logic(&p, json!({"col1": {"<": {"SUM": 40}}}));
    assert_eq!(f.sql, "col1 < SUM(?)");
    assert_eq!(f.params, vec![SqlValue::Int(40)]);

    assert_eq!(
        logic_err(&p, json!({"col1": {"=": {"MEDIAN": "col2"}}})),
        "Bad col1, non integer"
    );
}

#[test]
fn other_column_types() {
    let p = with_columns(&[("price", ColumnType::Float), ("paid", ColumnType::Boolean)]);
    let f = logic(
        &p,
        json!({"OR": [{"price": {">": 9.5}}, {"price": {"<": 2}}, {"paid": {"=": true}}]}),
    );
    assert_eq!(f.sql, "(price > ? OR price < ? OR paid = ?)");
    assert_eq!(
        f.params,
        vec![SqlValue::Float(9.5), SqlValue::Int(2), SqlValue::Bool(true)]
    );
    assert_eq!(
        logic_err(&p, json!({"paid": {"=": 1}})),
        "Bad paid, non boolean"
    );
}

#[test]
fn nested_groups_flatten_parameters_in_order() {
    let p = with_columns(&[
        ("a", ColumnType::Integer),
        ("b", ColumnType::String),
        ("c", ColumnType::Integer),
    ]);
    let f = logic(
        &p,
        json!({"AND": [
            {"a": {"BETWEEN": [1, 2]}},
            {"OR": [
                {"b": {"IN": ["x", "y"]}},
                {"c": {"=": "a"}},
                {"c": {"<>": 3}}
            ]},
            {"b": {"=": "z"}}
        ]}),
    );
    assert_eq!(
        f.sql,
        "(a BETWEEN ? AND ? AND (b IN (?,?) OR c = a OR c <> ?) AND b = ?)"
    );
    assert_eq!(
        f.params,
        vec![
            SqlValue::Int(1),
            SqlValue::Int(2),
            text("x"),
            text("y"),
            SqlValue::Int(3),
            text("z"),
        ]
    );
    assert_balanced(&f);
}

#[test]
fn nested_failure_propagates_verbatim() {
    let p = with_columns(&[("a", ColumnType::Integer)]);
    assert_eq!(
        logic_err(
            &p,
            json!({"OR": [{"a": {"=": 1}}, {"AND": [{"a": {"=": 2}}, {"a": {"=": "x"}}]}]})
        ),
        "Bad a, non integer"
    );
    assert_eq!(
        logic_err(&p, json!({"OR": [{"a": {"=": 1}}, {"AND": [{"a": {"=": 2}}]}]})),
        "Invalid boolean length, must be >= 2"
    );
}

#[test]
fn logical_keys_are_case_sensitive() {
    let p = with_columns(&[("a", ColumnType::Integer)]);
    assert_eq!(
        logic_err(&p, json!({"and": [{"a": {"=": 1}}, {"a": {"=": 2}}]})),
        "Invalid Input - and"
    );
}

#[test]
fn parse_from_text() {
    let p = with_columns(&[("col1", ColumnType::Integer)]);
    let f = p.logic_parse_str(r#"{"col1": {"IN": [1, 2]}}"#).unwrap();
    assert_eq!(f.sql, "col1 IN (?,?)");
}

#[test]
fn integer_column_rejects_values_beyond_i64() {
    let p = with_columns(&[("a", ColumnType::Integer)]);
    assert_eq!(
        logic_err(&p, json!({"a": {"=": 18_446_744_073_709_551_615_u64}})),
        "Bad a, non integer"
    );
    let f = logic(&p, json!({"a": {"=": i64::MAX}}));
    assert_eq!(f.params, vec![SqlValue::Int(i64::MAX)]);
}

#[test]
fn list_entries_are_always_bound() {
    let p = with_columns(&[("a", ColumnType::Integer), ("b", ColumnType::Integer)]);
    let f = logic(&p, json!({"a": {"IN": ["b", 1]}}));
    assert_eq!(f.sql, "a IN (?,?)");
    assert_eq!(f.params, vec![text("b"), SqlValue::Int(1)]);
    assert_eq!(
        logic_err(&p, json!({"a": {"BETWEEN": [{"MIN": "b"}, 3]}})),
        "Bad a, non integer"
    );
}
