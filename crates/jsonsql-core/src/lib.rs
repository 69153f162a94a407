//! # jsonsql-core
//!
//! Allow-list driven translation of JSON query descriptions into
//! parameterized SQL.
//!
//! This crate provides:
//! - An [`AllowList`] naming every token that may appear in generated SQL
//! - A recursive filter parser turning AND/OR trees of column comparisons
//!   into a SQL condition
//! - A request parser assembling a complete `SELECT`-shaped statement
//! - Protection against SQL injection: every literal is returned as a bound
//!   parameter, never spliced into the SQL text
//!
//! ## Rendering a Request
//!
//! ```rust
//! use jsonsql_core::{AllowList, ColumnType, JsonSql, SqlValue};
//! use serde_json::json;
//!
//! let parser = JsonSql::new(
//!     AllowList::new()
//!         .query("SELECT")
//!         .item("*")
//!         .table("table1")
//!         .connection("WHERE")
//!         .column("col1", ColumnType::Integer),
//! );
//!
//! let (sql, params) = parser
//!     .sql_parse(&json!({
//!         "query": "SELECT",
//!         "items": ["*"],
//!         "table": "table1",
//!         "connection": "WHERE",
//!         "logic": {"col1": {"<=": 2}}
//!     }))
//!     .unwrap()
//!     .build();
//!
//! assert_eq!(sql, "SELECT * FROM table1 WHERE col1 <= ?");
//! assert_eq!(params, vec![SqlValue::Int(2)]);
//! ```
//!
//! ## Rejections
//!
//! Anything outside the allow-list is rejected with a reason naming the
//! offending token:
//!
//! ```rust
//! use jsonsql_core::{AllowList, JsonSql};
//! use serde_json::json;
//!
//! let parser = JsonSql::new(AllowList::default());
//! let err = parser
//!     .logic_parse(&json!({"password": {"=": "' OR 1=1 --"}}))
//!     .unwrap_err();
//!
//! assert_eq!(err.to_string(), "Invalid Input - password");
//! ```

pub mod config;
pub mod error;
pub mod fragment;
pub mod logic;
pub mod parser;
pub mod request;
pub mod validator;
pub mod value;
pub mod vocabulary;

pub use config::{AllowList, ColumnType};
pub use error::{Error, ParseError, Result};
pub use fragment::Fragment;
pub use logic::Expr;
pub use parser::JsonSql;
pub use validator::Operand;
pub use value::SqlValue;
pub use vocabulary::{AggregateFn, Comparator, LogicalOp, SpecialComparator};
