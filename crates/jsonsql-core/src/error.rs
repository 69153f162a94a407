//! Error types.
//!
//! [`ParseError`] is the rejection reason for a filter tree or a request.
//! Its `Display` output is the stable, human-readable reason returned to
//! callers, always naming the offending token.

use thiserror::Error;

/// A rejected filter tree or request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The node is an empty mapping.
    #[error("Nothing To Compute")]
    Empty,

    /// The node key is not a column, logical operator or comparator.
    #[error("Invalid Input - {0}")]
    InvalidInput(String),

    /// The node has more than one key.
    #[error("Ambiguous Input - {}", .0.join(", "))]
    Ambiguous(Vec<String>),

    /// A logical operator was not given a list.
    #[error("Bad {0}, non list")]
    NonList(String),

    /// A logical operator was given fewer than two operands.
    #[error("Invalid boolean length, must be >= 2")]
    BooleanLength,

    /// A comparison operand does not match the column type.
    #[error("Bad {column}, non {expected}")]
    BadType {
        /// The column being compared.
        column: String,
        /// The configured column type.
        expected: String,
    },

    /// A column was compared with an unknown comparator.
    #[error("Non Valid comparitor - {0}")]
    InvalidComparator(String),

    /// A comparator appeared where a column was expected.
    #[error("Comparitor Error - {0}")]
    Comparator(String),

    /// A required request field is absent.
    #[error("Missing argument {0}")]
    MissingArgument(&'static str),

    /// A request field has the wrong JSON type.
    #[error("{name} not right type, {expected}")]
    WrongType {
        /// The request field.
        name: &'static str,
        /// The expected JSON type.
        expected: &'static str,
    },

    /// The query keyword is not allowed.
    #[error("Query not allowed - {0}")]
    QueryNotAllowed(String),

    /// A projected item is not allowed.
    #[error("Item not allowed - {0}")]
    ItemNotAllowed(String),

    /// The table is not allowed.
    #[error("Table not allowed - {0}")]
    TableNotAllowed(String),

    /// The connection keyword is not allowed.
    #[error("Connection not allowed - {0}")]
    ConnectionNotAllowed(String),

    /// The filter tree of a request was rejected.
    #[error("Logic Fail - {0}")]
    Logic(Box<ParseError>),
}

/// Errors from the text and file based entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// The input was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was valid JSON but was rejected.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// IO error (reading configuration files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the text and file based entry points.
pub type Result<T> = std::result::Result<T, Error>;
