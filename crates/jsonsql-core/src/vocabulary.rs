//! Fixed SQL vocabulary accepted in filter trees and item lists.
//!
//! Tokens are matched exactly (case-sensitive). Anything outside these sets
//! never reaches the generated SQL.

use std::fmt;

/// Boolean connectives for grouping filter expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    /// AND
    And,
    /// OR
    Or,
}

impl LogicalOp {
    /// Looks up a logical operator by its token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            _ => None,
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
        }
    }
}

/// Scalar comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Equal (=)
    Eq,
    /// Greater than (>)
    Gt,
    /// Less than (<)
    Lt,
    /// Greater than or equal (>=)
    Gte,
    /// Less than or equal (<=)
    Lte,
    /// Not equal, written `<>` or `!=`.
    Ne,
}

impl Comparator {
    /// Looks up a comparator by its token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "=" => Some(Self::Eq),
            ">" => Some(Self::Gt),
            "<" => Some(Self::Lt),
            ">=" => Some(Self::Gte),
            "<=" => Some(Self::Lte),
            "<>" | "!=" => Some(Self::Ne),
            _ => None,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq => write!(f, "="),
            Self::Gt => write!(f, ">"),
            Self::Lt => write!(f, "<"),
            Self::Gte => write!(f, ">="),
            Self::Lte => write!(f, "<="),
            Self::Ne => write!(f, "<>"),
        }
    }
}

/// Comparators taking a list operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialComparator {
    /// BETWEEN, exactly two operands.
    Between,
    /// IN, at least one operand.
    In,
}

impl SpecialComparator {
    /// Looks up a special comparator by its token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "BETWEEN" => Some(Self::Between),
            "IN" => Some(Self::In),
            _ => None,
        }
    }

    /// Returns true if a list of `len` operands is acceptable.
    #[must_use]
    pub fn accepts_len(self, len: usize) -> bool {
        match self {
            Self::Between => len == 2,
            Self::In => len >= 1,
        }
    }
}

impl fmt::Display for SpecialComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Between => write!(f, "BETWEEN"),
            Self::In => write!(f, "IN"),
        }
    }
}

/// Aggregate functions usable in item lists and comparison operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFn {
    /// MIN
    Min,
    /// MAX
    Max,
    /// SUM
    Sum,
    /// AVG
    Avg,
    /// COUNT
    Count,
}

impl AggregateFn {
    /// Looks up an aggregate function by its token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "MIN" => Some(Self::Min),
            "MAX" => Some(Self::Max),
            "SUM" => Some(Self::Sum),
            "AVG" => Some(Self::Avg),
            "COUNT" => Some(Self::Count),
            _ => None,
        }
    }

    /// Renders a call of this function on an already-safe argument.
    #[must_use]
    pub fn call(self, arg: &str) -> String {
        format!("{self}({arg})")
    }
}

impl fmt::Display for AggregateFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => write!(f, "MIN"),
            Self::Max => write!(f, "MAX"),
            Self::Sum => write!(f, "SUM"),
            Self::Avg => write!(f, "AVG"),
            Self::Count => write!(f, "COUNT"),
        }
    }
}

/// Returns true if `token` is a scalar or special comparator.
#[must_use]
pub fn is_comparator_token(token: &str) -> bool {
    Comparator::parse(token).is_some() || SpecialComparator::parse(token).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_equal_normalizes() {
        assert_eq!(Comparator::parse("!="), Some(Comparator::Ne));
        assert_eq!(Comparator::parse("<>"), Some(Comparator::Ne));
        assert_eq!(Comparator::Ne.to_string(), "<>");
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert_eq!(LogicalOp::parse("and"), None);
        assert_eq!(SpecialComparator::parse("between"), None);
        assert_eq!(AggregateFn::parse("min"), None);
    }

    #[test]
    fn test_special_lengths() {
        assert!(SpecialComparator::Between.accepts_len(2));
        assert!(!SpecialComparator::Between.accepts_len(3));
        assert!(!SpecialComparator::In.accepts_len(0));
        assert!(SpecialComparator::In.accepts_len(1));
    }

    #[test]
    fn test_aggregate_call() {
        assert_eq!(AggregateFn::Count.call("id"), "COUNT(id)");
        assert_eq!(AggregateFn::Avg.call("?"), "AVG(?)");
    }

    #[test]
    fn test_comparator_tokens() {
        assert!(is_comparator_token(">="));
        assert!(is_comparator_token("IN"));
        assert!(!is_comparator_token("!"));
        assert!(!is_comparator_token("AND"));
    }
}
