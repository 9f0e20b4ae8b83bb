//! Defines the `Dialect` trait for backend-specific predicate syntax.

use crate::escape::{SQL_LIKE_PATTERN_CHAR, escape_literal, escape_str};
use flyql_syntax::{Literal, Operator};

/// Runtime type of a value inside a JSON document, as reported by the
/// backend's JSON type probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    String,
    Int,
    Float,
    Bool,
}

impl JsonKind {
    /// Probed in this order when a JSON path is compared against a number.
    pub const NUMERIC_PROBES: [JsonKind; 3] = [JsonKind::Int, JsonKind::Float, JsonKind::Bool];
}

pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect (e.g., "ClickHouse").
    fn name(&self) -> &'static str;

    /// Quotes and escapes a string literal.
    fn quote_string(&self, value: &str) -> String;

    /// Renders any literal: strings quoted, numbers and booleans bare.
    fn literal(&self, value: &Literal) -> String;

    /// The wildcard character of `LIKE` patterns.
    fn like_wildcard(&self) -> char;

    /// `LIKE` or its negation.
    fn like_operator(&self, negated: bool) -> &'static str;

    /// Comparison function used for semi-structured access, e.g. `equals`.
    ///
    /// Both regex operators map to the same match function; the caller
    /// negates the whole expression for `!~`.
    fn function_name(&self, operator: Operator) -> &'static str;

    /// Regex match of `column` against an already rendered pattern.
    fn regex_match(&self, column: &str, pattern: &str) -> String;

    /// Logical negation of a rendered expression.
    fn negate(&self, expr: &str) -> String;

    /// Value lookup in a map column; `key` is already rendered.
    fn map_access(&self, column: &str, key: &str) -> String;

    /// Element lookup in an array column.
    fn array_access(&self, column: &str, index: i64) -> String;

    /// Condition that holds when the value at `path` of a JSON string
    /// column has the given kind. `path` is a rendered argument list.
    fn json_type_is(&self, column: &str, path: &str, kind: JsonKind) -> String;

    /// Extracts the value at `path` as `kind`.
    fn json_extract(&self, column: &str, path: &str, kind: JsonKind) -> String;

    /// Chains `(condition, result)` pairs into one conditional expression
    /// that yields `fallback` when no condition holds.
    fn multi_if(&self, branches: &[(String, String)], fallback: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClickHouse;

impl Dialect for ClickHouse {
    fn name(&self) -> &'static str {
        "ClickHouse"
    }

    fn quote_string(&self, value: &str) -> String {
        escape_str(value)
    }

    fn literal(&self, value: &Literal) -> String {
        escape_literal(value)
    }

    fn like_wildcard(&self) -> char {
        SQL_LIKE_PATTERN_CHAR
    }

    fn like_operator(&self, negated: bool) -> &'static str {
        if negated { "NOT LIKE" } else { "LIKE" }
    }

    fn function_name(&self, operator: Operator) -> &'static str {
        match operator {
            Operator::Equals => "equals",
            Operator::NotEquals => "notEquals",
            Operator::EqualsRegex | Operator::NotEqualsRegex => "match",
            Operator::GreaterThan => "greater",
            Operator::LessThan => "less",
            Operator::GreaterOrEqual => "greaterOrEquals",
            Operator::LessOrEqual => "lessOrEquals",
        }
    }

    fn regex_match(&self, column: &str, pattern: &str) -> String {
        format!("match({column}, {pattern})")
    }

    fn negate(&self, expr: &str) -> String {
        format!("not {expr}")
    }

    fn map_access(&self, column: &str, key: &str) -> String {
        format!("{column}[{key}]")
    }

    fn array_access(&self, column: &str, index: i64) -> String {
        format!("{column}[{index}]")
    }

    fn json_type_is(&self, column: &str, path: &str, kind: JsonKind) -> String {
        let type_name = match kind {
            JsonKind::String => "String",
            JsonKind::Int => "Int64",
            JsonKind::Float => "Double",
            JsonKind::Bool => "Bool",
        };
        format!("JSONType({column}, {path}) = '{type_name}'")
    }

    fn json_extract(&self, column: &str, path: &str, kind: JsonKind) -> String {
        let function = match kind {
            JsonKind::String => "JSONExtractString",
            JsonKind::Int => "JSONExtractInt",
            JsonKind::Float => "JSONExtractFloat",
            JsonKind::Bool => "JSONExtractBool",
        };
        format!("{function}({column}, {path})")
    }

    fn multi_if(&self, branches: &[(String, String)], fallback: &str) -> String {
        let args = branches
            .iter()
            .map(|(condition, result)| format!("{condition}, {result}"))
            .chain(std::iter::once(fallback.to_string()))
            .collect::<Vec<_>>()
            .join(",");
        format!("multiIf({args})")
    }
}
