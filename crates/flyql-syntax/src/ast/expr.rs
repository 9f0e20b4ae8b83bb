use crate::ast::{literal::Literal, operator::Operator};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separates the field name from a semi-structured access path in a key,
/// e.g. `payload:user:name`.
pub const KEY_SEPARATOR: char = ':';

/// A single `key operator value` comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub key: String,
    pub operator: Operator,
    pub value: Literal,
}

impl Expression {
    pub fn new(key: impl Into<String>, operator: Operator, value: impl Into<Literal>) -> Self {
        Expression {
            key: key.into(),
            operator,
            value: value.into(),
        }
    }

    pub fn has_path(&self) -> bool {
        self.key.contains(KEY_SEPARATOR)
    }

    /// The segment before the first separator.
    pub fn field_name(&self) -> &str {
        match self.key.split_once(KEY_SEPARATOR) {
            Some((name, _)) => name,
            None => &self.key,
        }
    }

    /// Segments after the field name; empty for a bare key.
    pub fn path(&self) -> Vec<&str> {
        self.key.split(KEY_SEPARATOR).skip(1).collect()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Literal::String(s) => write!(f, "{}{}\"{}\"", self.key, self.operator, s),
            other => write!(f, "{}{}{}", self.key, self.operator, other),
        }
    }
}
