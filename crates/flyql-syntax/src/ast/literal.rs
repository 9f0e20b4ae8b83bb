use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal value on the right-hand side of an expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

/// Runtime kind of a non-null literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Int,
    Float,
    Bool,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Literal {
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Literal::String(_) => Some(ValueKind::String),
            Literal::Int(_) => Some(ValueKind::Int),
            Literal::Float(_) => Some(ValueKind::Float),
            Literal::Bool(_) => Some(ValueKind::Bool),
            Literal::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }

    /// True for numeric literals and for strings holding a finite number.
    ///
    /// Strings are parsed as-is: padding, `nan`, `inf` and digit
    /// separators do not count as numbers.
    pub fn is_number(&self) -> bool {
        match self {
            Literal::Int(_) => true,
            Literal::Float(v) => v.is_finite(),
            Literal::String(s) => s.parse::<f64>().is_ok_and(f64::is_finite),
            Literal::Bool(_) | Literal::Null => false,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => f.write_str(s),
            Literal::Int(v) => write!(f, "{v}"),
            // ryu keeps the decimal point on whole floats: 10.0, not 10
            Literal::Float(v) => f.write_str(ryu::Buffer::new().format(*v)),
            Literal::Bool(v) => write!(f, "{v}"),
            Literal::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value.into())
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::from("hello").to_string(), "hello");
        assert_eq!(Literal::Int(42).to_string(), "42");
        assert_eq!(Literal::Float(10.0).to_string(), "10.0");
        assert_eq!(Literal::Float(99.99).to_string(), "99.99");
        assert_eq!(Literal::Bool(true).to_string(), "true");
        assert_eq!(Literal::Null.to_string(), "null");
    }

    #[test]
    fn test_literal_kind() {
        assert_eq!(Literal::from("x").kind(), Some(ValueKind::String));
        assert_eq!(Literal::Int(1).kind(), Some(ValueKind::Int));
        assert_eq!(Literal::Float(1.5).kind(), Some(ValueKind::Float));
        assert_eq!(Literal::Bool(false).kind(), Some(ValueKind::Bool));
        assert_eq!(Literal::Null.kind(), None);
    }

    #[test]
    fn test_is_number() {
        assert!(Literal::Int(-5).is_number());
        assert!(Literal::Float(12.34).is_number());
        assert!(Literal::from("123").is_number());
        assert!(Literal::from("12.34").is_number());
        assert!(Literal::from("-5").is_number());

        assert!(!Literal::from("hello").is_number());
        assert!(!Literal::from("").is_number());
        assert!(!Literal::from("nan").is_number());
        assert!(!Literal::from(" 5").is_number());
        assert!(!Literal::from("inf").is_number());
        assert!(!Literal::from("1_000").is_number());
        assert!(!Literal::Bool(true).is_number());
        assert!(!Literal::Null.is_number());
    }
}
