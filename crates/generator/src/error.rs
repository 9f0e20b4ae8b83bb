use flyql_syntax::Operator;
use model::NormalizedType;
use thiserror::Error;

/// Reasons a filter cannot be rendered. All of them point at the query,
/// not at the system.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Value '{value}' is not allowed for field '{field}'")]
    DisallowedValue { field: String, value: String },

    #[error("Operation not allowed: {normalized_type} field with '{operator}' operator")]
    ForbiddenOperation {
        normalized_type: NormalizedType,
        operator: Operator,
    },

    #[error("Invalid array index, expected number: {0}")]
    InvalidArrayIndex(String),

    #[error("Path search for unsupported field type: {0}")]
    UnsupportedFieldAccess(String),

    #[error("Missing boolean operator between two subtrees")]
    MissingBoolOperator,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
