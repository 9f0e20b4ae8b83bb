use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Unknown boolean operator: {0}")]
    UnknownBoolOperator(String),
}
