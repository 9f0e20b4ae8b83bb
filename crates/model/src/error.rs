use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// The schema document is not valid JSON or has the wrong shape.
    #[error("Invalid field schema: {0}")]
    Json(#[from] serde_json::Error),

    /// Two schema entries share a name.
    #[error("Duplicate field: {0}")]
    DuplicateField(String),
}
