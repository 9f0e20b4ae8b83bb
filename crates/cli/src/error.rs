use generator::GeneratorError;
use model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read or write a file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load the field schema: {0}")]
    Schema(#[from] ModelError),

    #[error("Failed to deserialize the flyql tree: {0}")]
    TreeDeserialize(#[from] serde_json::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Invalid query: {0}")]
    Query(#[from] GeneratorError),
}

impl CliError {
    /// Bad queries exit with 2 so scripts can tell them from broken setups.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Query(_) => 2,
            _ => 1,
        }
    }
}
