use thiserror::Error;

/// Errors emitted by the generation engine and generators.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("unknown generator: {0}")]
    UnknownGenerator(String),
}

/// Errors emitted by the table export codec.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no records to export")]
    EmptyData,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
