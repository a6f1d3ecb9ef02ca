use thiserror::Error;

/// Core error type shared across idforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The value is not a recognized UUID version tag.
    #[error("invalid uuid version: {0}")]
    InvalidVersion(String),
    /// The value is not a recognized emotion category tag.
    #[error("invalid emotion category: {0}")]
    InvalidCategory(String),
}

/// Convenience alias for results returned by idforge crates.
pub type Result<T> = std::result::Result<T, Error>;
