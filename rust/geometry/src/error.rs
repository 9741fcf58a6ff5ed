use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during potential and band computation
#[derive(Error, Debug)]
pub enum Error {
    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("invalid parameter '{field}': {reason}")]
    InvalidParameter { field: &'static str, reason: String },
}
