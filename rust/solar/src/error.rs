use thiserror::Error;

/// Result type for solar computations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while interpreting solar inputs
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid timestamp '{input}': expected 'YYYY-MM-DD HH:MM:SS' or ISO-8601")]
    InvalidTimestamp { input: String },
}
