use thiserror::Error;

/// Result type for OBJ/MTL operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or rewriting mesh files
#[derive(Error, Debug)]
pub enum Error {
    #[error("line {line}: vertex directive needs 3 numeric coordinates")]
    InvalidVertex { line: usize },

    #[error("line {line}: face directive has invalid vertex index '{token}'")]
    InvalidFaceIndex { line: usize, token: String },

    #[error("line {line}: face references vertex {index} but only {vertex_count} vertices exist")]
    IndexOutOfRange {
        line: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("invalid hex color '{0}': expected 6 hex digits")]
    InvalidColor(String),

    #[error("line {line}: malformed material directive")]
    InvalidMaterial { line: usize },

    #[error("mesh has {found} face lines but {expected} band assignments")]
    FaceCountMismatch { expected: usize, found: usize },

    #[error("band index {index} out of range for {count} materials")]
    MaterialOutOfRange { index: usize, count: usize },
}
