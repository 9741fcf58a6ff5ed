use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline error: any stage failure, with the leaf error preserved
#[derive(Error, Debug)]
pub enum Error {
    #[error("mesh error: {0}")]
    Mesh(#[from] solmap_core::Error),

    #[error("geometry error: {0}")]
    Geometry(#[from] solmap_geometry::Error),

    #[error("solar error: {0}")]
    Solar(#[from] solmap_solar::Error),

    #[error("invalid parameter '{field}': {reason}")]
    InvalidParameter { field: &'static str, reason: String },
}
