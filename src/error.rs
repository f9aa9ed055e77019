//! Spindle error types

/// Spindle error types
#[derive(Debug, thiserror::Error)]
pub enum SpindleError {
    // Filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Codec errors
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// No decoder recognized the byte stream, or the target encoder
    /// refused the raster data.
    #[error("unsupported image data: {0}")]
    UnsupportedImage(String),

    // Validation errors
    #[error("invalid rotation request: {0}")]
    InvalidRotation(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Transport errors
    #[error("transport error: {0}")]
    Transport(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for Spindle operations
pub type Result<T> = std::result::Result<T, SpindleError>;
