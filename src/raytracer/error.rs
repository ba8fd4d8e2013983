use thiserror::Error;

use super::ChecksumError;

/// Everything that can stop a render run
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Checksum validation failed: {0}")]
    Checksum(#[from] ChecksumError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
