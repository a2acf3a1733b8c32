use thiserror::Error;

/// Errors produced while rendering an image to ASCII text
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    /// The render configuration is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The source image could not be resampled into a pixel buffer
    #[error("rasterization failed: {0}")]
    Rasterization(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
