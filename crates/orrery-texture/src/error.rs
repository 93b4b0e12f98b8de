//! Texture export error types.

/// Errors that can occur when exporting a synthesized texture.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    /// Failed to create or write the output file.
    #[error("failed to write texture: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoder rejected the image.
    #[error("failed to encode png: {0}")]
    Encode(#[from] png::EncodingError),
}
