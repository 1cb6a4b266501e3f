//! Image codec backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the boundary to the image codec: decode
//! uploaded bytes (with orientation already applied) and encode the result
//! as PNG. Geometry and compositing never touch encoded bytes.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate.

use image::DynamicImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode image: {0}")]
    Decode(String),
    #[error("Failed to encode image: {0}")]
    Encode(String),
}

/// Trait for image codec backends.
pub trait ImageBackend: Sync {
    /// Decode raw file bytes into pixels, upright per the file's orientation metadata.
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, BackendError>;

    /// Encode pixels as PNG.
    fn encode_png(&self, image: &DynamicImage) -> Result<Vec<u8>, BackendError>;
}
