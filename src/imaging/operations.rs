//! High-level letterbox operations.
//!
//! These functions combine calculations, compositing and backend execution.
//! They take a request, compute geometry, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{Geometry, compute_padding};
use super::compose::composite;
use super::params::{LetterboxRequest, ValidationError};
use image::{DynamicImage, GenericImageView};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OperationError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Result type for letterbox operations.
pub type Result<T> = std::result::Result<T, OperationError>;

/// A finished letterbox: geometry, pixels and encoded PNG.
#[derive(Debug, Clone)]
pub struct Letterboxed {
    pub geometry: Geometry,
    pub image: DynamicImage,
    pub png: Vec<u8>,
}

impl Letterboxed {
    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }
}

/// Plan the canvas for an image of `dimensions` without touching pixels.
pub fn plan_letterbox(dimensions: (u32, u32), request: &LetterboxRequest) -> Result<Geometry> {
    Ok(compute_padding(
        dimensions,
        request.ratio,
        request.anchor,
        request.tolerance,
    )?)
}

/// Letterbox an already-decoded image.
pub fn letterbox_image(
    source: &DynamicImage,
    request: &LetterboxRequest,
) -> Result<(Geometry, DynamicImage)> {
    let geometry = plan_letterbox(source.dimensions(), request)?;
    let image = composite(source, &geometry, request.background)?;
    Ok((geometry, image))
}

/// Decode `bytes`, letterbox them, and encode the result as PNG.
///
/// Nothing is returned on failure; there is no partial result.
pub fn letterbox_bytes(
    backend: &impl ImageBackend,
    bytes: &[u8],
    request: &LetterboxRequest,
) -> Result<Letterboxed> {
    let source = backend.decode(bytes)?;
    let (geometry, image) = letterbox_image(&source, request)?;
    let png = backend.encode_png(&image)?;
    log::debug!("encoded {} PNG bytes", png.len());
    Ok(Letterboxed {
        geometry,
        image,
        png,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use crate::imaging::{Anchor, Color, parse_ratio};
    use crate::test_helpers::*;

    fn request(ratio: &str, anchor: Anchor) -> LetterboxRequest {
        LetterboxRequest {
            ratio: parse_ratio(ratio),
            anchor,
            ..LetterboxRequest::default()
        }
    }

    #[test]
    fn plan_uses_request_ratio_and_anchor() {
        let g = plan_letterbox((500, 1000), &request("16:9", Anchor::TopLeft)).unwrap();
        assert_eq!((g.canvas_width, g.canvas_height), (1778, 1000));
        assert_eq!((g.left, g.right), (0, 1278));
    }

    #[test]
    fn plan_rejects_zero_dimensions() {
        let err = plan_letterbox((0, 0), &LetterboxRequest::default()).unwrap_err();
        assert!(matches!(
            err,
            OperationError::Invalid(ValidationError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn letterbox_bytes_decodes_composites_and_encodes() {
        let backend = MockBackend::with_images(vec![solid_rgb(100, 50, [1, 1, 1])]);

        let result = letterbox_bytes(&backend, b"raw", &request("1:1", Anchor::Center)).unwrap();

        assert_eq!(result.geometry.canvas_height, 100);
        assert_eq!(result.image.dimensions(), (100, 100));
        assert_eq!(result.png, b"png");
        assert!(!result.has_alpha());
        assert_eq!(
            backend.get_operations(),
            vec![
                RecordedOp::Decode { len: 3 },
                RecordedOp::EncodePng {
                    width: 100,
                    height: 100
                },
            ]
        );
    }

    #[test]
    fn decode_failure_skips_encoding() {
        let backend = MockBackend::new();
        let err = letterbox_bytes(&backend, b"raw", &LetterboxRequest::default()).unwrap_err();
        assert!(matches!(err, OperationError::Backend(BackendError::Decode(_))));
        assert_eq!(backend.get_operations().len(), 1);
    }

    #[test]
    fn translucent_background_yields_alpha_result() {
        let backend = MockBackend::with_images(vec![solid_rgba(10, 20, [0, 0, 0, 255])]);
        let req = LetterboxRequest {
            background: Color::rgba(255, 255, 255, 128),
            ..request("1:1", Anchor::Left)
        };
        let result = letterbox_bytes(&backend, b"raw", &req).unwrap();
        assert!(result.has_alpha());
        assert_rgba_at(&result.image, 15, 5, [255, 255, 255, 128]);
    }

    #[test]
    fn letterbox_image_leaves_source_untouched() {
        let src = gradient_rgb(12, 6);
        let before = src.to_rgb8().into_raw();
        let (_, out) = letterbox_image(&src, &request("1:1", Anchor::Center)).unwrap();
        assert_eq!(out.dimensions(), (12, 12));
        assert_eq!(src.to_rgb8().into_raw(), before);
    }
}
