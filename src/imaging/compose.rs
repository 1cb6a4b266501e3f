//! Canvas compositing: paint the background, stamp the source on top.
//!
//! The output pixel mode is chosen per request:
//!
//! | Source has alpha | Background alpha < 255 | Output |
//! |---|---|---|
//! | no | no | RGB8 |
//! | yes | any | RGBA8 |
//! | any | yes | RGBA8 |
//!
//! The source is never mutated; a new buffer is always allocated.

use super::calculations::Geometry;
use super::color::Color;
use super::params::ValidationError;
use image::{DynamicImage, GenericImageView, RgbImage, RgbaImage, imageops};

/// Whether the composited result needs an alpha channel.
pub fn needs_alpha(source: &DynamicImage, background: Color) -> bool {
    source.color().has_alpha() || !background.is_opaque()
}

/// Place `source` on a `background`-filled canvas described by `geometry`.
///
/// An unpadded geometry returns a copy of the source in RGB8, or RGBA8 if
/// the source carries alpha. Otherwise the source is pasted at
/// `geometry.offset()`; with an RGBA canvas its own alpha is blended over
/// the background.
pub fn composite(
    source: &DynamicImage,
    geometry: &Geometry,
    background: Color,
) -> Result<DynamicImage, ValidationError> {
    let (width, height) = source.dimensions();
    if (width, height) != (geometry.source_width, geometry.source_height) {
        return Err(ValidationError::GeometryMismatch {
            expected_w: geometry.source_width,
            expected_h: geometry.source_height,
            actual_w: width,
            actual_h: height,
        });
    }

    if geometry.is_unpadded() {
        return Ok(if source.color().has_alpha() {
            DynamicImage::ImageRgba8(source.to_rgba8())
        } else {
            DynamicImage::ImageRgb8(source.to_rgb8())
        });
    }

    let (x, y) = geometry.offset();
    let (x, y) = (i64::from(x), i64::from(y));

    if needs_alpha(source, background) {
        log::debug!("compositing onto RGBA canvas, background {background}");
        let mut canvas = RgbaImage::from_pixel(
            geometry.canvas_width,
            geometry.canvas_height,
            background.to_rgba(),
        );
        imageops::overlay(&mut canvas, &source.to_rgba8(), x, y);
        Ok(DynamicImage::ImageRgba8(canvas))
    } else {
        log::debug!("compositing onto RGB canvas, background {background}");
        let mut canvas = RgbImage::from_pixel(
            geometry.canvas_width,
            geometry.canvas_height,
            background.to_rgb(),
        );
        imageops::replace(&mut canvas, &source.to_rgb8(), x, y);
        Ok(DynamicImage::ImageRgb8(canvas))
    }
}
