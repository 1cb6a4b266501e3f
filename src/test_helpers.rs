//! Shared test utilities for the letterbox test suite.
//!
//! Builds small synthetic images in memory so no test depends on fixture
//! files, and provides pixel assertions that panic with a readable message.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let src = solid_rgb(40, 20, [200, 0, 0]);
//! let out = composite(&src, &geometry, Color::WHITE).unwrap();
//! assert_rgba_at(&out, 0, 0, [255, 255, 255, 255]);
//! ```

use image::{DynamicImage, Pixel, Rgb, RgbImage, Rgba, RgbaImage};

pub use image::GenericImageView;

// =========================================================================
// Image builders
// =========================================================================

/// Opaque RGB image filled with one color.
pub fn solid_rgb(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)))
}

/// RGBA image filled with one color.
pub fn solid_rgba(width: u32, height: u32, rgba: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(rgba)))
}

/// RGB image where every pixel is distinct enough to catch misplaced copies.
pub fn gradient_rgb(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x + y) % 256) as u8])
    }))
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert the pixel at `(x, y)`, read as RGBA, equals `expected`.
pub fn assert_rgba_at(image: &DynamicImage, x: u32, y: u32, expected: [u8; 4]) {
    let (w, h) = image.dimensions();
    assert!(x < w && y < h, "({x}, {y}) is outside {w}x{h} image");
    let actual = image.get_pixel(x, y).to_rgba().0;
    assert_eq!(actual, expected, "pixel mismatch at ({x}, {y})");
}
