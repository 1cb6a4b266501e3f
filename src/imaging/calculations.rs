//! Pure calculation functions for letterbox geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use super::anchor::Anchor;
use super::params::{Tolerance, ValidationError};
use super::ratio::Ratio;
use serde::Serialize;

/// Padded canvas size and the padding on each side of the source.
///
/// Always satisfies `canvas_width == source_width + left + right` and
/// `canvas_height == source_height + top + bottom`. Padding is only ever
/// added on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Geometry {
    pub source_width: u32,
    pub source_height: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Geometry {
    /// Geometry that leaves the source untouched.
    pub fn unpadded(width: u32, height: u32) -> Self {
        Self {
            source_width: width,
            source_height: height,
            canvas_width: width,
            canvas_height: height,
            left: 0,
            top: 0,
            right: 0,
            bottom: 0,
        }
    }

    pub fn is_unpadded(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }

    /// Where the source's top-left corner lands on the canvas.
    pub fn offset(&self) -> (u32, u32) {
        (self.left, self.top)
    }
}

/// Split `extra` pixels into `(before, after)` with `before` taking `factor`.
///
/// `before` is rounded half away from zero and `after` absorbs the
/// remainder, so the two always sum to `extra`.
fn split_extra(extra: u32, factor: f64) -> (u32, u32) {
    let before = ((extra as f64 * factor).round() as u32).min(extra);
    (before, extra - before)
}

/// Round a canvas edge length, rejecting anything that doesn't fit in `u32`.
fn canvas_edge(length: f64) -> Result<u32, ValidationError> {
    let rounded = length.round();
    if rounded.is_finite() && rounded <= u32::MAX as f64 {
        Ok(rounded as u32)
    } else {
        Err(ValidationError::CanvasTooLarge)
    }
}

/// Compute the padded canvas for a `source` of `(width, height)`.
///
/// - Source already within `tolerance` of `target` → no padding.
/// - Source wider than target → keep width, pad top/bottom by `anchor.ay`.
/// - Source taller than target → keep height, pad left/right by `anchor.ax`.
///
/// # Examples
/// ```
/// # use letterbox::imaging::{Anchor, Ratio, Tolerance, compute_padding};
/// // 1000x500 into a square, centered → 250px above and below
/// let g = compute_padding((1000, 500), Ratio::SQUARE, Anchor::Center, Tolerance::default()).unwrap();
/// assert_eq!((g.canvas_width, g.canvas_height), (1000, 1000));
/// assert_eq!((g.top, g.bottom), (250, 250));
/// ```
pub fn compute_padding(
    source: (u32, u32),
    target: Ratio,
    anchor: Anchor,
    tolerance: Tolerance,
) -> Result<Geometry, ValidationError> {
    let (src_w, src_h) = source;
    if src_w == 0 || src_h == 0 {
        return Err(ValidationError::InvalidDimensions {
            width: src_w,
            height: src_h,
        });
    }
    // Ratio fields are public, so a hand-built pair may still be invalid
    if Ratio::new(target.width, target.height).is_none() {
        return Err(ValidationError::InvalidRatio {
            width: target.width,
            height: target.height,
        });
    }

    let src_ratio = src_w as f64 / src_h as f64;
    let tgt_ratio = target.value();
    let (ax, ay) = anchor.factors();

    if (src_ratio - tgt_ratio).abs() < tolerance.value() {
        return Ok(Geometry::unpadded(src_w, src_h));
    }

    let geometry = if src_ratio > tgt_ratio {
        // Source is wider: width stays, height grows
        let canvas_h = canvas_edge(src_w as f64 / tgt_ratio)?.max(src_h);
        let (top, bottom) = split_extra(canvas_h - src_h, ay);
        Geometry {
            canvas_width: src_w,
            canvas_height: canvas_h,
            top,
            bottom,
            ..Geometry::unpadded(src_w, src_h)
        }
    } else {
        // Source is taller: height stays, width grows
        let canvas_w = canvas_edge(src_h as f64 * tgt_ratio)?.max(src_w);
        let (left, right) = split_extra(canvas_w - src_w, ax);
        Geometry {
            canvas_width: canvas_w,
            canvas_height: src_h,
            left,
            right,
            ..Geometry::unpadded(src_w, src_h)
        }
    };

    log::debug!(
        "{src_w}x{src_h} → {}x{} for {target} ({anchor})",
        geometry.canvas_width,
        geometry.canvas_height
    );
    Ok(geometry)
}
