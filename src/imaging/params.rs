//! Parameter types for a letterbox request.
//!
//! These structs describe *what* to produce, not *how*. They are the
//! interface between the caller (CLI or config) and the
//! [`operations`](super::operations) pipeline.
//!
//! ## Types
//!
//! - [`Tolerance`] — Epsilon under which source and target ratios count as equal.
//! - [`LetterboxRequest`] — Target ratio, background color, anchor, tolerance.
//! - [`ValidationError`] — Programmatic input errors (bad anchor, zero dimension, ...).

use super::anchor::Anchor;
use super::color::Color;
use super::ratio::Ratio;
use thiserror::Error;

/// Invalid input passed to the geometry or compositing stage.
///
/// UI inputs come from fixed menus, so in practice these indicate a
/// programming error upstream and are never silently corrected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("unknown anchor '{0}'")]
    UnknownAnchor(String),
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("ratio parts must be positive and finite, got {width}:{height}")]
    InvalidRatio { width: f64, height: f64 },
    #[error("invalid color '{0}': expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
    #[error("tolerance must be in (0, {max}], got {0}", max = Tolerance::MAX)]
    InvalidTolerance(f64),
    #[error("padded canvas would exceed {} pixels per side", u32::MAX)]
    CanvasTooLarge,
    #[error("geometry was computed for {expected_w}x{expected_h}, image is {actual_w}x{actual_h}")]
    GeometryMismatch {
        expected_w: u32,
        expected_h: u32,
        actual_w: u32,
        actual_h: u32,
    },
}

/// Ratio-equality epsilon.
///
/// When `|src_ratio - target_ratio|` is below this value the source is
/// returned without padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(f64);

impl Tolerance {
    pub const MAX: f64 = 1e-2;

    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_finite() && value > 0.0 && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidTolerance(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(1e-6)
    }
}

/// Everything needed to letterbox one image.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterboxRequest {
    pub ratio: Ratio,
    pub background: Color,
    pub anchor: Anchor,
    pub tolerance: Tolerance,
}

impl Default for LetterboxRequest {
    fn default() -> Self {
        Self {
            ratio: Ratio::SQUARE,
            background: Color::WHITE,
            anchor: Anchor::Center,
            tolerance: Tolerance::default(),
        }
    }
}
