//! Anchor positions: where the source image sits inside the padded canvas.
//!
//! Each anchor maps to a factor pair `(ax, ay)` in `[0, 1]`. `ax` is the
//! fraction of the extra width placed *before* (left of) the image, `ay` the
//! fraction of extra height placed above it. So `(0, 0)` keeps the image
//! flush top-left and `(1, 1)` flush bottom-right.

use super::params::ValidationError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// `(anchor, canonical name, ax, ay)` in menu order.
static ANCHOR_TABLE: &[(Anchor, &str, f64, f64)] = &[
    (Anchor::Center, "center", 0.5, 0.5),
    (Anchor::Top, "top", 0.5, 0.0),
    (Anchor::Bottom, "bottom", 0.5, 1.0),
    (Anchor::Left, "left", 0.0, 0.5),
    (Anchor::Right, "right", 1.0, 0.5),
    (Anchor::TopLeft, "top-left", 0.0, 0.0),
    (Anchor::TopRight, "top-right", 1.0, 0.0),
    (Anchor::BottomLeft, "bottom-left", 0.0, 1.0),
    (Anchor::BottomRight, "bottom-right", 1.0, 1.0),
];

impl Anchor {
    /// All anchors in menu order.
    pub fn all() -> impl Iterator<Item = Anchor> {
        ANCHOR_TABLE.iter().map(|&(a, ..)| a)
    }

    fn entry(self) -> &'static (Anchor, &'static str, f64, f64) {
        let row = match self {
            Anchor::Center => 0,
            Anchor::Top => 1,
            Anchor::Bottom => 2,
            Anchor::Left => 3,
            Anchor::Right => 4,
            Anchor::TopLeft => 5,
            Anchor::TopRight => 6,
            Anchor::BottomLeft => 7,
            Anchor::BottomRight => 8,
        };
        &ANCHOR_TABLE[row]
    }

    pub fn name(self) -> &'static str {
        self.entry().1
    }

    /// `(ax, ay)` padding distribution factors.
    pub fn factors(self) -> (f64, f64) {
        let &(_, _, ax, ay) = self.entry();
        (ax, ay)
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Anchor {
    type Err = ValidationError;

    /// Case-insensitive; `_` and spaces are read as `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        ANCHOR_TABLE
            .iter()
            .find(|(_, name, ..)| *name == normalized)
            .map(|&(a, ..)| a)
            .ok_or_else(|| ValidationError::UnknownAnchor(s.to_string()))
    }
}
