//! Target aspect ratios and the text parser behind the ratio selector.
//!
//! Ratio text comes from two places: a fixed menu of presets and a free-text
//! field. Both go through [`parse_ratio`], which never fails. Anything it
//! cannot read degrades to a square 1:1 ratio.
//!
//! ## Accepted forms
//!
//! | Input | Ratio |
//! |---|---|
//! | `"16:9"` | 16 / 9 |
//! | `"4:5 (Portrait)"` | 0.8 (text after the first space is a label) |
//! | `"1.5"` | 1.5 |
//! | `"bogus"`, `""`, `"3:0"`, `"-2"` | 1 / 1 |

/// Positive width/height pair describing a target aspect ratio.
///
/// The pair is kept rather than the reduced quotient so that `16:9` can be
/// displayed as such. Single-number input is stored as `value:1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratio {
    pub width: f64,
    pub height: f64,
}

impl Ratio {
    pub const SQUARE: Ratio = Ratio {
        width: 1.0,
        height: 1.0,
    };

    /// Build a ratio from a width/height pair.
    ///
    /// Returns `None` unless both parts and their quotient are finite and
    /// strictly positive.
    pub fn new(width: f64, height: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        (valid(width) && valid(height) && valid(width / height))
            .then_some(Self { width, height })
    }

    /// Build a ratio from a single quotient (`1.5` → `1.5:1`).
    pub fn from_value(value: f64) -> Option<Self> {
        Self::new(value, 1.0)
    }

    /// Width divided by height.
    pub fn value(self) -> f64 {
        self.width / self.height
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.height == 1.0 && self.width.fract() != 0.0 {
            write!(f, "{}", self.width)
        } else {
            write!(f, "{}:{}", self.width, self.height)
        }
    }
}

/// A named entry in the ratio menu.
#[derive(Debug, Clone, Copy)]
pub struct RatioPreset {
    /// Menu label; the leading token is what [`parse_ratio`] reads.
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
}

/// Ratio menu in display order.
pub const RATIO_PRESETS: &[RatioPreset] = &[
    RatioPreset {
        label: "1:1 (Square)",
        width: 1,
        height: 1,
    },
    RatioPreset {
        label: "4:5 (Portrait)",
        width: 4,
        height: 5,
    },
    RatioPreset {
        label: "9:16 (Story)",
        width: 9,
        height: 16,
    },
    RatioPreset {
        label: "16:9 (Widescreen)",
        width: 16,
        height: 9,
    },
    RatioPreset {
        label: "3:4 (Photo)",
        width: 3,
        height: 4,
    },
];

/// Parse user-facing ratio text, falling back to 1:1 on anything malformed.
///
/// Only the token before the first space is read, so menu labels such as
/// `"9:16 (Story)"` parse directly. A token containing `:` is split on the
/// first colon into width and height; otherwise the whole token is read as
/// a single quotient.
pub fn parse_ratio(text: &str) -> Ratio {
    let token = text.split(' ').next().unwrap_or_default();
    let parsed = match token.split_once(':') {
        Some((w, h)) => match (w.parse::<f64>(), h.parse::<f64>()) {
            (Ok(w), Ok(h)) => Ratio::new(w, h),
            _ => None,
        },
        None => token.parse::<f64>().ok().and_then(Ratio::from_value),
    };
    parsed.unwrap_or_else(|| {
        log::debug!("ratio text {text:?} not understood, using 1:1");
        Ratio::SQUARE
    })
}
