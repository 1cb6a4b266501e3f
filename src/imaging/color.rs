//! Background color parsing.
//!
//! Colors arrive as hex text from a color picker (`#RRGGBB`) or from config,
//! where an alpha byte may be appended (`#RRGGBBAA`). Six-digit input is
//! normalized to fully opaque RGBA.

use super::params::ValidationError;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    pub fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into a [`Color`].
///
/// The leading `#` is optional. Any other length or a non-hex digit is an
/// [`ValidationError::InvalidColor`].
pub fn parse_color(text: &str) -> Result<Color, ValidationError> {
    let invalid = || ValidationError::InvalidColor(text.to_string());
    let hex = text.strip_prefix('#').unwrap_or(text);

    // from_str_radix would accept a leading '+', so check digits up front
    if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channels = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid()))
        .collect::<Result<Vec<u8>, _>>()?;

    Ok(match channels[..] {
        [r, g, b] => Color::rgb(r, g, b),
        [r, g, b, a] => Color::rgba(r, g, b, a),
        _ => return Err(invalid()),
    })
}
