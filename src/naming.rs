//! Download filename derivation.
//!
//! The result is always PNG, so the suggested name keeps the upload's stem
//! and swaps the extension. The stem is everything before the *first* dot,
//! matching what users see for names like `IMG_0001.HEIC.jpg`:
//!
//! - `beach.jpg`, prefix style → `edited_beach.png`
//! - `beach.jpg`, suffix style → `beach_edited.png`
//! - `IMG_0001.HEIC.jpg` → `edited_IMG_0001.png`
//! - `.jpg` → `edited_image.png`

use serde::{Deserialize, Serialize};

/// Where the `edited` marker goes in the output name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NamingStyle {
    /// `edited_<stem>.png`
    #[default]
    Prefix,
    /// `<stem>_edited.png`
    Suffix,
}

/// Stem used when the upload name has nothing before its first dot.
const FALLBACK_STEM: &str = "image";

/// Stem of an uploaded filename: any directory part dropped, cut at the first dot.
pub fn upload_stem(file_name: &str) -> &str {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    match base.split('.').next() {
        Some(stem) if !stem.is_empty() => stem,
        _ => FALLBACK_STEM,
    }
}

/// Suggested download name for the letterboxed result of `file_name`.
pub fn output_file_name(file_name: &str, style: NamingStyle) -> String {
    let stem = upload_stem(file_name);
    match style {
        NamingStyle::Prefix => format!("edited_{stem}.png"),
        NamingStyle::Suffix => format!("{stem}_edited.png"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_style() {
        assert_eq!(
            output_file_name("beach.jpg", NamingStyle::Prefix),
            "edited_beach.png"
        );
    }

    #[test]
    fn suffix_style() {
        assert_eq!(
            output_file_name("beach.jpg", NamingStyle::Suffix),
            "beach_edited.png"
        );
    }

    #[test]
    fn stem_stops_at_first_dot() {
        assert_eq!(upload_stem("IMG_0001.HEIC.jpg"), "IMG_0001");
    }

    #[test]
    fn name_without_extension() {
        assert_eq!(upload_stem("scan"), "scan");
    }

    #[test]
    fn dot_file_falls_back() {
        assert_eq!(
            output_file_name(".jpg", NamingStyle::Prefix),
            "edited_image.png"
        );
        assert_eq!(upload_stem(""), "image");
    }

    #[test]
    fn directories_are_dropped() {
        assert_eq!(upload_stem("photos/2024/beach.jpg"), "beach");
        assert_eq!(upload_stem(r"C:\Users\me\beach.jpg"), "beach");
    }

    #[test]
    fn default_is_prefix() {
        assert_eq!(NamingStyle::default(), NamingStyle::Prefix);
    }
}
