//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Apply
//!
//! ```text
//! beach.jpg → edited_beach.png
//!     Source: 1000x500
//!     Target: 1:1 (center)
//!     Canvas: 1000x1000 RGB
//!     Padding: top 250, bottom 250
//! ```
//!
//! ## Plan
//!
//! ```text
//! 500x1000 → 1778x1000 for 16:9 (top-left)
//!     Padding: left 0, right 1278
//!     Offset: (0, 0)
//! ```
//!
//! ## Presets
//!
//! ```text
//! Ratios
//! 001 1:1 (Square)
//! ...
//!
//! Anchors
//! 001 center (0.5, 0.5)
//! ...
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::imaging::{Anchor, Geometry, LetterboxRequest, RATIO_PRESETS};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Describe the padded sides, or `none` when the source is untouched.
fn padding_line(geometry: &Geometry) -> String {
    if geometry.is_unpadded() {
        "none (ratio already matches)".to_string()
    } else if geometry.top + geometry.bottom > 0 {
        format!("top {}, bottom {}", geometry.top, geometry.bottom)
    } else {
        format!("left {}, right {}", geometry.left, geometry.right)
    }
}

// ============================================================================
// Apply
// ============================================================================

pub fn format_apply_output(
    input: &Path,
    output: &Path,
    request: &LetterboxRequest,
    geometry: &Geometry,
    has_alpha: bool,
) -> Vec<String> {
    let mode = if has_alpha { "RGBA" } else { "RGB" };
    vec![
        format!("{} → {}", file_label(input), file_label(output)),
        format!(
            "{}Source: {}x{}",
            indent(1),
            geometry.source_width,
            geometry.source_height
        ),
        format!("{}Target: {} ({})", indent(1), request.ratio, request.anchor),
        format!(
            "{}Canvas: {}x{} {}",
            indent(1),
            geometry.canvas_width,
            geometry.canvas_height,
            mode
        ),
        format!("{}Padding: {}", indent(1), padding_line(geometry)),
    ]
}

pub fn print_apply_output(
    input: &Path,
    output: &Path,
    request: &LetterboxRequest,
    geometry: &Geometry,
    has_alpha: bool,
) {
    for line in format_apply_output(input, output, request, geometry, has_alpha) {
        println!("{}", line);
    }
}

// ============================================================================
// Plan
// ============================================================================

pub fn format_plan_output(request: &LetterboxRequest, geometry: &Geometry) -> Vec<String> {
    let (x, y) = geometry.offset();
    vec![
        format!(
            "{}x{} → {}x{} for {} ({})",
            geometry.source_width,
            geometry.source_height,
            geometry.canvas_width,
            geometry.canvas_height,
            request.ratio,
            request.anchor
        ),
        format!("{}Padding: {}", indent(1), padding_line(geometry)),
        format!("{}Offset: ({}, {})", indent(1), x, y),
    ]
}

pub fn print_plan_output(request: &LetterboxRequest, geometry: &Geometry) {
    for line in format_plan_output(request, geometry) {
        println!("{}", line);
    }
}

// ============================================================================
// Presets
// ============================================================================

pub fn format_presets() -> Vec<String> {
    let mut lines = vec!["Ratios".to_string()];
    for (i, preset) in RATIO_PRESETS.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), preset.label));
    }
    lines.push(format!("{}Custom: any W:H or decimal, e.g. 21:9 or 1.91", indent(1)));

    lines.push(String::new());
    lines.push("Anchors".to_string());
    for (i, anchor) in Anchor::all().enumerate() {
        let (ax, ay) = anchor.factors();
        lines.push(format!("{} {} ({}, {})", format_index(i + 1), anchor, ax, ay));
    }
    lines
}

pub fn print_presets() {
    for line in format_presets() {
        println!("{}", line);
    }
}
