//! # Letterbox
//!
//! Pads a photo to a target aspect ratio without cropping or scaling it.
//! The source pixels are copied untouched onto a larger canvas filled with a
//! background color, positioned by an anchor.
//!
//! # Pipeline
//!
//! ```text
//! bytes ──decode + orient──▶ image ──compute_padding──▶ Geometry
//!                              │                            │
//!                              └──────── composite ◀────────┘
//!                                           │
//!                                      encode PNG ──▶ bytes
//! ```
//!
//! Every stage is a pure function of its inputs. Nothing is cached between
//! requests and the source image is never modified.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Ratio/color/anchor parsing, geometry, compositing, codec backend |
//! | [`config`] | `letterbox.toml` loading, merging, validation |
//! | [`naming`] | Suggested output filename (`edited_<name>.png`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Lenient Ratios, Strict Everything Else
//!
//! Ratio text is typed by people, so [`imaging::parse_ratio`] never fails and
//! degrades to 1:1. Anchors and colors come from menus and pickers; a bad
//! value there is a bug upstream and surfaces as
//! [`imaging::ValidationError`].
//!
//! ## PNG Output
//!
//! Results are always encoded as PNG: it is lossless, so the untouched
//! source region stays pixel-exact, and it carries the alpha channel when a
//! translucent background or a transparent source needs one.
//!
//! ## RGB Unless Alpha Is Needed
//!
//! The canvas is RGBA only when the source has alpha or the background is
//! translucent. The common opaque case stays three channels.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
