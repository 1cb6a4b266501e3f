//! Letterbox imaging — geometry, compositing, and the codec boundary.
//!
//! | Concern | Module |
//! |---|---|
//! | **Ratio text** | [`ratio`] — `"16:9"`, `"4:5 (Portrait)"`, `"1.5"` → [`Ratio`] |
//! | **Color text** | [`color`] — `#RRGGBB[AA]` → [`Color`] |
//! | **Anchor** | [`anchor`] — 9 named positions → `(ax, ay)` factors |
//! | **Geometry** | `calculations` — canvas size + per-side padding |
//! | **Compositing** | [`compose`] — background fill + source paste |
//! | **Codec** | [`ImageBackend`] + [`RustBackend`] (`image` crate) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing a request
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod anchor;
pub mod backend;
mod calculations;
pub mod color;
pub mod compose;
pub mod operations;
mod params;
pub mod ratio;
pub mod rust_backend;

pub use anchor::Anchor;
pub use backend::{BackendError, ImageBackend};
pub use calculations::{Geometry, compute_padding};
pub use color::{Color, parse_color};
pub use compose::composite;
pub use operations::{
    Letterboxed, OperationError, letterbox_bytes, letterbox_image, plan_letterbox,
};
pub use params::{LetterboxRequest, Tolerance, ValidationError};
pub use ratio::{RATIO_PRESETS, Ratio, RatioPreset, parse_ratio};
pub use rust_backend::{RustBackend, supported_input_extensions};
