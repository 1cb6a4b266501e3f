//! Pure Rust codec backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader` with format sniffing |
//! | Orientation | `ImageDecoder::orientation` + `DynamicImage::apply_orientation` |
//! | Encode → PNG | `DynamicImage::write_to` with `ImageFormat::Png` |

use super::backend::{BackendError, ImageBackend};
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader};
use std::io::Cursor;
use std::sync::LazyLock;

/// Extensions offered to the upload picker, paired with their decoder.
const UPLOAD_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("webp", ImageFormat::WebP),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    UPLOAD_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the set of image file extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Rotate/flip `image` so it displays upright.
///
/// Runs before any geometry: quarter turns swap width and height.
pub fn normalize_orientation(mut image: DynamicImage, orientation: Orientation) -> DynamicImage {
    if orientation != Orientation::NoTransforms {
        log::debug!("applying orientation {orientation:?}");
        image.apply_orientation(orientation);
    }
    image
}

/// Backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBackend for RustBackend {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, BackendError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(BackendError::Io)?;
        let format = reader.format();
        let mut decoder = reader
            .into_decoder()
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        // Unreadable orientation metadata is not worth failing the upload over
        let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);
        let image =
            DynamicImage::from_decoder(decoder).map_err(|e| BackendError::Decode(e.to_string()))?;
        log::debug!(
            "decoded {:?} {}x{} {:?}",
            format,
            image.width(),
            image.height(),
            image.color()
        );
        Ok(normalize_orientation(image, orientation))
    }

    fn encode_png(&self, image: &DynamicImage) -> Result<Vec<u8>, BackendError> {
        let mut buf = Cursor::new(Vec::new());
        image
            .write_to(&mut buf, ImageFormat::Png)
            .map_err(|e| BackendError::Encode(e.to_string()))?;
        Ok(buf.into_inner())
    }
}
