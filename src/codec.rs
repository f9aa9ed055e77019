//! Thin adapter over the `image` crate.
//!
//! Everything format-specific (reader selection, raster encoding) is
//! delegated to the codec library; this module only fixes the crate's
//! conventions: guessed-format decoding, format tokens for output naming,
//! and the quarter-turn transforms.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::rotation::Rotation;
use crate::{Result, SpindleError};

/// A decoded image together with its detected encoding and origin.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
    pub path: PathBuf,
}

impl SourceImage {
    /// The extension token used for output naming.
    ///
    /// Prefers the file's own extension when it is a known alias of the
    /// detected format, so `photo.jpeg` round-trips as `.jpeg` rather than
    /// being renamed to `.jpg`.
    pub fn format_token(&self) -> String {
        let known = self.format.extensions_str();
        if let Some(ext) = self.path.extension().and_then(|e| e.to_str()) {
            if known.iter().any(|k| ext.eq_ignore_ascii_case(k)) {
                return ext.to_string();
            }
        }
        known.first().copied().unwrap_or("img").to_string()
    }
}

/// Read and decode an image file, detecting its format from content.
///
/// Fails with [`SpindleError::UnsupportedImage`] when no decoder recognizes
/// the byte stream.
pub fn read_image(path: &Path) -> Result<SourceImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format().ok_or_else(|| {
        SpindleError::UnsupportedImage(format!("no decoder for {}", path.display()))
    })?;
    let image = reader.decode()?;
    Ok(SourceImage {
        image,
        format,
        path: path.to_path_buf(),
    })
}

/// Encode a raster into the given format.
pub fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, format)?;
    Ok(buf.into_inner())
}

/// Decode encoded image bytes, guessing the format from content.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| match e {
        image::ImageError::Unsupported(u) => SpindleError::UnsupportedImage(u.to_string()),
        other => SpindleError::Image(other),
    })
}

/// Whether the raster carries no color channels (single-luma formats).
pub fn is_grayscale(image: &DynamicImage) -> bool {
    !image.color().has_color()
}

/// Apply a quarter-turn rotation. `Rotation::None` is the identity.
pub fn apply_rotation(image: DynamicImage, rotation: Rotation) -> DynamicImage {
    match rotation {
        Rotation::None => image,
        Rotation::Ninety => image.rotate90(),
        Rotation::OneEighty => image.rotate180(),
        Rotation::TwoSeventy => image.rotate270(),
    }
}
