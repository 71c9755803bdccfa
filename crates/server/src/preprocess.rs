//! Image preprocessing for OCR.
//!
//! Produces the normalized derivative the OCR engine reads: resized to a
//! maximum width (never enlarged), sharpened, and contrast-stretched per
//! channel. The derivative lands next to the original with a `_processed`
//! suffix and a `.png` extension, and is removed with the request.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbImage};
use thiserror::Error;

/// Maximum derivative width in pixels; aspect ratio is preserved.
pub const MAX_WIDTH: u32 = 1800;

#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Preprocesses the uploaded image and returns the derivative path.
pub fn preprocess(path: &Path) -> Result<PathBuf, PreprocessError> {
    let image = image::open(path)?;

    let image = if image.width() > MAX_WIDTH {
        image.resize(MAX_WIDTH, u32::MAX, FilterType::Lanczos3)
    } else {
        image
    };

    let image = image.unsharpen(1.0, 2);
    let image = DynamicImage::ImageRgb8(normalize(image.to_rgb8()));

    let output = derived_path(path);
    image.save_with_format(&output, ImageFormat::Png)?;
    Ok(output)
}

/// Derivative path: `<stem>_processed.png` next to the original.
pub fn derived_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}_processed.png"))
}

/// Per-channel linear contrast stretch to the full 0..=255 range.
fn normalize(mut buffer: RgbImage) -> RgbImage {
    let mut min = [u8::MAX; 3];
    let mut max = [u8::MIN; 3];
    for pixel in buffer.pixels() {
        for channel in 0..3 {
            let value = pixel.0[channel];
            min[channel] = min[channel].min(value);
            max[channel] = max[channel].max(value);
        }
    }

    for pixel in buffer.pixels_mut() {
        for channel in 0..3 {
            let range = max[channel] - min[channel];
            if range == 0 {
                continue;
            }
            let value = u32::from(pixel.0[channel] - min[channel]);
            pixel.0[channel] = (value * 255 / u32::from(range)) as u8;
        }
    }
    buffer
}
