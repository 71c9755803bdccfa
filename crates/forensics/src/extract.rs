//! Metadata extraction and forensic checks.
//!
//! [`extract`] turns a stored image file into an [`ImageMetadata`] record.
//! It never raises to its caller: any internal failure is converted into the
//! single warning [`WARN_METADATA_ERROR`] so the pipeline degrades instead
//! of aborting. Fields populated before the failure are kept.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local};
use image::{ColorType, DynamicImage, ImageFormat, ImageReader};

use crate::config::ForensicsConfig;
use crate::error::ForensicsError;
use crate::screenshot;
use crate::tags;
use crate::types::{FileStats, ImageInfo, ImageMetadata};

/// Warning when the image does not look like a screen capture.
pub const WARN_NOT_SCREENSHOT: &str = "⚠️ Imagem não parece ser uma captura de tela";
/// Warning when creation and modification times are suspiciously far apart.
pub const WARN_TIMESTAMP_SKEW: &str = "⚠️ Tempo suspeito entre criação e modificação do arquivo";
/// Warning when the first color channel shows almost no variation.
pub const WARN_LOW_COLOR_VARIATION: &str = "⚠️ Baixa variação de cores - possível edição";
/// Warning when the file is too small for a screen capture.
pub const WARN_FILE_TOO_SMALL: &str = "⚠️ Arquivo muito pequeno para uma captura de tela";
/// Warning when the resolution is too low for a screen capture.
pub const WARN_LOW_RESOLUTION: &str = "⚠️ Resolução muito baixa para uma captura de tela";
/// Warning when metadata analysis itself failed part-way.
pub const WARN_METADATA_ERROR: &str = "⚠️ Erro ao analisar alguns metadados";

/// Tool-name fragments that mark the image as touched by editing software.
pub const EDITING_SOFTWARE: [&str; 5] = ["photoshop", "gimp", "paint", "editor", "adobe"];

/// Extracts the metadata record for the image at `path`.
pub fn extract(path: &Path, cfg: &ForensicsConfig) -> ImageMetadata {
    let mut metadata = ImageMetadata::default();
    if let Err(err) = analyze(path, cfg, &mut metadata) {
        tracing::warn!(path = %path.display(), error = %err, "metadata analysis failed");
        metadata.warnings.push(WARN_METADATA_ERROR.to_string());
    }
    metadata
}

fn analyze(
    path: &Path,
    cfg: &ForensicsConfig,
    metadata: &mut ImageMetadata,
) -> Result<(), ForensicsError> {
    let stats = fs::metadata(path)?;
    let modified = stats.modified()?;
    let created = stats.created().unwrap_or(modified);
    let accessed = stats.accessed().unwrap_or(modified);

    metadata.basic = FileStats {
        size: format!("{:.2} KB", stats.len() as f64 / 1024.0),
        created: format_timestamp(created),
        modified: format_timestamp(modified),
        accessed: format_timestamp(accessed),
    };

    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let image = reader
        .decode()
        .map_err(|err| ForensicsError::Decode(err.to_string()))?;

    metadata.exif = tags::decode(path)?;
    metadata.image_info = describe(&image, format, &metadata.exif);

    metadata.is_screenshot = screenshot::classify(&metadata.image_info, &metadata.exif);
    if !metadata.is_screenshot {
        metadata.warnings.push(WARN_NOT_SCREENSHOT.to_string());
    }

    let skew = modified
        .duration_since(created)
        .unwrap_or_else(|err| err.duration());
    if skew > Duration::from_secs(cfg.max_timestamp_skew_secs) {
        metadata.warnings.push(WARN_TIMESTAMP_SKEW.to_string());
    }

    let (mean, min) = first_channel_stats(&image);
    if mean - min < cfg.min_channel_variation {
        metadata.warnings.push(WARN_LOW_COLOR_VARIATION.to_string());
    }

    if stats.len() < cfg.min_file_size_kb * 1024 {
        metadata.warnings.push(WARN_FILE_TOO_SMALL.to_string());
    }

    if metadata.image_info.width < cfg.min_dimension
        || metadata.image_info.height < cfg.min_dimension
    {
        metadata.warnings.push(WARN_LOW_RESOLUTION.to_string());
    }

    if let Some(warning) = editing_software_warning(&metadata.exif) {
        metadata.warnings.push(warning);
    }

    Ok(())
}

/// Checks the decoded `Software` tag against the editing-tool vocabulary,
/// echoing the original description into the warning text.
pub fn editing_software_warning(exif: &BTreeMap<String, String>) -> Option<String> {
    let software = exif.get("Software")?;
    let lower = software.to_lowercase();
    if EDITING_SOFTWARE.iter().any(|tool| lower.contains(tool)) {
        Some(format!("⚠️ Software de edição detectado: {software}"))
    } else {
        None
    }
}

fn describe(
    image: &DynamicImage,
    format: Option<ImageFormat>,
    exif: &BTreeMap<String, String>,
) -> ImageInfo {
    let color = image.color();
    let channels = color.channel_count();
    let bit_depth = color.bytes_per_pixel() / channels * 8;

    ImageInfo {
        width: image.width(),
        height: image.height(),
        format: format.map(format_label).unwrap_or_default(),
        color_space: color_space_label(color).to_string(),
        channels,
        bit_depth,
        density: exif.get("XResolution").and_then(|v| parse_density(v)),
        has_alpha: color.has_alpha(),
        compression: None,
    }
}

fn format_label(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "jpeg".to_string(),
        ImageFormat::Png => "png".to_string(),
        ImageFormat::WebP => "webp".to_string(),
        other => format!("{other:?}").to_lowercase(),
    }
}

fn color_space_label(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 | ColorType::L16 | ColorType::La8 | ColorType::La16 => "gray",
        _ => "srgb",
    }
}

/// Parses a density description such as `"72"` or `"72/1"`.
fn parse_density(value: &str) -> Option<u32> {
    let leading: String = value.chars().take_while(char::is_ascii_digit).collect();
    leading.parse().ok()
}

/// Mean and minimum of the first color channel, as floats.
fn first_channel_stats(image: &DynamicImage) -> (f64, f64) {
    let rgb = image.to_rgb8();
    let mut sum: u64 = 0;
    let mut min = u8::MAX;
    for pixel in rgb.pixels() {
        let value = pixel.0[0];
        sum += u64::from(value);
        min = min.min(value);
    }
    let count = u64::from(rgb.width()) * u64::from(rgb.height());
    if count == 0 {
        return (0.0, 0.0);
    }
    (sum as f64 / count as f64, f64::from(min))
}

fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%d/%m/%Y %H:%M:%S")
        .to_string()
}
