//! Data model for the forensics stage.
//!
//! Field names on the wire keep the original Portuguese response format of
//! the service (`tamanho`, `largura`, `imageInfo`, ...); the Rust side uses
//! descriptive English names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Basic file statistics, pre-formatted for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileStats {
    /// File size in KB with two decimal places (e.g. `"123.45 KB"`).
    #[serde(rename = "tamanho")]
    pub size: String,
    /// Creation timestamp as a displayable local string.
    #[serde(rename = "criacao")]
    pub created: String,
    /// Last-modification timestamp as a displayable local string.
    #[serde(rename = "modificacao")]
    pub modified: String,
    /// Last-access timestamp as a displayable local string.
    #[serde(rename = "ultimoAcesso")]
    pub accessed: String,
}

/// Decoded image properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageInfo {
    #[serde(rename = "largura")]
    pub width: u32,
    #[serde(rename = "altura")]
    pub height: u32,
    /// Container format (e.g. `"jpeg"`, `"png"`).
    #[serde(rename = "formato")]
    pub format: String,
    /// Color space label (e.g. `"srgb"`, `"gray"`).
    #[serde(rename = "espacoCor")]
    pub color_space: String,
    #[serde(rename = "canais")]
    pub channels: u8,
    #[serde(rename = "profundidadeBits")]
    pub bit_depth: u8,
    /// Pixel density in DPI, when the embedded tags carry one.
    #[serde(rename = "dpi", skip_serializing_if = "Option::is_none")]
    pub density: Option<u32>,
    #[serde(rename = "temAlpha")]
    pub has_alpha: bool,
    /// Compression scheme, when the format reports one.
    #[serde(rename = "compressao", skip_serializing_if = "Option::is_none")]
    pub compression: Option<String>,
}

/// Structured metadata record for one stored image.
///
/// `warnings` is append-only: once a forensic check has run, its warning is
/// never removed. A tag missing from `exif` means the tag had no decodable
/// description, never a null value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageMetadata {
    pub basic: FileStats,
    #[serde(rename = "imageInfo")]
    pub image_info: ImageInfo,
    /// Decoded tag descriptions, keyed by tag name.
    pub exif: BTreeMap<String, String>,
    /// Ordered forensic flags accumulated during extraction.
    pub warnings: Vec<String>,
    /// Whether the image plausibly originates from a screen capture.
    #[serde(rename = "isScreenshot")]
    pub is_screenshot: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_uses_original_field_names() {
        let metadata = ImageMetadata {
            basic: FileStats {
                size: "10.00 KB".into(),
                ..FileStats::default()
            },
            image_info: ImageInfo {
                width: 1920,
                height: 1080,
                ..ImageInfo::default()
            },
            ..ImageMetadata::default()
        };
        let json = serde_json::to_string(&metadata).unwrap();
        assert!(json.contains("\"tamanho\":\"10.00 KB\""));
        assert!(json.contains("\"largura\":1920"));
        assert!(json.contains("\"imageInfo\""));
        assert!(json.contains("\"isScreenshot\":false"));
    }

    #[test]
    fn absent_density_is_omitted_not_null() {
        let info = ImageInfo::default();
        let json = serde_json::to_string(&info).unwrap();
        assert!(!json.contains("dpi"));
        assert!(!json.contains("compressao"));
    }
}
