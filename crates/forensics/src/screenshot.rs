//! Screen-capture heuristic.
//!
//! A pure predicate over decoded image properties and tag descriptions. The
//! rule is ordered and the first match wins:
//!
//! 1. A `Software` description naming a known capture tool or platform.
//! 2. Otherwise, a common display aspect ratio (5% relative tolerance) OR a
//!    common display resolution (10% per axis, either orientation).
//!
//! This is a heuristic, not proof: it classifies plausibility from embedded
//! metadata and geometry alone.

use std::collections::BTreeMap;

use crate::types::ImageInfo;

/// Capture tools and platforms whose `Software` tag marks a screenshot.
pub const SCREENSHOT_SOFTWARE: [&str; 11] = [
    "screenshot",
    "print",
    "snipping tool",
    "lightshot",
    "greenshot",
    "snagit",
    "windows",
    "android",
    "ios",
    "mac",
    "iphone",
];

/// Common display aspect ratios: 16:9, 16:10, 4:3, 21:9, 19:9.
pub const COMMON_RATIOS: [f64; 5] = [
    16.0 / 9.0,
    16.0 / 10.0,
    4.0 / 3.0,
    21.0 / 9.0,
    19.0 / 9.0,
];

/// Common display resolutions, width x height.
pub const COMMON_RESOLUTIONS: [(f64, f64); 9] = [
    (1920.0, 1080.0),
    (2560.0, 1440.0),
    (3840.0, 2160.0),
    (1366.0, 768.0),
    (1280.0, 720.0),
    (1440.0, 900.0),
    (2880.0, 1800.0),
    (1792.0, 828.0),
    (2340.0, 1080.0),
];

const RATIO_TOLERANCE: f64 = 0.05;
const RESOLUTION_TOLERANCE: f64 = 0.10;

/// Decides whether the image plausibly originates from a screen capture.
pub fn classify(info: &ImageInfo, exif: &BTreeMap<String, String>) -> bool {
    if let Some(software) = exif.get("Software") {
        let software = software.to_lowercase();
        if SCREENSHOT_SOFTWARE.iter().any(|s| software.contains(s)) {
            return true;
        }
    }

    if info.height == 0 {
        return false;
    }
    let aspect = f64::from(info.width) / f64::from(info.height);
    let common_ratio = COMMON_RATIOS
        .iter()
        .any(|ratio| (aspect - ratio).abs() < ratio * RATIO_TOLERANCE);

    let width = f64::from(info.width);
    let height = f64::from(info.height);
    let common_resolution = COMMON_RESOLUTIONS.iter().any(|&(w, h)| {
        (near(width, w) && near(height, h)) || (near(width, h) && near(height, w))
    });

    common_ratio || common_resolution
}

fn near(value: f64, reference: f64) -> bool {
    (value - reference).abs() < reference * RESOLUTION_TOLERANCE
}
