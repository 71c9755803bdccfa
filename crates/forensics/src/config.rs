use serde::{Deserialize, Serialize};

/// Thresholds driving the forensic warning checks.
///
/// Defaults reproduce the service's observed behavior; each field can be
/// overridden independently through configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForensicsConfig {
    /// Maximum tolerated gap between file creation and modification, in seconds.
    #[serde(default = "default_max_timestamp_skew_secs")]
    pub max_timestamp_skew_secs: u64,

    /// Minimum mean-minus-min spread of the first color channel; anything
    /// flatter suggests synthetic or edited content.
    #[serde(default = "default_min_channel_variation")]
    pub min_channel_variation: f64,

    /// Files smaller than this (in KB) are flagged as too small for a capture.
    #[serde(default = "default_min_file_size_kb")]
    pub min_file_size_kb: u64,

    /// Images with width or height below this are flagged as low resolution.
    #[serde(default = "default_min_dimension")]
    pub min_dimension: u32,
}

impl Default for ForensicsConfig {
    fn default() -> Self {
        Self {
            max_timestamp_skew_secs: default_max_timestamp_skew_secs(),
            min_channel_variation: default_min_channel_variation(),
            min_file_size_kb: default_min_file_size_kb(),
            min_dimension: default_min_dimension(),
        }
    }
}

fn default_max_timestamp_skew_secs() -> u64 {
    300
}

fn default_min_channel_variation() -> f64 {
    10.0
}

fn default_min_file_size_kb() -> u64 {
    50
}

fn default_min_dimension() -> u32 {
    300
}
