use serde::{Deserialize, Serialize};

/// Runtime configuration for the text-generation service call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Generation endpoint. The selected credential is appended as the `key`
    /// query parameter.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-call timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_generation_endpoint() {
        let cfg = AdvisorConfig::default();
        assert!(cfg.api_url.contains("generateContent"));
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: AdvisorConfig = serde_json::from_str(r#"{"timeout_secs": 5}"#).unwrap();
        assert_eq!(cfg.timeout_secs, 5);
        assert!(cfg.api_url.contains("generativelanguage"));
    }
}
