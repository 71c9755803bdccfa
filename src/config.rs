//! Aggregate configuration for the validation pipeline.

use advisor::AdvisorConfig;
use forensics::ForensicsConfig;
use serde::{Deserialize, Serialize};

/// Stage configurations bundled for one [`ReceiptValidator`](crate::ReceiptValidator).
///
/// Every field defaults independently, so a deployment can override a single
/// threshold without restating the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub forensics: ForensicsConfig,
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bundles_stage_defaults() {
        let cfg = ValidatorConfig::default();
        assert_eq!(cfg.forensics, ForensicsConfig::default());
        assert_eq!(cfg.advisor, AdvisorConfig::default());
    }

    #[test]
    fn nested_overrides_deserialize() {
        let cfg: ValidatorConfig = serde_json::from_str(
            r#"{"forensics": {"min_dimension": 200}, "advisor": {"timeout_secs": 5}}"#,
        )
        .unwrap();
        assert_eq!(cfg.forensics.min_dimension, 200);
        assert_eq!(cfg.advisor.timeout_secs, 5);
    }
}
