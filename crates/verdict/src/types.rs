//! Final validation result returned to the caller.

use advisor::AiVerdict;
use forensics::ImageMetadata;
use serde::{Deserialize, Serialize};
use textsignals::TextSignals;

/// The fused outcome of one validation request.
///
/// `details` mirrors the aggregation checks in order, one rendered line per
/// check. `ai_analysis` is never empty: a failed AI call is replaced by a
/// fallback narrative before aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub details: Vec<String>,
    pub metadata: ImageMetadata,
    pub text_analysis: TextSignals,
    pub ai_analysis: String,
    pub ai_verdict: AiVerdict,
}
