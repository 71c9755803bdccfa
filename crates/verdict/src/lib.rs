//! Verdict aggregation.
//!
//! The final stage of the validation pipeline: fuses the forensic metadata,
//! the text signals, and the AI assessment into a single boolean verdict
//! plus an ordered, human-readable explanation trail.
//!
//! The verdict is the AND-reduction of an ordered list of named checks (see
//! [`checks`]); any failing check vetoes the whole result, and more than the
//! tolerated number of warnings is a monotonic veto regardless of every
//! other signal.
//!
//! One rendering quirk is preserved on purpose: the keyword line's check
//! mark displays the overall verdict rather than the keyword check's own
//! result. Consumers of the rendered details rely on the historical shape.

pub mod checks;
pub mod types;

pub use checks::{CheckOutcome, MAX_METADATA_WARNINGS, MAX_TEXT_WARNINGS, MIN_KEYWORDS};
pub use types::ValidationResult;

use advisor::AiAssessment;
use forensics::ImageMetadata;
use textsignals::TextSignals;

/// Fuses the three stage outputs into the final [`ValidationResult`].
pub fn decide(
    metadata: ImageMetadata,
    signals: TextSignals,
    assessment: AiAssessment,
) -> ValidationResult {
    let outcomes = checks::run_checks(&metadata, &signals, &assessment);
    let is_valid = outcomes.iter().all(|check| check.passed);

    let details = outcomes
        .iter()
        .map(|check| {
            // The keyword line displays the overall verdict, not its own result.
            let shown = if check.name == checks::KEYWORDS {
                is_valid
            } else {
                check.passed
            };
            format!("{} {}", if shown { '✓' } else { '✗' }, check.message)
        })
        .collect();

    ValidationResult {
        is_valid,
        details,
        metadata,
        text_analysis: signals,
        ai_analysis: assessment.narrative,
        ai_verdict: assessment.verdict,
    }
}
