//! AI-assisted receipt assessment.
//!
//! This crate builds a structured prompt from the recognized text, the
//! forensic metadata, and the caller's expected values, sends it to an
//! external text-generation service, and maps the free-form narrative into
//! a typed [`AiAssessment`].
//!
//! Two properties matter to callers:
//!
//! - **Credentials are injected.** [`assess`] takes any
//!   [`CredentialProvider`]; the default [`RandomPool`] picks uniformly at
//!   random per call with no affinity, so keys can rotate freely.
//! - **Failure degrades.** A transport failure or an empty credential pool
//!   surfaces as [`AdvisorError`]; the pipeline substitutes
//!   [`AiAssessment::degraded`], which is `Inconclusive` and therefore never
//!   fails the request on its own.
//!
//! The narrative → verdict mapping lives here, not in the aggregator: the
//! phrases "não autêntico" and "manipulação" (case-insensitive) mark the
//! assessment [`AiVerdict::Suspicious`].

pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod prompt;
pub mod types;

pub use config::AdvisorConfig;
pub use credentials::{CredentialProvider, RandomPool};
pub use error::AdvisorError;
pub use prompt::build_prompt;
pub use types::{AiAssessment, AiVerdict, ExpectedData, VETO_PHRASES};

use forensics::ImageMetadata;

/// Runs one assessment against the text-generation service.
///
/// Performs exactly one external call with a freshly selected credential.
/// There is no retry: a failed call is reported as
/// [`AdvisorError::Unavailable`] and the caller decides how to degrade.
pub async fn assess(
    text: &str,
    metadata: &ImageMetadata,
    expected: &ExpectedData,
    credentials: &dyn CredentialProvider,
    cfg: &AdvisorConfig,
) -> Result<AiAssessment, AdvisorError> {
    let credential = credentials
        .next_credential()
        .ok_or(AdvisorError::NoCredentials)?;

    let prompt = prompt::build_prompt(text, metadata, expected);
    tracing::debug!(prompt_len = prompt.len(), "requesting ai assessment");

    let narrative = api::generate(cfg, &credential, &prompt).await?;
    Ok(AiAssessment::from_narrative(narrative))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_pool_fails_before_any_network_call() {
        let pool = RandomPool::new(Vec::new());
        let result = assess(
            "texto",
            &ImageMetadata::default(),
            &ExpectedData::default(),
            &pool,
            &AdvisorConfig::default(),
        )
        .await;
        assert!(matches!(result, Err(AdvisorError::NoCredentials)));
    }
}
