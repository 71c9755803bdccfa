//! Umbrella crate for the comprova receipt-validation pipeline.
//!
//! This crate stitches the four pipeline stages together so callers can run
//! a full validation with a single entry point:
//!
//! - [`forensics`]: metadata extraction and screenshot classification,
//! - [`textsignals`]: keyword/value/date extraction over OCR text,
//! - [`advisor`]: AI-assisted narrative assessment,
//! - [`verdict`]: check-list aggregation into the final result.
//!
//! The recognized text and the stored image path feed the forensics and
//! text stages independently; the advisor consumes both outputs; the
//! aggregator fuses all three. [`ReceiptValidator::validate`] never fails:
//! metadata extraction degrades into warnings and an advisor failure is
//! replaced by a fallback assessment, so every request that reaches the
//! pipeline produces a [`ValidationResult`].
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use comprova::{ExpectedData, RandomPool, ReceiptValidator, ValidatorConfig};
//!
//! # async fn run() {
//! let config = ValidatorConfig::default();
//! let credentials = Arc::new(RandomPool::new(vec!["key-1".into()]));
//! let validator = ReceiptValidator::new(config, credentials);
//!
//! let result = validator
//!     .validate(
//!         "Comprovante de pagamento R$ 150,00 em 10/10/2023",
//!         Path::new("uploads/receipt.jpg"),
//!         &ExpectedData::default(),
//!     )
//!     .await;
//! println!("valid: {} details: {:?}", result.is_valid, result.details);
//! # }
//! ```

pub mod config;

pub use advisor::{
    AdvisorConfig, AdvisorError, AiAssessment, AiVerdict, CredentialProvider, ExpectedData,
    RandomPool,
};
pub use config::ValidatorConfig;
pub use forensics::{ForensicsConfig, ImageMetadata};
pub use textsignals::{MoneyMatch, TextSignals};
pub use verdict::ValidationResult;

use std::path::Path;
use std::sync::Arc;

/// Runs the full validation pipeline for one request.
///
/// Holds only read-only configuration and the injected credential provider;
/// each call creates its entities fresh and discards them with the request.
pub struct ReceiptValidator {
    forensics: ForensicsConfig,
    advisor: AdvisorConfig,
    credentials: Arc<dyn CredentialProvider>,
}

impl ReceiptValidator {
    pub fn new(config: ValidatorConfig, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            forensics: config.forensics,
            advisor: config.advisor,
            credentials,
        }
    }

    /// Validates one receipt from its recognized text and stored image.
    ///
    /// The forensics and text stages run on their own inputs; the advisor
    /// consumes both outputs. There is no retry anywhere: an advisor failure
    /// is logged and substituted with the degraded assessment rather than
    /// propagated.
    pub async fn validate(
        &self,
        text: &str,
        image_path: &Path,
        expected: &ExpectedData,
    ) -> ValidationResult {
        let metadata = forensics::extract(image_path, &self.forensics);
        let signals = textsignals::extract(text);

        let assessment = match advisor::assess(
            text,
            &metadata,
            expected,
            self.credentials.as_ref(),
            &self.advisor,
        )
        .await
        {
            Ok(assessment) => assessment,
            Err(err) => {
                tracing::warn!(error = %err, "ai assessment degraded");
                AiAssessment::degraded(&err.to_string())
            }
        };

        verdict::decide(metadata, signals, assessment)
    }
}
