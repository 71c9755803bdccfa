//! Assessment types returned by the advisor.

use serde::{Deserialize, Serialize};

/// Caller-supplied expectations about the receipt, used only to enrich the
/// prompt. Any absent field is rendered as "Não informado".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpectedData {
    /// Expected payment value.
    pub valor: Option<String>,
    /// Beneficiary document id (CPF/CNPJ).
    pub documento: Option<String>,
    /// Beneficiary name.
    pub beneficiario: Option<String>,
    /// Beneficiary bank.
    pub banco: Option<String>,
}

/// Typed outcome of the AI assessment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AiVerdict {
    /// The narrative raised no veto phrase.
    Authentic,
    /// The service could not be reached; nothing can be concluded.
    Inconclusive,
    /// The narrative flagged the receipt as not authentic or manipulated.
    Suspicious,
}

/// Phrases in the narrative that force a [`AiVerdict::Suspicious`] outcome.
pub const VETO_PHRASES: [&str; 2] = ["não autêntico", "manipulação"];

/// The advisor's structured answer: a typed verdict plus the full narrative.
///
/// The narrative is never empty. When the external service fails, the caller
/// substitutes [`AiAssessment::degraded`], whose verdict is
/// [`AiVerdict::Inconclusive`] so that an AI outage never fails a request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiAssessment {
    pub verdict: AiVerdict,
    pub narrative: String,
}

impl AiAssessment {
    /// Classifies a narrative returned by the text-generation service.
    pub fn from_narrative(narrative: String) -> Self {
        let lower = narrative.to_lowercase();
        let verdict = if VETO_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
            AiVerdict::Suspicious
        } else {
            AiVerdict::Authentic
        };
        Self { verdict, narrative }
    }

    /// Fallback assessment used when the external call failed.
    pub fn degraded(reason: &str) -> Self {
        Self {
            verdict: AiVerdict::Inconclusive,
            narrative: format!("Não foi possível realizar a análise de IA: {reason}"),
        }
    }
}
