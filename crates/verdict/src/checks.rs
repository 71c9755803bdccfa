//! The ordered check list behind the verdict.
//!
//! Each check yields a name, its own pass/fail result, and a display
//! message. The aggregator reduces the list to the final verdict and to the
//! rendered `details` lines, which keeps every check independently
//! unit-testable.

use advisor::{AiAssessment, AiVerdict};
use forensics::ImageMetadata;
use textsignals::TextSignals;

/// Minimum number of vocabulary keywords that must appear in the text.
pub const MIN_KEYWORDS: usize = 2;
/// Maximum number of metadata warnings tolerated.
pub const MAX_METADATA_WARNINGS: usize = 2;
/// Maximum number of text warnings tolerated.
pub const MAX_TEXT_WARNINGS: usize = 1;

/// Check identifier for the keyword-count condition. The rendered line for
/// this check historically shows the overall verdict's mark instead of its
/// own result; the aggregator keys that behavior off this name.
pub const KEYWORDS: &str = "keywords";

/// One named aggregation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
    pub message: String,
}

/// Runs all checks in their fixed order.
pub fn run_checks(
    metadata: &ImageMetadata,
    signals: &TextSignals,
    assessment: &AiAssessment,
) -> Vec<CheckOutcome> {
    vec![
        CheckOutcome {
            name: "screenshot",
            passed: metadata.is_screenshot,
            message: "Verificação de captura de tela".to_string(),
        },
        CheckOutcome {
            name: KEYWORDS,
            passed: signals.keywords.len() >= MIN_KEYWORDS,
            message: format!("Palavras-chave encontradas: {}", signals.keywords.len()),
        },
        CheckOutcome {
            name: "monetary_values",
            passed: !signals.valores.is_empty(),
            message: format!("Valores monetários encontrados: {}", signals.valores.len()),
        },
        CheckOutcome {
            name: "dates",
            passed: !signals.datas.is_empty(),
            message: format!("Datas encontradas: {}", signals.datas.len()),
        },
        CheckOutcome {
            name: "metadata_warnings",
            passed: metadata.warnings.len() <= MAX_METADATA_WARNINGS,
            message: format!("Avisos de metadados: {}", metadata.warnings.len()),
        },
        CheckOutcome {
            name: "text_warnings",
            passed: signals.warnings.len() <= MAX_TEXT_WARNINGS,
            message: format!("Avisos de texto: {}", signals.warnings.len()),
        },
        CheckOutcome {
            name: "ai_assessment",
            passed: assessment.verdict != AiVerdict::Suspicious,
            message: format!("Análise de IA: {}", verdict_label(assessment.verdict)),
        },
    ]
}

fn verdict_label(verdict: AiVerdict) -> &'static str {
    match verdict {
        AiVerdict::Authentic => "autêntica",
        AiVerdict::Inconclusive => "inconclusiva",
        AiVerdict::Suspicious => "suspeita",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textsignals::MoneyMatch;

    fn passing_inputs() -> (ImageMetadata, TextSignals, AiAssessment) {
        let metadata = ImageMetadata {
            is_screenshot: true,
            ..ImageMetadata::default()
        };
        let signals = TextSignals {
            keywords: vec!["pagamento".into(), "banco".into()],
            valores: vec![MoneyMatch {
                original: "R$ 150,00".into(),
                valor: 150.0,
            }],
            datas: vec!["10/10/2023".into()],
            warnings: Vec::new(),
        };
        let assessment = AiAssessment::from_narrative("Parece legítimo.".into());
        (metadata, signals, assessment)
    }

    #[test]
    fn all_checks_pass_on_good_inputs() {
        let (metadata, signals, assessment) = passing_inputs();
        let outcomes = run_checks(&metadata, &signals, &assessment);
        assert_eq!(outcomes.len(), 7);
        assert!(outcomes.iter().all(|c| c.passed));
    }

    #[test]
    fn checks_keep_a_fixed_order() {
        let (metadata, signals, assessment) = passing_inputs();
        let names: Vec<&str> = run_checks(&metadata, &signals, &assessment)
            .iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "screenshot",
                "keywords",
                "monetary_values",
                "dates",
                "metadata_warnings",
                "text_warnings",
                "ai_assessment"
            ]
        );
    }

    #[test]
    fn one_keyword_fails_the_keyword_check() {
        let (metadata, mut signals, assessment) = passing_inputs();
        signals.keywords.truncate(1);
        let outcomes = run_checks(&metadata, &signals, &assessment);
        let keyword_check = outcomes.iter().find(|c| c.name == KEYWORDS).unwrap();
        assert!(!keyword_check.passed);
    }

    #[test]
    fn third_metadata_warning_fails_the_warning_check() {
        let (mut metadata, signals, assessment) = passing_inputs();
        metadata.warnings = vec!["a".into(), "b".into(), "c".into()];
        let outcomes = run_checks(&metadata, &signals, &assessment);
        let check = outcomes
            .iter()
            .find(|c| c.name == "metadata_warnings")
            .unwrap();
        assert!(!check.passed);
        assert_eq!(check.message, "Avisos de metadados: 3");
    }

    #[test]
    fn two_text_warnings_fail_the_text_check() {
        let (metadata, mut signals, assessment) = passing_inputs();
        signals.warnings = vec!["a".into(), "b".into()];
        let outcomes = run_checks(&metadata, &signals, &assessment);
        assert!(!outcomes.iter().find(|c| c.name == "text_warnings").unwrap().passed);
    }

    #[test]
    fn suspicious_assessment_fails_the_ai_check() {
        let (metadata, signals, _) = passing_inputs();
        let assessment = AiAssessment::from_narrative("Documento não autêntico.".into());
        let outcomes = run_checks(&metadata, &signals, &assessment);
        let check = outcomes.iter().find(|c| c.name == "ai_assessment").unwrap();
        assert!(!check.passed);
        assert_eq!(check.message, "Análise de IA: suspeita");
    }

    #[test]
    fn inconclusive_assessment_passes_the_ai_check() {
        let (metadata, signals, _) = passing_inputs();
        let assessment = AiAssessment::degraded("timeout");
        let outcomes = run_checks(&metadata, &signals, &assessment);
        assert!(outcomes.iter().find(|c| c.name == "ai_assessment").unwrap().passed);
    }
}
