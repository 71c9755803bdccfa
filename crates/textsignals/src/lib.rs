//! Text-signal extraction for receipt OCR output.
//!
//! This crate is the pure text stage of the validation pipeline. Given the
//! text recognized from a receipt image, it reports:
//!
//! - which terms of a fixed receipt vocabulary occur in the text,
//! - monetary substrings with their parsed values,
//! - date-shaped substrings (raw, no calendar validation),
//! - text-quality warnings (irregular spacing, unusual characters).
//!
//! Extraction never fails: malformed monetary matches are dropped rather
//! than surfaced as errors, and an empty input simply produces empty signals.
//!
//! ```
//! let signals = textsignals::extract("Comprovante de pagamento R$ 150,00 em 10/10/2023");
//! assert!(signals.keywords.iter().any(|k| k == "comprovante"));
//! assert_eq!(signals.valores[0].valor, 150.0);
//! assert_eq!(signals.datas[0], "10/10/2023");
//! ```

pub mod patterns;
pub mod types;

pub use types::{MoneyMatch, TextSignals};

/// Warning emitted when the text contains a run of three or more whitespace characters.
pub const WARN_IRREGULAR_SPACING: &str = "⚠️ Espaçamento irregular detectado";
/// Warning emitted when the text contains characters outside the expected receipt alphabet.
pub const WARN_UNUSUAL_CHARACTERS: &str = "⚠️ Caracteres não usuais detectados";

/// Extracts all text signals from recognized receipt text.
pub fn extract(text: &str) -> TextSignals {
    let lower = text.to_lowercase();
    let keywords = patterns::KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(&keyword.to_lowercase()))
        .map(|keyword| keyword.to_string())
        .collect();

    let valores = patterns::MONEY
        .find_iter(text)
        .filter_map(|m| {
            let original = m.as_str().to_string();
            parse_money(&original).map(|valor| MoneyMatch { original, valor })
        })
        .collect();

    let datas = patterns::DATE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    let mut warnings = Vec::new();
    if patterns::WHITESPACE_RUN.is_match(text) {
        warnings.push(WARN_IRREGULAR_SPACING.to_string());
    }
    if patterns::UNUSUAL_CHARS.is_match(text) {
        warnings.push(WARN_UNUSUAL_CHARACTERS.to_string());
    }

    TextSignals {
        keywords,
        valores,
        datas,
        warnings,
    }
}

/// Parses a matched monetary substring by stripping the currency marker and
/// whitespace and normalizing the decimal comma to a dot.
fn parse_money(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, 'R' | '$') && !c.is_whitespace())
        .collect();
    cleaned.replace(',', ".").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_signals_from_receipt_text() {
        let signals = extract("Comprovante de pagamento R$ 150,00 em 10/10/2023 banco XYZ");

        for expected in ["comprovante", "pagamento", "R$", "banco"] {
            assert!(
                signals.keywords.iter().any(|k| k == expected),
                "missing keyword {expected:?}"
            );
        }
        assert_eq!(signals.valores.len(), 1);
        assert_eq!(signals.valores[0].original, "R$ 150,00");
        assert_eq!(signals.valores[0].valor, 150.0);
        assert_eq!(signals.datas, vec!["10/10/2023".to_string()]);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let signals = extract("PAGAMENTO recebido");
        assert!(signals.keywords.iter().any(|k| k == "pagamento"));
        assert!(signals.keywords.iter().any(|k| k == "recebido"));
    }

    #[test]
    fn invalid_calendar_date_still_matches() {
        let signals = extract("data 99/99/9999");
        assert_eq!(signals.datas, vec!["99/99/9999".to_string()]);
    }

    #[test]
    fn dot_separator_parses_directly() {
        let signals = extract("total 42.50");
        assert_eq!(signals.valores[0].valor, 42.5);
    }

    #[test]
    fn irregular_spacing_warning() {
        let signals = extract("valor    pago");
        assert_eq!(signals.warnings, vec![WARN_IRREGULAR_SPACING.to_string()]);
    }

    #[test]
    fn unusual_characters_warning() {
        let signals = extract("pagamento © confirmado");
        assert_eq!(signals.warnings, vec![WARN_UNUSUAL_CHARACTERS.to_string()]);
    }

    #[test]
    fn both_warnings_stack_in_order() {
        let signals = extract("pagamento    © confirmado");
        assert_eq!(
            signals.warnings,
            vec![
                WARN_IRREGULAR_SPACING.to_string(),
                WARN_UNUSUAL_CHARACTERS.to_string()
            ]
        );
    }

    #[test]
    fn empty_text_yields_empty_signals() {
        assert_eq!(extract(""), TextSignals::default());
    }

    #[test]
    fn multiple_values_preserve_text_order() {
        let signals = extract("R$ 10,00 e depois R$ 20,00");
        let parsed: Vec<f64> = signals.valores.iter().map(|v| v.valor).collect();
        assert_eq!(parsed, vec![10.0, 20.0]);
    }
}
