//! Data model for the text-signal stage.

use serde::{Deserialize, Serialize};

/// A monetary substring recognized in the text, paired with its parsed value.
///
/// Every `MoneyMatch` that reaches the caller parsed successfully; raw matches
/// whose cleaned form is not a valid number are dropped at extraction time
/// rather than surfaced as errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoneyMatch {
    /// The raw matched substring, exactly as it appeared (e.g. `"R$ 150,00"`).
    pub original: String,
    /// The parsed numeric value (e.g. `150.0`).
    pub valor: f64,
}

/// Signals extracted from recognized receipt text.
///
/// All collections preserve the order in which matches appeared in the text.
/// `datas` holds raw date-shaped substrings with no calendar validation:
/// `"99/99/9999"` is a valid match.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TextSignals {
    /// Vocabulary terms found case-insensitively anywhere in the text.
    pub keywords: Vec<String>,
    /// Monetary substrings with their parsed values.
    pub valores: Vec<MoneyMatch>,
    /// Raw date-shaped substrings, kept verbatim.
    pub datas: Vec<String>,
    /// Text-quality warnings (irregular spacing, unusual characters).
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_default_is_empty() {
        let signals = TextSignals::default();
        assert!(signals.keywords.is_empty());
        assert!(signals.valores.is_empty());
        assert!(signals.datas.is_empty());
        assert!(signals.warnings.is_empty());
    }

    #[test]
    fn money_match_serializes_original_and_value() {
        let m = MoneyMatch {
            original: "R$ 150,00".to_string(),
            valor: 150.0,
        };
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"original\":\"R$ 150,00\""));
        assert!(json.contains("\"valor\":150.0"));
    }
}
