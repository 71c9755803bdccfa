//! Fixed vocabularies and compiled patterns for receipt text.
//!
//! Patterns are compiled once and shared process-wide. The date patterns are
//! deliberately lax: they match digit shapes, not valid calendar dates, and
//! the four-digit-year alternatives come first so the longer form wins when
//! both could match at the same position.

use once_cell::sync::Lazy;
use regex::Regex;

/// Vocabulary of receipt terms matched case-insensitively as substrings.
pub const KEYWORDS: [&str; 9] = [
    "pagamento",
    "comprovante",
    "transferência",
    "valor",
    "data",
    "R$",
    "pago",
    "recebido",
    "banco",
];

/// Monetary amounts: optional "R$" marker, digits, a comma or dot separator,
/// exactly two fractional digits.
pub static MONEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"R?\$?\s*\d+[.,]\d{2}").expect("money pattern"));

/// Date-shaped substrings with matching separators on both sides.
pub static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{2}/\d{2}/\d{4}|\d{2}-\d{2}-\d{4}|\d{2}/\d{2}/\d{2}|\d{2}-\d{2}-\d{2}")
        .expect("date pattern")
});

/// A run of three or more consecutive whitespace characters.
pub static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{3,}").expect("spacing pattern"));

/// Any character outside alphanumerics, common punctuation, currency symbols,
/// and the accented Latin letters that appear in Portuguese receipts.
pub static UNUSUAL_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-zA-Z0-9\s.,\-/()$%:áéíóúâêîôûãõçàèìòùäëïöü]").expect("unusual-chars pattern")
});
