//! Entity recognition
//!
//! Lexical recognizers for the entity kinds the core pipeline needs. Each
//! recognizer is a plain regex; recognition is deterministic and
//! explainable by construction. New kinds can be added here without
//! touching the matcher or analyzer.

use docket_domain::fact::entity_kind;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2}/\d{1,2}/\d{2,4})\b").expect("valid numeric date pattern")
});

static MONTH_NAME_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b",
    )
    .expect("valid month-name date pattern")
});

static MONEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$[\d,]+(?:\.\d{2})?").expect("valid money pattern")
});

/// Recognize entities in one sentence
///
/// Returns (kind, matched text) pairs in recognition order: numeric dates,
/// then month-name dates, then amounts, each in left-to-right match order.
/// The caller's last-wins insertion into the per-fact map means a month-name
/// date overrides a numeric one when a sentence contains both.
pub(crate) fn recognize(sentence: &str) -> Vec<(&'static str, String)> {
    let mut found = Vec::new();

    for m in NUMERIC_DATE.find_iter(sentence) {
        found.push((entity_kind::DATE, m.as_str().to_string()));
    }
    for m in MONTH_NAME_DATE.find_iter(sentence) {
        found.push((entity_kind::DATE, m.as_str().to_string()));
    }
    for m in MONEY.find_iter(sentence) {
        found.push((entity_kind::AMOUNT, m.as_str().to_string()));
    }

    found
}
