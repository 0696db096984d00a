//! Extractor integration tests

use crate::{ExtractorConfig, FactExtractor};
use docket_domain::fact::entity_kind;

fn extractor() -> FactExtractor {
    FactExtractor::new(ExtractorConfig::default())
}

const ABC_CORP: &str = "I hired ABC Corp on March 15, 2024 to build a website for $50,000. \
    I paid them $20,000 upfront. They never delivered and refuse to refund my money.";

#[test]
fn test_abc_corp_scenario() {
    let extraction = extractor().extract(ABC_CORP);

    assert_eq!(extraction.facts.len(), 3);
    for fact in &extraction.facts {
        assert!(fact.statement.len() >= 15);
        assert_eq!(fact.confidence, 0.85);
        assert_eq!(fact.source_type, "document");
    }

    let kinds_and_values: Vec<(&str, &str)> = extraction
        .entities
        .iter()
        .map(|e| (e.kind.as_str(), e.value.as_str()))
        .collect();
    assert!(kinds_and_values.contains(&(entity_kind::DATE, "March 15, 2024")));
    assert!(kinds_and_values.contains(&(entity_kind::AMOUNT, "$50,000")));
    assert!(kinds_and_values.contains(&(entity_kind::AMOUNT, "$20,000")));

    // Per-fact linkage: the first sentence carries both its date and amount
    let first = &extraction.facts[0];
    assert_eq!(first.entities.get("date").map(String::as_str), Some("March 15, 2024"));
    assert_eq!(first.entities.get("amount").map(String::as_str), Some("$50,000"));
    assert_eq!(first.source_reference, "sentence 1");
}

#[test]
fn test_short_fragments_are_skipped_but_numbered() {
    let extraction = extractor().extract("Yes. The defendant signed the lease agreement. No.");

    assert_eq!(extraction.facts.len(), 1);
    // "Yes." consumed position 1 in the original split
    assert_eq!(extraction.facts[0].source_reference, "sentence 2");
}

#[test]
fn test_minimum_statement_length_property() {
    let texts = [
        "",
        "Hi. Ok. Sure.",
        "a. bb. ccc. This sentence is clearly long enough. dd.",
        ABC_CORP,
    ];
    for text in texts {
        for fact in extractor().extract(text).facts {
            assert!(
                fact.statement.trim().chars().count() >= 15,
                "statement below threshold: {:?}",
                fact.statement
            );
        }
    }
}

#[test]
fn test_minimum_length_counts_characters_not_bytes() {
    // 14 characters but 17 bytes; still a noise fragment
    let extraction = extractor().extract("Café été cher.");
    assert!(extraction.facts.is_empty());

    // 16 characters with multibyte content clears the threshold
    let extraction = extractor().extract("Café était cher.");
    assert_eq!(extraction.facts.len(), 1);
}

#[test]
fn test_empty_and_whitespace_input() {
    assert!(extractor().extract("").is_empty());
    assert!(extractor().extract("   \n\t  ").is_empty());
}

#[test]
fn test_duplicate_entity_dropped_within_extraction() {
    let extraction = extractor().extract(
        "The first invoice was $5,000 in total. The second invoice was also $5,000 again.",
    );

    let amounts: Vec<&str> = extraction
        .entities
        .iter()
        .filter(|e| e.kind == entity_kind::AMOUNT)
        .map(|e| e.value.as_str())
        .collect();
    assert_eq!(amounts, vec!["$5,000"]);

    // Both facts still carry the amount in their own entity maps
    assert!(extraction.facts.iter().all(|f| f.has_entity("amount")));
}

#[test]
fn test_last_date_wins_within_a_fact() {
    let extraction = extractor()
        .extract("The contract ran from 1/1/2023 until it was terminated on 6/30/2023 early.");

    assert_eq!(extraction.facts.len(), 1);
    assert_eq!(
        extraction.facts[0].entities.get("date").map(String::as_str),
        Some("6/30/2023")
    );
    // Both dates still appear case-wide
    assert_eq!(extraction.entities.len(), 2);
}

#[test]
fn test_month_name_date_overrides_numeric_in_same_fact() {
    let extraction = extractor()
        .extract("Served 1/2/2024, returnable March 15, 2024 before the clerk.");

    // Month-name recognition runs after numeric recognition, so it wins the
    // per-fact slot while both values survive case-wide
    assert_eq!(
        extraction.facts[0].entities.get("date").map(String::as_str),
        Some("March 15, 2024")
    );
    assert_eq!(extraction.entities.len(), 2);
}

#[test]
fn test_custom_source_type() {
    let extraction = extractor()
        .extract_with_source("The tenant stopped paying rent in June.", "interview");
    assert_eq!(extraction.facts[0].source_type, "interview");
}

#[test]
fn test_extraction_is_deterministic() {
    let a = extractor().extract(ABC_CORP);
    let b = extractor().extract(ABC_CORP);
    assert_eq!(a, b);
}
