//! Element matching: does one fact support one pleading element?

use docket_domain::fact::entity_kind;
use docket_domain::{AllegationRequirement, ExtractedFact};

/// How many description keywords must hit before rule 2 matches
const KEYWORD_OVERLAP_THRESHOLD: usize = 2;

/// Only the leading words of a description are considered keywords
const KEYWORD_WINDOW: usize = 6;

/// Keywords this short are too generic to count
const MIN_KEYWORD_LEN: usize = 3;

/// Decide whether a fact supports a pleading element
///
/// Pure and order-independent. Four ordered rules, first hit wins:
///
/// 1. the element name (underscores as spaces) appears verbatim in the
///    statement, case-insensitively;
/// 2. at least two distinct keywords from the first six words of the
///    element description (each longer than three characters) appear as
///    substrings of the statement;
/// 3. domain shortcuts keyed on the element name: "damages" elements match
///    any fact carrying an amount entity; "contract", "breach", and
///    "performance" elements match characteristic vocabulary;
/// 4. otherwise, no match.
///
/// Matching is literal substring comparison throughout. Notably the breach
/// vocabulary is "breach"/"failed"/"refused": a statement saying "refuse"
/// (present tense) does not hit "refused". That precision gap is deliberate;
/// the follow-up-question heuristic surfaces the element instead of the
/// matcher guessing at stemming.
pub fn fact_supports_element(fact: &ExtractedFact, requirement: &AllegationRequirement) -> bool {
    let statement = fact.statement.to_lowercase();

    // Rule 1: verbatim element name
    let element_name = requirement.display_name().to_lowercase();
    if statement.contains(&element_name) {
        return true;
    }

    // Rule 2: keyword overlap with the description
    let description = requirement.description.to_lowercase();
    let mut matched: Vec<&str> = Vec::new();
    for keyword in description.split_whitespace().take(KEYWORD_WINDOW) {
        if keyword.len() > MIN_KEYWORD_LEN
            && statement.contains(keyword)
            && !matched.contains(&keyword)
        {
            matched.push(keyword);
            if matched.len() >= KEYWORD_OVERLAP_THRESHOLD {
                return true;
            }
        }
    }

    // Rule 3: domain shortcuts
    let name = requirement.element_name.as_str();
    if name.contains("damages") && fact.has_entity(entity_kind::AMOUNT) {
        return true;
    }
    if name.contains("contract") && statement.contains("contract") {
        return true;
    }
    if name.contains("breach")
        && ["breach", "failed", "refused"]
            .iter()
            .any(|kw| statement.contains(kw))
    {
        return true;
    }
    if name.contains("performance")
        && ["performed", "completed", "fulfilled"]
            .iter()
            .any(|kw| statement.contains(kw))
    {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_domain::Specificity;
    use std::collections::BTreeMap;

    fn fact(statement: &str) -> ExtractedFact {
        ExtractedFact {
            statement: statement.to_string(),
            source_reference: "sentence 1".to_string(),
            source_type: "document".to_string(),
            entities: BTreeMap::new(),
            confidence: 0.85,
        }
    }

    fn fact_with_amount(statement: &str, amount: &str) -> ExtractedFact {
        let mut f = fact(statement);
        f.entities
            .insert(entity_kind::AMOUNT.to_string(), amount.to_string());
        f
    }

    fn requirement(element_name: &str, description: &str) -> AllegationRequirement {
        AllegationRequirement {
            element_name: element_name.to_string(),
            description: description.to_string(),
            required: true,
            cplr_reference: None,
            specificity_required: Specificity::General,
            example_language: None,
        }
    }

    #[test]
    fn test_rule1_verbatim_element_name() {
        let req = requirement("fiduciary_relationship", "irrelevant words here");
        assert!(fact_supports_element(
            &fact("Our fiduciary relationship began years ago in Albany."),
            &req
        ));
    }

    #[test]
    fn test_rule1_is_case_insensitive() {
        let req = requirement("duty", "unrelated description text");
        assert!(fact_supports_element(
            &fact("The hospital owed me a DUTY of reasonable care."),
            &req
        ));
    }

    #[test]
    fn test_rule2_keyword_overlap() {
        let req = requirement(
            "publication",
            "The statement was published to a third party",
        );
        // "statement" and "published" both hit
        assert!(fact_supports_element(
            &fact("He published the statement in the local paper."),
            &req
        ));
    }

    #[test]
    fn test_rule2_single_keyword_insufficient() {
        let req = requirement(
            "publication",
            "The statement was published to a third party",
        );
        assert!(!fact_supports_element(
            &fact("He published nothing else worth mentioning there."),
            &req
        ));
    }

    #[test]
    fn test_rule2_only_first_six_description_words_count() {
        let req = requirement(
            "causation",
            "one two three four five six proximate damages",
        );
        // "proximate" and "damages" fall outside the six-word window
        assert!(!fact_supports_element(
            &fact("The proximate damages were extensive and ongoing."),
            &req
        ));
    }

    #[test]
    fn test_rule2_short_keywords_ignored() {
        // Every description word is three characters or fewer, so none of
        // them count as keywords even when the statement contains them all
        let req = requirement("intent_to_induce", "he got it all for us");
        assert!(!fact_supports_element(
            &fact("he got it all for us and more besides."),
            &req
        ));
    }

    #[test]
    fn test_rule3_damages_matches_amount_entity() {
        let req = requirement("damages", "unrelated description wording");
        assert!(fact_supports_element(
            &fact_with_amount("I paid them $20,000 upfront.", "$20,000"),
            &req
        ));
        assert!(!fact_supports_element(&fact("I paid them upfront."), &req));
    }

    #[test]
    fn test_rule3_contract_shortcut() {
        let req = requirement("existence_of_contract", "unrelated description wording");
        assert!(fact_supports_element(
            &fact("We signed a contract in the spring."),
            &req
        ));
    }

    #[test]
    fn test_rule3_breach_vocabulary() {
        let req = requirement("defendant_breach", "unrelated description wording");
        assert!(fact_supports_element(
            &fact("They failed to deliver anything at all."),
            &req
        ));
        assert!(fact_supports_element(
            &fact("They refused to refund my money."),
            &req
        ));
    }

    #[test]
    fn test_breach_refuse_does_not_match_refused() {
        // Literal substring semantics: "refuse" (present tense) does not
        // contain "refused", so the shortcut does not fire
        let req = requirement(
            "defendant_breach",
            "Defendant failed to perform its obligations under the contract",
        );
        assert!(!fact_supports_element(
            &fact("They never delivered and refuse to refund my money."),
            &req
        ));
        assert!(fact_supports_element(
            &fact("They never delivered and refused to refund my money."),
            &req
        ));
    }

    #[test]
    fn test_rule3_performance_vocabulary() {
        let req = requirement("plaintiff_performance", "unrelated description wording");
        assert!(fact_supports_element(
            &fact("I completed every milestone on schedule."),
            &req
        ));
        assert!(!fact_supports_element(
            &fact("I worked on every milestone on schedule."),
            &req
        ));
    }

    #[test]
    fn test_no_rule_matches() {
        let req = requirement("scienter", "Defendant knew the representation was false");
        assert!(!fact_supports_element(
            &fact("We exchanged several emails about scheduling."),
            &req
        ));
    }
}
