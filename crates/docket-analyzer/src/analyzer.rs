//! Gap analysis: score a fact set against one cause's element checklist

use crate::matcher::fact_supports_element;
use crate::questions::followup_question;
use crate::requirements::requirements_for;
use docket_domain::fact::entity_kind;
use docket_domain::{
    AllegationRequirement, CauseOfAction, ElementStatus, ExtractedFact, FactSet,
    FollowupQuestion, GapAnalysis, Specificity, SupportLevel,
};
use tracing::debug;

/// Confidence ceiling for satisfied elements
const SATISFIED_CONFIDENCE_CAP: f64 = 0.95;

/// Corroboration bonus added to the best supporting confidence
const CORROBORATION_BONUS: f64 = 0.10;

/// Follow-up questions are capped so the client is not overwhelmed
const MAX_FOLLOWUP_QUESTIONS: usize = 5;

/// Verbs indicating a concrete reported statement, required (together with
/// a date entity) to meet heightened pleading specificity
const REPORTING_VERBS: [&str; 4] = ["said", "stated", "represented", "told"];

/// Analyze a fact set against one cause of action
///
/// Pure function: recomputes every element status from scratch, so the
/// result is only ever valid for exactly this fact set. Idempotent for
/// identical inputs.
pub fn analyze_against_cause(fact_set: &FactSet, cause: CauseOfAction) -> GapAnalysis {
    analyze_with_requirements(fact_set, cause, requirements_for(cause))
}

/// Analyze a fact set against an explicit requirement checklist
///
/// Split out from [`analyze_against_cause`] so custom checklists can reuse
/// the scoring engine. An empty checklist yields an empty analysis with
/// readiness 0, the sentinel callers must treat as an input-validation
/// failure rather than a weak case.
pub fn analyze_with_requirements(
    fact_set: &FactSet,
    cause: CauseOfAction,
    requirements: &[AllegationRequirement],
) -> GapAnalysis {
    let mut elements = Vec::with_capacity(requirements.len());

    for requirement in requirements {
        elements.push(score_element(&fact_set.facts, requirement));
    }

    let overall_readiness = readiness(requirements, &elements);
    let followup_questions = questions_for(&elements);

    debug!(
        cause = %cause,
        readiness = overall_readiness,
        elements = elements.len(),
        "gap analysis complete"
    );

    GapAnalysis {
        cause_of_action: cause,
        elements,
        overall_readiness,
        followup_questions,
    }
}

/// Score one requirement against the fact list
fn score_element(facts: &[ExtractedFact], requirement: &AllegationRequirement) -> ElementStatus {
    let supporting: Vec<ExtractedFact> = facts
        .iter()
        .filter(|fact| fact_supports_element(fact, requirement))
        .cloned()
        .collect();

    let (mut status, confidence, mut gap_description) = match supporting.len() {
        0 => (
            SupportLevel::Missing,
            0.0,
            Some(format!(
                "No facts found supporting {}",
                requirement.element_name
            )),
        ),
        1 => (
            SupportLevel::Partial,
            supporting[0].confidence,
            Some(format!("Limited support for {}", requirement.element_name)),
        ),
        _ => {
            let best = supporting
                .iter()
                .map(|f| f.confidence)
                .fold(0.0_f64, f64::max);
            (
                SupportLevel::Satisfied,
                (best + CORROBORATION_BONUS).min(SATISFIED_CONFIDENCE_CAP),
                None,
            )
        }
    };

    // Heightened pleading: the element needs at least one supporting fact
    // with a concrete date and a reporting verb, no matter how many facts
    // matched. Downgrades Satisfied to Partial; confidence is untouched.
    if requirement.specificity_required == Specificity::Heightened
        && status != SupportLevel::Missing
    {
        let has_specific_details = supporting.iter().any(|fact| {
            fact.has_entity(entity_kind::DATE)
                && REPORTING_VERBS
                    .iter()
                    .any(|verb| fact.statement.to_lowercase().contains(verb))
        });
        if !has_specific_details {
            status = SupportLevel::Partial;
            gap_description = Some(format!(
                "CPLR 3016(b) requires heightened specificity for {}",
                requirement.element_name
            ));
        }
    }

    ElementStatus {
        element_name: requirement.element_name.clone(),
        status,
        confidence,
        supporting_facts: supporting,
        gap_description,
    }
}

/// Weighted readiness over the checklist, rounded to two decimals
///
/// Required elements weigh 2, optional 1; Satisfied earns full weight,
/// Partial half, Missing nothing. Zero requirements define readiness as 0.
fn readiness(requirements: &[AllegationRequirement], elements: &[ElementStatus]) -> f64 {
    let total_weight: f64 = requirements.iter().map(AllegationRequirement::weight).sum();
    if total_weight == 0.0 {
        return 0.0;
    }

    let earned: f64 = requirements
        .iter()
        .zip(elements)
        .map(|(req, element)| match element.status {
            SupportLevel::Satisfied => req.weight(),
            SupportLevel::Partial => req.weight() * 0.5,
            SupportLevel::Missing => 0.0,
        })
        .sum();

    round2(earned / total_weight)
}

/// Prioritized follow-up questions for every non-satisfied element
fn questions_for(elements: &[ElementStatus]) -> Vec<FollowupQuestion> {
    let mut questions: Vec<FollowupQuestion> = elements
        .iter()
        .filter(|e| e.status != SupportLevel::Satisfied)
        .map(|e| FollowupQuestion {
            element: e.element_name.clone(),
            question: followup_question(&e.element_name),
            priority: if e.status == SupportLevel::Missing { 1 } else { 2 },
        })
        .collect();

    // Stable sort: missing before partial, definition order within a tier
    questions.sort_by_key(|q| q.priority);
    questions.truncate(MAX_FOLLOWUP_QUESTIONS);
    questions
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
