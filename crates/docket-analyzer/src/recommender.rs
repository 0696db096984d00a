//! Cause recommendation: rank candidate causes by readiness

use crate::analyzer::analyze_against_cause;
use docket_domain::{CauseOfAction, FactSet, Recommendation, Strength};
use tracing::debug;

/// Rank candidate causes of action by how well the facts support them
///
/// Runs one gap analysis per cause and sorts descending by readiness. The
/// sort is stable, so causes with equal readiness keep the relative order
/// they were supplied in. Callers that have no preference should pass
/// [`CauseOfAction::DEFAULT_ANALYSIS_SET`].
pub fn recommend_causes(fact_set: &FactSet, causes: &[CauseOfAction]) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = causes
        .iter()
        .map(|&cause| {
            let analysis = analyze_against_cause(fact_set, cause);
            let satisfied = analysis.satisfied_count();
            let total = analysis.elements.len();

            Recommendation {
                cause_of_action: cause,
                readiness: analysis.overall_readiness,
                strength: Strength::from_readiness(analysis.overall_readiness),
                elements_satisfied: format!("{}/{}", satisfied, total),
                missing_elements: analysis.missing_elements(),
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.readiness.total_cmp(&a.readiness));

    debug!(causes = causes.len(), "recommendation ranking complete");
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_extractor::{ExtractorConfig, FactExtractor};

    fn extract(text: &str) -> FactSet {
        FactExtractor::new(ExtractorConfig::default()).extract(text)
    }

    #[test]
    fn test_empty_facts_rank_in_supplied_order() {
        let causes = [
            CauseOfAction::Fraud,
            CauseOfAction::Negligence,
            CauseOfAction::BreachOfContract,
        ];
        let recommendations = recommend_causes(&FactSet::default(), &causes);

        let order: Vec<CauseOfAction> =
            recommendations.iter().map(|r| r.cause_of_action).collect();
        assert_eq!(order, causes.to_vec(), "full tie keeps supplied order");
        for rec in &recommendations {
            assert_eq!(rec.readiness, 0.0);
            assert_eq!(rec.strength, Strength::Weak);
            assert_eq!(rec.elements_satisfied.split('/').next(), Some("0"));
        }
    }

    #[test]
    fn test_higher_readiness_ranks_first_and_ties_stay_stable() {
        // Breach facts score for breach_of_contract; fraud and
        // unjust_enrichment stay at zero and must keep their supplied order
        let facts = extract(
            "We signed a binding contract for the renovation work. \
             They breached the schedule and failed to finish.",
        );
        let causes = [
            CauseOfAction::Fraud,
            CauseOfAction::UnjustEnrichment,
            CauseOfAction::BreachOfContract,
        ];
        let recommendations = recommend_causes(&facts, &causes);

        let order: Vec<CauseOfAction> =
            recommendations.iter().map(|r| r.cause_of_action).collect();
        assert_eq!(
            order,
            vec![
                CauseOfAction::BreachOfContract,
                CauseOfAction::Fraud,
                CauseOfAction::UnjustEnrichment,
            ]
        );
        assert!(recommendations[0].readiness > recommendations[1].readiness);
        assert_eq!(recommendations[1].readiness, recommendations[2].readiness);
    }

    #[test]
    fn test_readiness_never_increasing() {
        let facts = extract(
            "I hired ABC Corp on March 15, 2024 to build a website for $50,000. \
             I paid them $20,000 upfront. They never delivered and refuse to refund my money.",
        );
        let recommendations =
            recommend_causes(&facts, &CauseOfAction::DEFAULT_ANALYSIS_SET);

        assert_eq!(recommendations.len(), 4);
        for pair in recommendations.windows(2) {
            assert!(pair[0].readiness >= pair[1].readiness);
        }
    }

    #[test]
    fn test_missing_elements_reported_in_definition_order() {
        let recommendations = recommend_causes(
            &FactSet::default(),
            &[CauseOfAction::BreachOfContract],
        );
        assert_eq!(
            recommendations[0].missing_elements,
            vec![
                "existence_of_contract",
                "plaintiff_performance",
                "defendant_breach",
                "damages",
            ]
        );
    }
}
