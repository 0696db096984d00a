//! The intake service: orchestration over extractor, analyzer, drafter, and store

use crate::error::IntakeError;
use docket_analyzer::{analyze_against_cause, recommend_causes, requirements_for};
use docket_domain::fact::entity_kind;
use docket_domain::traits::IntakeStore;
use docket_domain::{
    AllegationRequirement, CauseOfAction, FactSet, GapAnalysis, IntakeId, IntakeRecord,
    Recommendation,
};
use docket_drafter::DraftVariables;
use docket_extractor::FactExtractor;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Outcome of submitting narrative text to an intake
#[derive(Debug, Clone, Serialize)]
pub struct TextSummary {
    /// The intake the text was added to
    pub intake_id: IntakeId,

    /// Facts extracted from this submission
    pub new_facts_added: usize,

    /// Entities from this submission not already known case-wide
    pub new_entities_added: usize,

    /// Accumulated fact count after the merge
    pub total_facts: usize,

    /// Accumulated entity count after the merge
    pub total_entities: usize,
}

/// Outcome of analyzing an intake against one or more causes
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// The intake analyzed
    pub intake_id: IntakeId,

    /// One gap analysis per requested cause
    pub analyses: BTreeMap<CauseOfAction, GapAnalysis>,

    /// How many facts the analyses were computed from
    pub facts_analyzed: usize,

    /// Ranked recommendations, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation>>,

    /// Highest-readiness cause, when recommendations were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_cause: Option<CauseOfAction>,
}

/// Outcome of generating a pleading draft
#[derive(Debug, Clone, Serialize)]
pub struct DraftResult {
    /// The intake drafted for
    pub intake_id: IntakeId,

    /// The cause the draft pleads
    pub cause_of_action: CauseOfAction,

    /// Readiness of the analysis the draft was built against
    pub readiness: f64,

    /// The complaint text
    pub draft_text: String,

    /// Names of every variable available during substitution
    pub variables_used: Vec<String>,

    /// Actionable gaps, one line per non-satisfied element
    pub todo_items: Vec<String>,
}

/// Requirement catalog lookup result
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RequirementsReport {
    /// The full list of supported causes (lookup key "all")
    AllCauses {
        /// Every supported cause, in catalog order
        causes: Vec<CauseOfAction>,
        /// Number of causes
        count: usize,
    },

    /// The element checklist for one cause
    Checklist {
        /// The cause looked up
        cause_of_action: CauseOfAction,
        /// Its pleading elements, in definition order
        requirements: Vec<AllegationRequirement>,
        /// Number of elements
        count: usize,
        /// How many of them are required
        required_count: usize,
    },
}

/// Parse a free-form cause name, rejecting anything outside the catalog
pub fn parse_cause(s: &str) -> Result<CauseOfAction, IntakeError> {
    CauseOfAction::parse(s).ok_or_else(|| IntakeError::UnknownCause(s.to_string()))
}

/// Look up the requirement catalog for one cause, or list all causes
pub fn requirements(cause: &str) -> Result<RequirementsReport, IntakeError> {
    if cause.eq_ignore_ascii_case("all") {
        return Ok(RequirementsReport::AllCauses {
            causes: CauseOfAction::ALL.to_vec(),
            count: CauseOfAction::ALL.len(),
        });
    }

    let cause = parse_cause(cause)?;
    let checklist = requirements_for(cause);
    Ok(RequirementsReport::Checklist {
        cause_of_action: cause,
        requirements: checklist.to_vec(),
        count: checklist.len(),
        required_count: checklist.iter().filter(|r| r.required).count(),
    })
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Default substitution variables derived from case entities
///
/// The first amount entity becomes `damages_amount` and the first date
/// entity becomes `contract_date`; county and party types get generic
/// defaults. Caller-supplied variables override all of these.
fn auto_variables(fact_set: &FactSet) -> DraftVariables {
    let mut vars = DraftVariables::new();
    vars.insert("county".to_string(), "New York".to_string());
    vars.insert(
        "plaintiff_type".to_string(),
        "[individual/corporation]".to_string(),
    );
    vars.insert(
        "defendant_type".to_string(),
        "[individual/corporation]".to_string(),
    );
    vars.insert("damages_amount".to_string(), "$[AMOUNT]".to_string());

    let mut amount_seen = false;
    for entity in &fact_set.entities {
        if entity.kind == entity_kind::AMOUNT && !amount_seen {
            vars.insert("damages_amount".to_string(), entity.value.clone());
            amount_seen = true;
        }
        if entity.kind == entity_kind::DATE && !vars.contains_key("contract_date") {
            vars.insert("contract_date".to_string(), entity.value.clone());
        }
    }

    vars
}

/// High-level intake workflow over any [`IntakeStore`]
///
/// Owns the store and the extractor; every operation that changes an intake
/// goes through the store's closure-based update so fact merges and analysis
/// invalidation stay atomic.
pub struct IntakeService<S> {
    store: S,
    extractor: FactExtractor,
}

impl<S> IntakeService<S>
where
    S: IntakeStore,
    S::Error: fmt::Display,
{
    /// Create a service with the default extractor configuration
    pub fn new(store: S) -> Self {
        Self::with_extractor(store, FactExtractor::default())
    }

    /// Create a service with a custom extractor
    pub fn with_extractor(store: S, extractor: FactExtractor) -> Self {
        Self { store, extractor }
    }

    fn store_err(error: S::Error) -> IntakeError {
        IntakeError::Store(error.to_string())
    }

    /// Create a new intake, optionally processing initial narrative text
    pub fn create_intake(&mut self, initial_text: Option<&str>) -> Result<IntakeRecord, IntakeError> {
        let mut record = IntakeRecord::new(IntakeId::new(), now_secs());
        if let Some(text) = initial_text {
            let stats = record.append_facts(self.extractor.extract(text));
            debug!(
                facts = stats.facts_added,
                entities = stats.entities_added,
                "initial text processed"
            );
        }

        self.store
            .save_intake(record.clone())
            .map_err(Self::store_err)?;
        info!(intake_id = %record.intake_id, status = %record.status, "intake created");
        Ok(record)
    }

    /// Fetch an intake by ID
    pub fn get_intake(&self, id: IntakeId) -> Result<IntakeRecord, IntakeError> {
        self.store
            .get_intake(id)
            .map_err(Self::store_err)?
            .ok_or(IntakeError::NotFound(id))
    }

    /// Delete an intake by ID
    pub fn delete_intake(&mut self, id: IntakeId) -> Result<(), IntakeError> {
        if self.store.delete_intake(id).map_err(Self::store_err)? {
            Ok(())
        } else {
            Err(IntakeError::NotFound(id))
        }
    }

    /// Extract facts from narrative text and merge them into an intake
    ///
    /// Clears any cached gap analyses as part of the same store update, so
    /// a stale analysis can never be observed alongside the new facts.
    pub fn add_text(&mut self, id: IntakeId, text: &str) -> Result<TextSummary, IntakeError> {
        let extraction = self.extractor.extract(text);

        let mut summary = None;
        let touched = self
            .store
            .update_intake(id, &mut |record| {
                let stats = record.append_facts(extraction.clone());
                summary = Some(TextSummary {
                    intake_id: id,
                    new_facts_added: stats.facts_added,
                    new_entities_added: stats.entities_added,
                    total_facts: record.fact_set.facts.len(),
                    total_entities: record.fact_set.entities.len(),
                });
            })
            .map_err(Self::store_err)?;
        if !touched {
            return Err(IntakeError::NotFound(id));
        }

        let summary = summary.ok_or(IntakeError::NotFound(id))?;
        info!(
            intake_id = %id,
            new_facts = summary.new_facts_added,
            total_facts = summary.total_facts,
            "text added"
        );
        Ok(summary)
    }

    /// Run gap analyses against the given causes (default set when `None`)
    ///
    /// Fresh analyses are computed and cached on the record. When
    /// `recommend` is set, the same causes are also ranked by readiness and
    /// the top cause reported.
    pub fn analyze(
        &mut self,
        id: IntakeId,
        causes: Option<&[CauseOfAction]>,
        recommend: bool,
    ) -> Result<AnalysisReport, IntakeError> {
        let record = self.get_intake(id)?;
        if record.fact_set.is_empty() {
            return Err(IntakeError::NoFacts);
        }

        let causes: Vec<CauseOfAction> = causes
            .map(<[CauseOfAction]>::to_vec)
            .unwrap_or_else(|| CauseOfAction::DEFAULT_ANALYSIS_SET.to_vec());

        let analyses: BTreeMap<CauseOfAction, GapAnalysis> = causes
            .iter()
            .map(|&cause| (cause, analyze_against_cause(&record.fact_set, cause)))
            .collect();

        let touched = self
            .store
            .update_intake(id, &mut |record| {
                for analysis in analyses.values() {
                    record.record_analysis(analysis.clone());
                }
            })
            .map_err(Self::store_err)?;
        if !touched {
            return Err(IntakeError::NotFound(id));
        }

        let (recommendations, best_cause) = if recommend {
            let ranked = recommend_causes(&record.fact_set, &causes);
            let best = ranked.first().map(|r| r.cause_of_action);
            (Some(ranked), best)
        } else {
            (None, None)
        };

        info!(
            intake_id = %id,
            causes = causes.len(),
            facts = record.fact_set.facts.len(),
            "analysis complete"
        );
        Ok(AnalysisReport {
            intake_id: id,
            analyses,
            facts_analyzed: record.fact_set.facts.len(),
            recommendations,
            best_cause,
        })
    }

    /// Generate a pleading draft for one cause
    ///
    /// Reuses the cached analysis for the cause when one is valid for the
    /// current fact set, otherwise computes one on the fly. Caller-supplied
    /// variables override the entity-derived defaults.
    pub fn generate_draft(
        &mut self,
        id: IntakeId,
        cause: CauseOfAction,
        variables: &DraftVariables,
    ) -> Result<DraftResult, IntakeError> {
        let record = self.get_intake(id)?;
        if record.fact_set.is_empty() {
            return Err(IntakeError::NoFacts);
        }

        let analysis = match record.gap_analyses.get(&cause) {
            Some(cached) => cached.clone(),
            None => analyze_against_cause(&record.fact_set, cause),
        };

        let mut all_variables = auto_variables(&record.fact_set);
        for (key, value) in variables {
            all_variables.insert(key.clone(), value.clone());
        }

        let draft = docket_drafter::generate_draft(cause, &all_variables, &analysis);

        let touched = self
            .store
            .update_intake(id, &mut |record| {
                record.record_draft(draft.clone());
            })
            .map_err(Self::store_err)?;
        if !touched {
            return Err(IntakeError::NotFound(id));
        }

        info!(intake_id = %id, cause = %cause, readiness = analysis.overall_readiness, "draft generated");
        Ok(DraftResult {
            intake_id: id,
            cause_of_action: cause,
            readiness: analysis.overall_readiness,
            draft_text: draft,
            variables_used: all_variables.keys().cloned().collect(),
            todo_items: docket_drafter::todo_items(&analysis),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_domain::Entity;

    #[test]
    fn test_auto_variables_defaults() {
        let vars = auto_variables(&FactSet::default());
        assert_eq!(vars.get("county").map(String::as_str), Some("New York"));
        assert_eq!(
            vars.get("damages_amount").map(String::as_str),
            Some("$[AMOUNT]")
        );
        assert!(!vars.contains_key("contract_date"));
    }

    #[test]
    fn test_auto_variables_first_entity_of_each_kind_wins() {
        let fact_set = FactSet {
            facts: vec![],
            entities: vec![
                Entity::new(entity_kind::DATE, "March 15, 2024"),
                Entity::new(entity_kind::AMOUNT, "$50,000"),
                Entity::new(entity_kind::AMOUNT, "$20,000"),
                Entity::new(entity_kind::DATE, "4/1/2024"),
            ],
        };
        let vars = auto_variables(&fact_set);
        assert_eq!(
            vars.get("damages_amount").map(String::as_str),
            Some("$50,000")
        );
        assert_eq!(
            vars.get("contract_date").map(String::as_str),
            Some("March 15, 2024")
        );
    }

    #[test]
    fn test_parse_cause_rejects_unknown() {
        assert!(matches!(
            parse_cause("replevin"),
            Err(IntakeError::UnknownCause(_))
        ));
        assert_eq!(
            parse_cause("fraud").ok(),
            Some(CauseOfAction::Fraud)
        );
    }

    #[test]
    fn test_requirements_lookup() {
        match requirements("all") {
            Ok(RequirementsReport::AllCauses { causes, count }) => {
                assert_eq!(count, 9);
                assert_eq!(causes.len(), 9);
            }
            other => panic!("expected cause list, got {:?}", other.map(|_| ())),
        }

        match requirements("fraud") {
            Ok(RequirementsReport::Checklist {
                cause_of_action,
                requirements,
                count,
                required_count,
            }) => {
                assert_eq!(cause_of_action, CauseOfAction::Fraud);
                assert_eq!(count, 6);
                assert_eq!(required_count, 6);
                assert_eq!(requirements.len(), 6);
            }
            other => panic!("expected checklist, got {:?}", other.map(|_| ())),
        }

        assert!(matches!(
            requirements("bogus"),
            Err(IntakeError::UnknownCause(_))
        ));
    }
}
