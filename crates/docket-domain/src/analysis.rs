//! Analysis module - per-element findings, gap analyses, and recommendations

use crate::cause::CauseOfAction;
use crate::fact::ExtractedFact;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How well an element is supported by the current facts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportLevel {
    /// Two or more supporting facts (and any heightened standard met)
    Satisfied,

    /// Exactly one supporting fact, or heightened specificity unmet
    Partial,

    /// No supporting facts
    Missing,
}

impl SupportLevel {
    /// Status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportLevel::Satisfied => "satisfied",
            SupportLevel::Partial => "partial",
            SupportLevel::Missing => "missing",
        }
    }
}

impl fmt::Display for SupportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring one requirement against the fact set
///
/// Recomputed fresh on every analysis run, never updated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementStatus {
    /// Element identifier from the requirement catalog
    pub element_name: String,

    /// Support level
    pub status: SupportLevel,

    /// Confidence in the finding, in [0, 1]
    pub confidence: f64,

    /// The facts that support this element
    pub supporting_facts: Vec<ExtractedFact>,

    /// Human-readable description of the gap, when not satisfied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_description: Option<String>,
}

/// A prioritized follow-up question for the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowupQuestion {
    /// Element the question targets
    pub element: String,

    /// The question text
    pub question: String,

    /// 1 for missing elements, 2 for partial ones
    pub priority: u8,
}

/// Result of analyzing one fact set against one cause of action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    /// The cause analyzed
    pub cause_of_action: CauseOfAction,

    /// One status per catalog requirement, in definition order
    pub elements: Vec<ElementStatus>,

    /// Weighted readiness in [0, 1], rounded to two decimals
    pub overall_readiness: f64,

    /// At most five questions, missing-priority first
    pub followup_questions: Vec<FollowupQuestion>,
}

impl GapAnalysis {
    /// Count of satisfied elements
    pub fn satisfied_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| e.status == SupportLevel::Satisfied)
            .count()
    }

    /// Element names currently missing, in definition order
    pub fn missing_elements(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.status == SupportLevel::Missing)
            .map(|e| e.element_name.clone())
            .collect()
    }
}

/// Qualitative strength label derived from readiness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    /// Readiness >= 0.70
    Strong,

    /// Readiness >= 0.40
    Moderate,

    /// Everything else
    Weak,
}

impl Strength {
    /// Map a readiness score to a strength label (fixed design thresholds)
    pub fn from_readiness(readiness: f64) -> Self {
        if readiness >= 0.70 {
            Strength::Strong
        } else if readiness >= 0.40 {
            Strength::Moderate
        } else {
            Strength::Weak
        }
    }

    /// Label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Moderate => "Moderate",
            Strength::Weak => "Weak",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the ranked cause recommendation list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The candidate cause
    pub cause_of_action: CauseOfAction,

    /// Overall readiness for this cause
    pub readiness: f64,

    /// Qualitative strength label
    pub strength: Strength,

    /// "satisfied/total" element counts
    pub elements_satisfied: String,

    /// Element names currently missing, in definition order
    pub missing_elements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(Strength::from_readiness(1.0), Strength::Strong);
        assert_eq!(Strength::from_readiness(0.70), Strength::Strong);
        assert_eq!(Strength::from_readiness(0.69), Strength::Moderate);
        assert_eq!(Strength::from_readiness(0.40), Strength::Moderate);
        assert_eq!(Strength::from_readiness(0.39), Strength::Weak);
        assert_eq!(Strength::from_readiness(0.0), Strength::Weak);
    }

    #[test]
    fn test_support_level_serde() {
        assert_eq!(
            serde_json::to_string(&SupportLevel::Satisfied).unwrap(),
            "\"satisfied\""
        );
    }

    #[test]
    fn test_missing_elements_preserves_order() {
        let element = |name: &str, status| ElementStatus {
            element_name: name.to_string(),
            status,
            confidence: 0.0,
            supporting_facts: vec![],
            gap_description: None,
        };
        let analysis = GapAnalysis {
            cause_of_action: CauseOfAction::Negligence,
            elements: vec![
                element("duty", SupportLevel::Missing),
                element("breach", SupportLevel::Satisfied),
                element("causation", SupportLevel::Missing),
            ],
            overall_readiness: 0.25,
            followup_questions: vec![],
        };
        assert_eq!(analysis.missing_elements(), vec!["duty", "causation"]);
        assert_eq!(analysis.satisfied_count(), 1);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every readiness value maps to exactly one label and the
        /// label ordering follows the score
        #[test]
        fn test_strength_total_over_unit_interval(readiness in 0.0f64..=1.0) {
            let strength = Strength::from_readiness(readiness);
            match strength {
                Strength::Strong => prop_assert!(readiness >= 0.70),
                Strength::Moderate => prop_assert!((0.40..0.70).contains(&readiness)),
                Strength::Weak => prop_assert!(readiness < 0.40),
            }
        }
    }
}
