//! Requirement module - one pleading element a cause of action demands

use serde::{Deserialize, Serialize};

/// Pleading specificity standard for an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specificity {
    /// Ordinary notice pleading
    General,

    /// Stricter standard requiring concrete detail (who/when/what),
    /// e.g. fraud elements under CPLR 3016(b)
    Heightened,
}

/// One required or optional legal element for a cause of action
///
/// Requirement definitions are static catalog data, not runtime state; the
/// scoring engine only consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllegationRequirement {
    /// Stable snake_case element identifier, e.g. "defendant_breach"
    pub element_name: String,

    /// Human description of what must be alleged
    pub description: String,

    /// Whether the element is required to plead the cause
    pub required: bool,

    /// Statutory or procedural reference, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cplr_reference: Option<String>,

    /// Specificity standard the element must meet
    pub specificity_required: Specificity,

    /// Example pleading language with [PLACEHOLDER] tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_language: Option<String>,
}

impl AllegationRequirement {
    /// Scoring weight: required elements count double (per the readiness
    /// formula), optional elements count single
    pub fn weight(&self) -> f64 {
        if self.required {
            2.0
        } else {
            1.0
        }
    }

    /// Element name with underscores replaced by spaces, for display and
    /// for the matcher's verbatim-name rule
    pub fn display_name(&self) -> String {
        self.element_name.replace('_', " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight() {
        let mut req = AllegationRequirement {
            element_name: "damages".to_string(),
            description: "Plaintiff suffered damages".to_string(),
            required: true,
            cplr_reference: None,
            specificity_required: Specificity::General,
            example_language: None,
        };
        assert_eq!(req.weight(), 2.0);
        req.required = false;
        assert_eq!(req.weight(), 1.0);
    }

    #[test]
    fn test_display_name() {
        let req = AllegationRequirement {
            element_name: "existence_of_contract".to_string(),
            description: String::new(),
            required: true,
            cplr_reference: None,
            specificity_required: Specificity::General,
            example_language: None,
        };
        assert_eq!(req.display_name(), "existence of contract");
    }
}
