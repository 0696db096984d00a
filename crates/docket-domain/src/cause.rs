//! Cause module - the closed set of supported causes of action

use serde::{Deserialize, Serialize};
use std::fmt;

/// A legally recognized claim category
///
/// The set is closed: each cause has a fixed checklist of pleading elements
/// in the requirement catalog. Callers must validate free-form cause names
/// with [`CauseOfAction::parse`] before handing them to the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CauseOfAction {
    /// Breach of a valid and binding contract
    BreachOfContract,

    /// Negligence (duty, breach, causation, damages)
    Negligence,

    /// Fraud (heightened pleading under CPLR 3016(b))
    Fraud,

    /// Conversion of property
    Conversion,

    /// Unjust enrichment
    UnjustEnrichment,

    /// Breach of fiduciary duty
    BreachOfFiduciaryDuty,

    /// Defamation
    Defamation,

    /// Legal malpractice
    LegalMalpractice,

    /// Medical malpractice
    MedicalMalpractice,
}

impl CauseOfAction {
    /// All supported causes, in catalog order
    pub const ALL: [CauseOfAction; 9] = [
        CauseOfAction::BreachOfContract,
        CauseOfAction::Negligence,
        CauseOfAction::Fraud,
        CauseOfAction::Conversion,
        CauseOfAction::UnjustEnrichment,
        CauseOfAction::BreachOfFiduciaryDuty,
        CauseOfAction::Defamation,
        CauseOfAction::LegalMalpractice,
        CauseOfAction::MedicalMalpractice,
    ];

    /// Default set analyzed when the caller does not name causes
    pub const DEFAULT_ANALYSIS_SET: [CauseOfAction; 4] = [
        CauseOfAction::BreachOfContract,
        CauseOfAction::Negligence,
        CauseOfAction::Fraud,
        CauseOfAction::UnjustEnrichment,
    ];

    /// Get the cause name as a snake_case string
    pub fn as_str(&self) -> &'static str {
        match self {
            CauseOfAction::BreachOfContract => "breach_of_contract",
            CauseOfAction::Negligence => "negligence",
            CauseOfAction::Fraud => "fraud",
            CauseOfAction::Conversion => "conversion",
            CauseOfAction::UnjustEnrichment => "unjust_enrichment",
            CauseOfAction::BreachOfFiduciaryDuty => "breach_of_fiduciary_duty",
            CauseOfAction::Defamation => "defamation",
            CauseOfAction::LegalMalpractice => "legal_malpractice",
            CauseOfAction::MedicalMalpractice => "medical_malpractice",
        }
    }

    /// Parse a cause from a snake_case string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breach_of_contract" => Some(CauseOfAction::BreachOfContract),
            "negligence" => Some(CauseOfAction::Negligence),
            "fraud" => Some(CauseOfAction::Fraud),
            "conversion" => Some(CauseOfAction::Conversion),
            "unjust_enrichment" => Some(CauseOfAction::UnjustEnrichment),
            "breach_of_fiduciary_duty" => Some(CauseOfAction::BreachOfFiduciaryDuty),
            "defamation" => Some(CauseOfAction::Defamation),
            "legal_malpractice" => Some(CauseOfAction::LegalMalpractice),
            "medical_malpractice" => Some(CauseOfAction::MedicalMalpractice),
            _ => None,
        }
    }

    /// Human-readable title, e.g. "BREACH OF CONTRACT"
    pub fn title(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }
}

impl fmt::Display for CauseOfAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CauseOfAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown cause of action: {}", s))
    }
}
