//! Intake module - the long-lived case aggregate

use crate::analysis::GapAnalysis;
use crate::cause::CauseOfAction;
use crate::fact::{FactSet, MergeStats};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Unique identifier for an intake, based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability for listing intakes by creation time
/// - 128-bit uniqueness
/// - RFC 9562-standard format with broad ecosystem support
/// - No coordination required for distributed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntakeId(u128);

impl IntakeId {
    /// Generate a new UUIDv7-based IntakeId
    ///
    /// # Examples
    ///
    /// ```
    /// use docket_domain::IntakeId;
    ///
    /// let id = IntakeId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create an IntakeId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse an IntakeId from a UUIDv7 string
    ///
    /// # Examples
    ///
    /// ```
    /// use docket_domain::IntakeId;
    ///
    /// let id = IntakeId::new();
    /// let parsed = IntakeId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUIDv7 string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Get the timestamp component of the UUIDv7 (milliseconds since Unix epoch)
    pub fn timestamp(&self) -> u64 {
        // UUIDv7: top 48 bits are Unix millisecond timestamp
        (self.0 >> 80) as u64
    }
}

impl Default for IntakeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IntakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl Serialize for IntakeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IntakeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_string(&s).map_err(D::Error::custom)
    }
}

/// Lifecycle status of an intake
///
/// Intakes progress monotonically:
/// pending → processed → analyzed → drafted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStatus {
    /// Created, no narrative text processed yet
    Pending,

    /// Facts and entities have been extracted
    Processed,

    /// At least one gap analysis has been computed
    Analyzed,

    /// A pleading draft has been generated
    Drafted,
}

impl IntakeStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeStatus::Pending => "pending",
            IntakeStatus::Processed => "processed",
            IntakeStatus::Analyzed => "analyzed",
            IntakeStatus::Drafted => "drafted",
        }
    }

    /// Parse a status from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(IntakeStatus::Pending),
            "processed" => Some(IntakeStatus::Processed),
            "analyzed" => Some(IntakeStatus::Analyzed),
            "drafted" => Some(IntakeStatus::Drafted),
            _ => None,
        }
    }
}

impl fmt::Display for IntakeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The long-lived aggregate for one case
///
/// Facts and entities accumulate across text submissions and are never
/// removed. Cached gap analyses are only valid for the fact set they were
/// computed from; [`IntakeRecord::append_facts`] enforces that invariant by
/// clearing them whenever the fact set changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    /// Unique identifier
    pub intake_id: IntakeId,

    /// Creation time (seconds since Unix epoch)
    pub created_at: u64,

    /// Lifecycle status
    pub status: IntakeStatus,

    /// Accumulated facts and case-wide entities
    pub fact_set: FactSet,

    /// Most recent gap analysis per cause, valid for the current fact set
    pub gap_analyses: BTreeMap<CauseOfAction, GapAnalysis>,

    /// Generated pleading draft, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_text: Option<String>,
}

impl IntakeRecord {
    /// Create a new empty intake in `Pending` status
    pub fn new(intake_id: IntakeId, created_at: u64) -> Self {
        Self {
            intake_id,
            created_at,
            status: IntakeStatus::Pending,
            fact_set: FactSet::default(),
            gap_analyses: BTreeMap::new(),
            draft_text: None,
        }
    }

    /// Append newly extracted facts and entities to this intake
    ///
    /// Merges the extraction into the accumulated fact set (entities
    /// deduplicated by kind/value), clears every cached gap analysis so a
    /// stale analysis can never be served, and moves the intake to
    /// `Processed`.
    pub fn append_facts(&mut self, extraction: FactSet) -> MergeStats {
        let stats = self.fact_set.merge(extraction);
        self.gap_analyses.clear();
        self.status = IntakeStatus::Processed;
        stats
    }

    /// Store a freshly computed analysis for a cause and mark the intake analyzed
    pub fn record_analysis(&mut self, analysis: GapAnalysis) {
        self.gap_analyses.insert(analysis.cause_of_action, analysis);
        self.status = IntakeStatus::Analyzed;
    }

    /// Store a generated draft and mark the intake drafted
    pub fn record_draft(&mut self, draft_text: String) {
        self.draft_text = Some(draft_text);
        self.status = IntakeStatus::Drafted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fact::{Entity, ExtractedFact};

    fn fact(statement: &str) -> ExtractedFact {
        ExtractedFact {
            statement: statement.to_string(),
            source_reference: "sentence 1".to_string(),
            source_type: "document".to_string(),
            entities: Default::default(),
            confidence: 0.85,
        }
    }

    #[test]
    fn test_intake_id_ordering() {
        let id1 = IntakeId::from_value(1000);
        let id2 = IntakeId::from_value(2000);

        assert!(id1 < id2);
        assert!(id2 > id1);
    }

    #[test]
    fn test_intake_id_chronological() {
        // UUIDv7s generated in sequence should be chronologically ordered
        let id1 = IntakeId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = IntakeId::new();

        assert!(id1 < id2, "Earlier UUIDv7 should be less than later UUIDv7");
        assert!(id1.timestamp() <= id2.timestamp(), "Timestamps should be ordered");
    }

    #[test]
    fn test_intake_id_display_and_parse() {
        let id = IntakeId::new();
        let id_str = id.to_string();

        // UUIDv7 strings are 36 characters (8-4-4-4-12 with hyphens)
        assert_eq!(id_str.len(), 36);

        let parsed = IntakeId::from_string(&id_str).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_intake_id_invalid_string() {
        assert!(IntakeId::from_string("not-a-valid-uuid").is_err());
        assert!(IntakeId::from_string("").is_err());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            IntakeStatus::Pending,
            IntakeStatus::Processed,
            IntakeStatus::Analyzed,
            IntakeStatus::Drafted,
        ] {
            assert_eq!(IntakeStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(IntakeStatus::parse("archived"), None);
    }

    #[test]
    fn test_append_facts_invalidates_analyses() {
        let mut record = IntakeRecord::new(IntakeId::new(), 1_700_000_000);
        record.record_analysis(GapAnalysis {
            cause_of_action: CauseOfAction::Negligence,
            elements: vec![],
            overall_readiness: 0.0,
            followup_questions: vec![],
        });
        assert_eq!(record.status, IntakeStatus::Analyzed);
        assert_eq!(record.gap_analyses.len(), 1);

        let extraction = FactSet {
            facts: vec![fact("The defendant ran a red light on the corner.")],
            entities: vec![Entity::new("date", "1/2/2024")],
        };
        let stats = record.append_facts(extraction);

        assert_eq!(stats.facts_added, 1);
        assert_eq!(stats.entities_added, 1);
        assert!(record.gap_analyses.is_empty(), "stale analyses must be cleared");
        assert_eq!(record.status, IntakeStatus::Processed);
    }

    #[test]
    fn test_intake_id_serde_as_string() {
        let id = IntakeId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert!(json.starts_with('"'));
        let back: IntakeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
