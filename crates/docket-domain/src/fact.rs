//! Fact module - atomic statements and typed entities extracted from text

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known entity kinds
///
/// Entity kinds are open-ended strings so new recognizers can be added
/// without changing the matcher interface; these are the two kinds the
/// core extractor produces.
pub mod entity_kind {
    /// A calendar date ("3/15/2024", "March 15, 2024")
    pub const DATE: &str = "date";
    /// A monetary amount ("$50,000", "$1,234.56")
    pub const AMOUNT: &str = "amount";
}

/// A typed value recognized in narrative text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// Entity kind label (see [`entity_kind`])
    #[serde(rename = "type")]
    pub kind: String,

    /// The matched text, verbatim
    pub value: String,
}

impl Entity {
    /// Create a new entity
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Deduplication key: entities are case-wide unique per (kind, value)
    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.kind, &self.value)
    }
}

/// One atomic factual statement pulled from narrative text
///
/// Facts are immutable once created and accumulate across repeated text
/// submissions for the same intake; they are never removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFact {
    /// Trimmed sentence text (non-empty, length >= 15)
    pub statement: String,

    /// Locator back to the source text, e.g. "sentence 3" (1-based position
    /// in the original sentence split, counting skipped fragments)
    pub source_reference: String,

    /// Provenance tag ("document" by default)
    pub source_type: String,

    /// Per-fact entities: kind -> most recent value of that kind in this
    /// statement (last match wins)
    pub entities: BTreeMap<String, String>,

    /// Fixed heuristic extractor-reliability score in [0, 1]
    pub confidence: f64,
}

impl ExtractedFact {
    /// Whether this fact carries an entity of the given kind
    pub fn has_entity(&self, kind: &str) -> bool {
        self.entities.contains_key(kind)
    }
}

/// Counts reported by [`FactSet::merge`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeStats {
    /// Facts appended
    pub facts_added: usize,

    /// Entities appended (after deduplication)
    pub entities_added: usize,
}

/// The accumulation unit for one intake: ordered facts plus the case-wide
/// deduplicated entity set
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FactSet {
    /// Facts in original sentence order, oldest submission first
    pub facts: Vec<ExtractedFact>,

    /// Case-wide entities, deduplicated by (kind, value), in first-seen order
    pub entities: Vec<Entity>,
}

impl FactSet {
    /// True if no facts have been extracted yet
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Merge a newer extraction into this set
    ///
    /// Facts always append (they accumulate, never dedupe); entities already
    /// present by (kind, value) are dropped.
    pub fn merge(&mut self, other: FactSet) -> MergeStats {
        let facts_added = other.facts.len();
        self.facts.extend(other.facts);

        let mut entities_added = 0;
        for entity in other.entities {
            let seen = self
                .entities
                .iter()
                .any(|e| e.dedup_key() == entity.dedup_key());
            if !seen {
                self.entities.push(entity);
                entities_added += 1;
            }
        }

        MergeStats {
            facts_added,
            entities_added,
        }
    }
}
