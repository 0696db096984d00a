//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::entities::recognize;
use crate::segment::split_sentences;
use docket_domain::{Entity, ExtractedFact, FactSet};
use std::collections::BTreeMap;
use std::collections::HashSet;
use tracing::debug;

/// The Extractor converts free-text narrative into facts and entities
#[derive(Debug, Clone, Default)]
pub struct FactExtractor {
    config: ExtractorConfig,
}

impl FactExtractor {
    /// Create a new Extractor with the given configuration
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extract facts and entities, tagging facts with the default source type
    pub fn extract(&self, text: &str) -> FactSet {
        self.extract_with_source(text, &self.config.default_source_type)
    }

    /// Extract facts and entities from narrative text
    ///
    /// Sentences shorter than the configured minimum are skipped but still
    /// occupy a position in the `source_reference` numbering, so references
    /// always point into the full sentence split of the original text.
    /// Entities are deduplicated by (kind, value) within this extraction;
    /// cross-submission deduplication happens when the result is merged
    /// into an intake's accumulated [`FactSet`].
    pub fn extract_with_source(&self, text: &str, source_type: &str) -> FactSet {
        let mut facts = Vec::new();
        let mut entities: Vec<Entity> = Vec::new();
        let mut seen: HashSet<(String, String)> = HashSet::new();

        for (index, sentence) in split_sentences(text).iter().enumerate() {
            let trimmed = sentence.trim();
            // Threshold counts characters, not bytes
            if trimmed.chars().count() < self.config.min_statement_chars {
                // Noise fragment, not a fact; position is still consumed
                continue;
            }

            let mut fact_entities: BTreeMap<String, String> = BTreeMap::new();
            for (kind, value) in recognize(trimmed) {
                // Last match of a kind wins within one statement
                fact_entities.insert(kind.to_string(), value.clone());

                let key = (kind.to_string(), value.clone());
                if seen.insert(key) {
                    entities.push(Entity::new(kind, value));
                }
            }

            facts.push(ExtractedFact {
                statement: trimmed.to_string(),
                source_reference: format!("sentence {}", index + 1),
                source_type: source_type.to_string(),
                entities: fact_entities,
                confidence: self.config.fact_confidence,
            });
        }

        debug!(
            facts = facts.len(),
            entities = entities.len(),
            source_type,
            "extraction complete"
        );

        FactSet { facts, entities }
    }
}
