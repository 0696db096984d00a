//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Minimum trimmed sentence length (characters) for a sentence to count
    /// as a factual statement; shorter fragments are treated as noise
    pub min_statement_chars: usize,

    /// Fixed confidence assigned to every extracted fact. This scores the
    /// extraction method, not the statement itself.
    pub fact_confidence: f64,

    /// Provenance tag recorded on facts when the caller supplies none
    pub default_source_type: String,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_statement_chars == 0 {
            return Err("min_statement_chars must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.fact_confidence) {
            return Err(format!(
                "fact_confidence {} is outside [0.0, 1.0]",
                self.fact_confidence
            ));
        }
        if self.default_source_type.is_empty() {
            return Err("default_source_type must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_statement_chars: 15,
            fact_confidence: 0.85,
            default_source_type: "document".to_string(),
        }
    }
}
