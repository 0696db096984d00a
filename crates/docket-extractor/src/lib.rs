//! Docket Extractor
//!
//! Converts free-text narrative into atomic facts and typed entities.
//!
//! # Overview
//!
//! The Extractor is the first stage of the gap-analysis pipeline. It splits
//! a narrative into sentences, discards fragments too short to be factual
//! statements, and recognizes dates and monetary amounts in each surviving
//! sentence.
//!
//! # Architecture
//!
//! ```text
//! Text → Extractor → FactSet → GapAnalyzer → GapAnalysis
//! ```
//!
//! Matching is lexical and deterministic: the extractor performs no I/O and
//! never fails, so it returns plain values rather than `Result`s. Empty or
//! malformed input yields an empty [`FactSet`](docket_domain::FactSet).
//!
//! # Example Usage
//!
//! ```
//! use docket_extractor::{ExtractorConfig, FactExtractor};
//!
//! let extractor = FactExtractor::new(ExtractorConfig::default());
//! let extraction = extractor.extract(
//!     "I hired ABC Corp on March 15, 2024 to build a website for $50,000.",
//! );
//!
//! assert_eq!(extraction.facts.len(), 1);
//! assert_eq!(extraction.entities.len(), 2); // one date, one amount
//! ```

#![warn(missing_docs)]

mod config;
mod entities;
mod extractor;
mod segment;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use extractor::FactExtractor;
