//! Docket Analyzer
//!
//! The gap-analysis engine: scores extracted facts against per-cause
//! checklists of pleading elements and ranks candidate causes of action.
//!
//! # Architecture
//!
//! ```text
//! FactSet ──┬─→ Matcher ─→ GapAnalyzer ─→ GapAnalysis
//!           └─────────────→ Recommender ─→ ranked Recommendations
//! ```
//!
//! - The **Matcher** decides whether one fact supports one element, using
//!   four ordered lexical rules. Every match traces to one concrete reason,
//!   by design: downstream users (attorneys) must be able to verify why a
//!   gap was flagged, so the rules trade recall for auditability.
//! - The **GapAnalyzer** aggregates matcher results per element, applies the
//!   heightened-specificity override, computes weighted readiness, and
//!   generates prioritized follow-up questions.
//! - The **Recommender** runs the analyzer across candidate causes and
//!   ranks them by readiness.
//! - The **requirement catalog** is static versioned data; extending it with
//!   new causes or elements requires no matcher or analyzer changes.
//!
//! Everything here is a pure function of its inputs: no I/O, no failure
//! modes, bit-identical output for identical input.

#![warn(missing_docs)]

mod analyzer;
mod matcher;
mod questions;
mod recommender;
mod requirements;

pub use analyzer::{analyze_against_cause, analyze_with_requirements};
pub use matcher::fact_supports_element;
pub use questions::followup_question;
pub use recommender::recommend_causes;
pub use requirements::requirements_for;
