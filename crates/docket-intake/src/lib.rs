//! Docket Intake Service
//!
//! The orchestration layer: wires the extractor, analyzer, drafter, and a
//! store into the intake workflow (create, add text, analyze, draft). This
//! is the crate a frontend or CLI talks to; the layers below it stay pure.

#![warn(missing_docs)]

mod error;
mod service;

pub use docket_drafter::DraftVariables;
pub use error::IntakeError;
pub use service::{
    parse_cause, requirements, AnalysisReport, DraftResult, IntakeService, RequirementsReport,
    TextSummary,
};
