//! Docket Domain Layer
//!
//! This crate contains the core domain model for Docket's gap-analysis
//! engine. It defines the fundamental value objects and trait interfaces
//! that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **ExtractedFact**: One atomic statement pulled from a narrative
//! - **Entity**: A typed value (date, amount) recognized in text
//! - **CauseOfAction**: A legally recognized claim category with a fixed
//!   checklist of pleading elements
//! - **GapAnalysis**: Per-cause report of which elements are satisfied,
//!   partially supported, or missing
//! - **IntakeRecord**: The long-lived aggregate accumulating facts and
//!   cached analyses for one case
//!
//! ## Architecture
//!
//! This crate holds pure data and invariants only. Extraction, matching,
//! scoring, storage, and drafting live in sibling crates behind the trait
//! seams defined here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod cause;
pub mod fact;
pub mod intake;
pub mod requirement;
pub mod traits;

// Re-exports for convenience
pub use analysis::{ElementStatus, FollowupQuestion, GapAnalysis, Recommendation, Strength, SupportLevel};
pub use cause::CauseOfAction;
pub use fact::{Entity, ExtractedFact, FactSet, MergeStats};
pub use intake::{IntakeId, IntakeRecord, IntakeStatus};
pub use requirement::{AllegationRequirement, Specificity};
