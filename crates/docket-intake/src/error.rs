//! Error types for the intake service

use docket_domain::IntakeId;
use thiserror::Error;

/// Errors that can occur during intake operations
#[derive(Error, Debug)]
pub enum IntakeError {
    /// No intake exists for the given ID
    #[error("Intake not found: {0}")]
    NotFound(IntakeId),

    /// The caller named a cause of action outside the catalog
    #[error("Unknown cause of action: {0}")]
    UnknownCause(String),

    /// The operation needs extracted facts but the intake has none
    #[error("No facts extracted yet; add text first")]
    NoFacts,

    /// The underlying store failed
    #[error("Store error: {0}")]
    Store(String),
}
