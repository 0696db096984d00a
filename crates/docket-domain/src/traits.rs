//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::intake::{IntakeId, IntakeRecord};

/// Trait for storing and retrieving intake records
///
/// Implemented by the infrastructure layer (docket-store). Implementations
/// must serialize updates to a single intake so that "append facts" and
/// "invalidate stale analyses" happen atomically; `update_intake` takes a
/// closure for exactly that reason.
pub trait IntakeStore {
    /// Error type for store operations
    type Error;

    /// Persist a new intake record
    fn save_intake(&mut self, record: IntakeRecord) -> Result<(), Self::Error>;

    /// Get an intake by ID
    fn get_intake(&self, id: IntakeId) -> Result<Option<IntakeRecord>, Self::Error>;

    /// Apply a mutation to an intake as one store operation
    ///
    /// Returns `false` if no record exists for the ID.
    fn update_intake(
        &mut self,
        id: IntakeId,
        mutate: &mut dyn FnMut(&mut IntakeRecord),
    ) -> Result<bool, Self::Error>;

    /// Delete an intake; returns whether a record was removed
    fn delete_intake(&mut self, id: IntakeId) -> Result<bool, Self::Error>;
}
