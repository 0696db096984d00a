//! Docket Storage Layer
//!
//! Implements the IntakeStore trait with an in-memory map keyed by
//! [`IntakeId`]. Durable persistence is deliberately out of scope; the
//! trait boundary is the seam where a database-backed store would slot in.
//!
//! # Concurrency
//!
//! The store serializes updates to one intake: `update_intake` applies the
//! whole mutation closure against the owned record, so "append facts" and
//! "invalidate stale analyses" land atomically. `MemoryStore` itself takes
//! `&mut self` and is not shared; callers that need sharing wrap it in a
//! lock, giving single-writer-per-intake semantics.
//!
//! # Examples
//!
//! ```
//! use docket_store::MemoryStore;
//! use docket_domain::traits::IntakeStore;
//! use docket_domain::{IntakeId, IntakeRecord};
//!
//! let mut store = MemoryStore::new();
//! let id = IntakeId::new();
//! store.save_intake(IntakeRecord::new(id, 1_700_000_000)).unwrap();
//! assert!(store.get_intake(id).unwrap().is_some());
//! ```

#![warn(missing_docs)]

use docket_domain::traits::IntakeStore;
use docket_domain::{IntakeId, IntakeRecord};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Intake not found
    #[error("Intake not found: {0}")]
    NotFound(IntakeId),

    /// An intake with this ID already exists
    #[error("Duplicate intake: {0}")]
    Duplicate(IntakeId),
}

/// In-memory implementation of IntakeStore
///
/// Data is lost when the store is dropped; intended for a single service
/// process or for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    intakes: HashMap<IntakeId, IntakeRecord>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of intakes currently held
    pub fn len(&self) -> usize {
        self.intakes.len()
    }

    /// Whether the store holds no intakes
    pub fn is_empty(&self) -> bool {
        self.intakes.is_empty()
    }
}

impl IntakeStore for MemoryStore {
    type Error = StoreError;

    fn save_intake(&mut self, record: IntakeRecord) -> Result<(), Self::Error> {
        let id = record.intake_id;
        if self.intakes.contains_key(&id) {
            return Err(StoreError::Duplicate(id));
        }
        self.intakes.insert(id, record);
        Ok(())
    }

    fn get_intake(&self, id: IntakeId) -> Result<Option<IntakeRecord>, Self::Error> {
        Ok(self.intakes.get(&id).cloned())
    }

    fn update_intake(
        &mut self,
        id: IntakeId,
        mutate: &mut dyn FnMut(&mut IntakeRecord),
    ) -> Result<bool, Self::Error> {
        match self.intakes.get_mut(&id) {
            Some(record) => {
                mutate(record);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_intake(&mut self, id: IntakeId) -> Result<bool, Self::Error> {
        Ok(self.intakes.remove(&id).is_some())
    }
}
