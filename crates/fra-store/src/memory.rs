//! In-memory reference store.

use crate::store::{ReviewStore, StoreError};
use fra_record::{ItemId, ReviewStage, ReviewableItem, StageStatus};
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Debug, Default)]
struct Shelves {
    items: HashMap<ItemId, ReviewableItem>,
    finalized: HashMap<ItemId, ReviewableItem>,
}

/// Process-local store over a read-write lock.
///
/// Readers proceed concurrently; writers take the lock only for the short
/// critical section of the compare-and-swap. The finalized copy is made
/// under the same write lock as the item replacement, so finalization is
/// atomic for observers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    shelves: RwLock<Shelves>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReviewStore for MemoryStore {
    fn get(&self, id: ItemId) -> Result<ReviewableItem, StoreError> {
        self.shelves
            .read()
            .items
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn insert(&self, item: ReviewableItem) -> Result<(), StoreError> {
        let mut shelves = self.shelves.write();
        if shelves.items.contains_key(&item.id) {
            return Err(StoreError::DuplicateId(item.id));
        }
        tracing::debug!(item_id = %item.id, kind = ?item.kind, "item admitted to store");
        shelves.items.insert(item.id, item);
        Ok(())
    }

    fn put(&self, item: ReviewableItem, expected_version: u64) -> Result<(), StoreError> {
        let mut shelves = self.shelves.write();
        let stored = shelves
            .items
            .get(&item.id)
            .ok_or(StoreError::NotFound(item.id))?;

        if stored.version != expected_version {
            return Err(StoreError::VersionConflict {
                id: item.id,
                expected: expected_version,
                actual: stored.version,
            });
        }

        if item.stage_status == StageStatus::Finalized {
            shelves.finalized.insert(item.id, item.clone());
        }
        shelves.items.insert(item.id, item);
        Ok(())
    }

    fn list_by_stage(&self, stage: ReviewStage, statuses: &[StageStatus]) -> Vec<ReviewableItem> {
        self.shelves
            .read()
            .items
            .values()
            .filter(|item| item.stage == stage && statuses.contains(&item.stage_status))
            .cloned()
            .collect()
    }

    fn list_finalized(&self) -> Vec<ReviewableItem> {
        self.shelves.read().finalized.values().cloned().collect()
    }
}
