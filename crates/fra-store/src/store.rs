//! The persistence contract.

use fra_record::{ItemId, ReviewStage, ReviewableItem, StageStatus};

/// Keyed, versioned collection of reviewable items.
///
/// Reads are side-effect free and may run concurrently without blocking.
/// `put` is a compare-and-swap on the item's stored version: of two
/// concurrent writers against the same item, exactly one succeeds. Items
/// are never deleted; rejected and finalized items remain queryable.
pub trait ReviewStore: Send + Sync {
    /// Fetch an item by id.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if no item has this id.
    fn get(&self, id: ItemId) -> Result<ReviewableItem, StoreError>;

    /// Admit a new item.
    ///
    /// # Errors
    /// [`StoreError::DuplicateId`] if the id is already present.
    fn insert(&self, item: ReviewableItem) -> Result<(), StoreError>;

    /// Replace an item, conditional on its stored version.
    ///
    /// When the written item is finalized, the copy into the cross-stage
    /// finalized collection must happen atomically with the replacement —
    /// both visible or neither.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if the id does not exist;
    /// [`StoreError::VersionConflict`] if the stored version differs from
    /// `expected_version`.
    fn put(&self, item: ReviewableItem, expected_version: u64) -> Result<(), StoreError>;

    /// Items at `stage` whose status is one of `statuses`.
    ///
    /// Reflects the latest store state on every call; implementations must
    /// not cache results across calls.
    fn list_by_stage(&self, stage: ReviewStage, statuses: &[StageStatus]) -> Vec<ReviewableItem>;

    /// The cross-stage finalized collection.
    fn list_finalized(&self) -> Vec<ReviewableItem>;
}

/// Failures surfaced by a store implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No item with the given id exists.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// An item with the given id is already stored.
    #[error("duplicate item id: {0}")]
    DuplicateId(ItemId),

    /// Conditional write lost against a concurrent update.
    #[error("version conflict for {id}: expected {expected}, stored {actual}")]
    VersionConflict {
        /// Item the write targeted.
        id: ItemId,
        /// Version the writer based its update on.
        expected: u64,
        /// Version actually stored.
        actual: u64,
    },
}
