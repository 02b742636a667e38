//! Keyed persistence for reviewable items.
//!
//! The workflow engine treats storage as a black box behind the
//! [`ReviewStore`] trait: a keyed collection of items partitioned into
//! per-stage queues plus one cross-stage finalized collection. Writes carry
//! an expected version and are rejected on mismatch, mirroring the engine's
//! optimistic-concurrency guard at the storage layer as a second line of
//! defense.
//!
//! [`MemoryStore`] is the in-process reference implementation. A
//! database-backed store would implement the same trait, using its native
//! transaction where the memory store uses its write lock.

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::{ReviewStore, StoreError};
