//! The review workflow engine.
//!
//! Items advance through the ordered tiers under a fixed decision table:
//!
//! | stage          | legal decisions           | effect                               |
//! |----------------|---------------------------|--------------------------------------|
//! | VillageCouncil | Approve, Reject, Forward  | Forward → SubDistrict, Pending       |
//! | SubDistrict    | Approve, Reject, Forward  | Forward → District, Pending          |
//! | District       | Approve, Reject, Finalize | Finalize → terminal digitized record |
//!
//! [`ReviewEngine`] validates each submitted decision against the item's
//! current stage and status, the submitting actor's role, and an expected
//! version (optimistic concurrency), then applies the transition: one audit
//! entry per accepted decision, a version bump, and — on `Finalize` — record
//! synthesis committed transactionally with the store write.
//!
//! The engine performs no I/O of its own and never retries; a caller that
//! loses a version race re-reads and resubmits at its own discretion.

pub mod decision_table;
pub mod engine;
pub mod error;

pub use decision_table::legal_decisions;
pub use engine::ReviewEngine;
pub use error::WorkflowError;
