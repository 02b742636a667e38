//! Domain model for forest-rights review items.
//!
//! A [`ReviewableItem`] is a claim or supporting document moving through the
//! ordered review tiers (Village Council → Sub-District → District). This
//! crate holds the shared vocabulary of that pipeline:
//!
//! - strongly-typed identifiers ([`ItemId`])
//! - the stage / status / decision enums and their ordering
//! - the opaque claimant payload ([`SubjectInfo`])
//! - the append-only, hash-chained [`AuditTrail`]
//! - content hashing ([`ContentHash`]) and the immutable [`DigitizedRecord`]
//!   produced at finalization
//!
//! The workflow rules that *move* items between stages live in `fra-engine`;
//! nothing in this crate mutates an item on its own.

pub mod audit;
pub mod digitized;
pub mod hash;
pub mod item;
pub mod stage;
pub mod subject;

pub use audit::{AuditEntry, AuditError, AuditTrail};
pub use digitized::{DigitizedRecord, ExtractedFields, ExtractionMethod};
pub use hash::{ContentHash, HashError};
pub use item::{ItemId, ItemKind, ReviewableItem};
pub use stage::{ActorRole, Decision, ReviewStage, StageStatus};
pub use subject::{GeoPoint, RightType, SubjectInfo};
