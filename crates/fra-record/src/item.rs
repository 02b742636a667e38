//! The reviewable item: one claim or document moving through the tiers.

use crate::audit::AuditTrail;
use crate::digitized::DigitizedRecord;
use crate::stage::{ReviewStage, StageStatus};
use crate::subject::SubjectInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Stable item identifier, unique across the system and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Mint a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What kind of submission the item is. Both kinds share one workflow shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// A forest-rights claim.
    Claim,
    /// A supporting Patta document.
    SupportingDocument,
}

/// A claim or supporting document under review.
///
/// Items are created at `VillageCouncil`/`Pending`, mutated only through the
/// workflow engine's transition operation, and never deleted: rejected and
/// finalized items remain queryable as terminal records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewableItem {
    /// Stable identifier.
    pub id: ItemId,
    /// Claim or supporting document.
    pub kind: ItemKind,
    /// Tier currently owning the item.
    pub stage: ReviewStage,
    /// Outcome state at the current tier.
    pub stage_status: StageStatus,
    /// Claimant payload; opaque to the engine, never mutated by it.
    pub subject: SubjectInfo,
    /// Terminal outcome recorded by each tier that has acted.
    pub stage_outcomes: BTreeMap<ReviewStage, StageStatus>,
    /// Append-only decision history.
    pub audit: AuditTrail,
    /// Set exactly once, at finalization.
    pub digitized: Option<DigitizedRecord>,
    /// Incremented on every accepted transition; optimistic-concurrency guard.
    pub version: u64,
    /// When the item entered the pipeline.
    pub submitted_at: DateTime<Utc>,
}

impl ReviewableItem {
    /// Enter a new item at the start of the pipeline.
    #[must_use]
    pub fn new(kind: ItemKind, subject: SubjectInfo) -> Self {
        Self {
            id: ItemId::new(),
            kind,
            stage: ReviewStage::VillageCouncil,
            stage_status: StageStatus::Pending,
            subject,
            stage_outcomes: BTreeMap::new(),
            audit: AuditTrail::new(),
            digitized: None,
            version: 0,
            submitted_at: Utc::now(),
        }
    }

    /// Whether the item has been digitized into its terminal record.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.digitized.is_some() || self.stage_status == StageStatus::Finalized
    }

    /// Whether the item is still awaiting a decision at its current stage.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.stage_status.is_in_flight()
    }
}
