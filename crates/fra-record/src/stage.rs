//! Review tiers, per-stage statuses, decisions, and actor roles.

use serde::{Deserialize, Serialize};

/// Organizational tier that currently owns an item.
///
/// Ordered: `VillageCouncil < SubDistrict < District`. Items only ever move
/// forward along this order; rejection ends the pipeline without advancing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ReviewStage {
    /// First tier: village-level council review.
    VillageCouncil,
    /// Second tier: sub-district committee review.
    SubDistrict,
    /// Third and final tier: district committee review.
    District,
}

impl ReviewStage {
    /// The escalation target, or `None` from the final tier.
    #[must_use]
    pub const fn next(self) -> Option<ReviewStage> {
        match self {
            ReviewStage::VillageCouncil => Some(ReviewStage::SubDistrict),
            ReviewStage::SubDistrict => Some(ReviewStage::District),
            ReviewStage::District => None,
        }
    }

    /// Stable byte tag, used in audit-entry hashing.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            ReviewStage::VillageCouncil => 0,
            ReviewStage::SubDistrict => 1,
            ReviewStage::District => 2,
        }
    }

    /// The role that owns this stage.
    #[must_use]
    pub const fn owning_role(self) -> ActorRole {
        match self {
            ReviewStage::VillageCouncil => ActorRole::VillageCouncil,
            ReviewStage::SubDistrict => ActorRole::SubDistrict,
            ReviewStage::District => ActorRole::District,
        }
    }
}

/// Outcome of a stage's review of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StageStatus {
    /// Awaiting a decision at the current stage.
    Pending,
    /// Accepted at this tier without escalation.
    Approved,
    /// Rejected; the pipeline ends here for this item.
    Rejected,
    /// Handed up to the next tier.
    Forwarded,
    /// Terminal: digitized into an immutable record at the District tier.
    Finalized,
}

impl StageStatus {
    /// Whether an item with this status is still awaiting a decision.
    ///
    /// `Forwarded` counts as in-flight so that stores populated by writers
    /// using it as the arrival marker are read identically.
    #[must_use]
    pub const fn is_in_flight(self) -> bool {
        matches!(self, StageStatus::Pending | StageStatus::Forwarded)
    }

    /// Stable byte tag, used in audit-entry hashing.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            StageStatus::Pending => 0,
            StageStatus::Approved => 1,
            StageStatus::Rejected => 2,
            StageStatus::Forwarded => 3,
            StageStatus::Finalized => 4,
        }
    }
}

/// A decision submitted by a stage's reviewing actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Record acceptance at the current tier without escalation.
    Approve,
    /// Reject the item, ending its pipeline.
    Reject,
    /// Escalate the item to the next tier.
    Forward,
    /// Terminal District-only decision: digitize into an immutable record.
    Finalize,
}

impl Decision {
    /// Stable byte tag, used in audit-entry hashing.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Decision::Approve => 0,
            Decision::Reject => 1,
            Decision::Forward => 2,
            Decision::Finalize => 3,
        }
    }
}

/// The claimed role of a submitting actor.
///
/// Roles map one-to-one onto the stage they own. The caller's claim is
/// trusted; real identity enforcement is a hosting-service concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorRole {
    /// Village council reviewer.
    VillageCouncil,
    /// Sub-district committee reviewer.
    SubDistrict,
    /// District committee reviewer.
    District,
}

impl ActorRole {
    /// The stage this role is entitled to act on.
    #[must_use]
    pub const fn stage(self) -> ReviewStage {
        match self {
            ActorRole::VillageCouncil => ReviewStage::VillageCouncil,
            ActorRole::SubDistrict => ReviewStage::SubDistrict,
            ActorRole::District => ReviewStage::District,
        }
    }

    /// Stable byte tag, used in audit-entry hashing.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.stage().as_u8()
    }
}
