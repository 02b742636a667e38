//! The per-stage legal-decision table.

use fra_record::{Decision, ReviewStage, StageStatus};

/// Decisions an actor may submit for an item sitting at `stage`.
///
/// Exposed so the presentation layer can offer exactly the legal choices.
#[must_use]
pub const fn legal_decisions(stage: ReviewStage) -> &'static [Decision] {
    match stage {
        ReviewStage::VillageCouncil | ReviewStage::SubDistrict => {
            &[Decision::Approve, Decision::Reject, Decision::Forward]
        }
        ReviewStage::District => &[Decision::Approve, Decision::Reject, Decision::Finalize],
    }
}

/// What an accepted decision does to the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TransitionEffect {
    /// Terminal outcome recorded for the acting stage.
    pub(crate) outcome: StageStatus,
    /// Escalation target; the item arrives there as `Pending`.
    pub(crate) next_stage: Option<ReviewStage>,
    /// Whether the digitization synthesizer runs.
    pub(crate) synthesizes: bool,
}

/// Effect of `decision` at `stage`, or `None` if the pair is illegal.
pub(crate) fn transition_effect(
    stage: ReviewStage,
    decision: Decision,
) -> Option<TransitionEffect> {
    if !legal_decisions(stage).contains(&decision) {
        return None;
    }
    let effect = match decision {
        Decision::Approve => TransitionEffect {
            outcome: StageStatus::Approved,
            next_stage: None,
            synthesizes: false,
        },
        Decision::Reject => TransitionEffect {
            outcome: StageStatus::Rejected,
            next_stage: None,
            synthesizes: false,
        },
        Decision::Forward => TransitionEffect {
            outcome: StageStatus::Forwarded,
            next_stage: stage.next(),
            synthesizes: false,
        },
        Decision::Finalize => TransitionEffect {
            outcome: StageStatus::Finalized,
            next_stage: None,
            synthesizes: true,
        },
    };
    Some(effect)
}
