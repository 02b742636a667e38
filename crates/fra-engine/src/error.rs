//! The workflow error taxonomy.
//!
//! Every invalid submission is reported to the caller as a typed failure;
//! the engine performs no recovery beyond rejecting the call. Retry policy
//! (re-read the current version and resubmit) belongs to the caller.

use fra_digitize::DigitizeError;
use fra_record::{ActorRole, Decision, ItemId, ReviewStage, StageStatus};
use fra_store::StoreError;

/// Reasons a workflow operation can fail.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// No item with the given id exists.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// The submission was based on an out-of-date read of the item.
    #[error("stale version for {id}: submitted {submitted}, current {current}")]
    StaleVersion {
        /// Item the submission targeted.
        id: ItemId,
        /// Version the caller read before deciding.
        submitted: u64,
        /// Version currently stored.
        current: u64,
    },

    /// The submitting role does not own the item's current stage.
    #[error("actor {actor:?} does not own stage {stage:?} for item {id}")]
    WrongActor {
        /// Item the submission targeted.
        id: ItemId,
        /// Role claimed by the caller.
        actor: ActorRole,
        /// Stage the item currently sits at.
        stage: ReviewStage,
    },

    /// The decision is not legal for the item's current stage and status.
    #[error("illegal decision {decision:?} for item {id} at {stage:?}/{status:?}")]
    IllegalTransition {
        /// Item the submission targeted.
        id: ItemId,
        /// Stage the item currently sits at.
        stage: ReviewStage,
        /// Status at that stage.
        status: StageStatus,
        /// Decision that was submitted.
        decision: Decision,
    },

    /// A second finalization was attempted; the stored record is unchanged.
    #[error("item already finalized: {0}")]
    AlreadyFinalized(ItemId),

    /// Record synthesis failed; the transition was aborted with stored
    /// state untouched.
    #[error("digitization failed: {0}")]
    Digitization(#[from] DigitizeError),

    /// The store rejected a write the engine could not classify.
    #[error("store rejected operation: {0}")]
    Store(#[source] StoreError),
}

impl From<StoreError> for WorkflowError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => WorkflowError::NotFound(id),
            StoreError::VersionConflict {
                id,
                expected,
                actual,
            } => WorkflowError::StaleVersion {
                id,
                submitted: expected,
                current: actual,
            },
            other => WorkflowError::Store(other),
        }
    }
}
