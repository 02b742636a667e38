//! The workflow engine proper.

use crate::decision_table::transition_effect;
use crate::error::WorkflowError;
use chrono::Utc;
use fra_digitize::Synthesizer;
use fra_record::{
    ActorRole, AuditEntry, Decision, ItemId, ItemKind, ReviewableItem, ReviewStage, StageStatus,
    SubjectInfo,
};
use fra_store::ReviewStore;

/// Statuses that mark an item as awaiting review at its current stage.
const IN_FLIGHT: [StageStatus; 2] = [StageStatus::Pending, StageStatus::Forwarded];

/// The state machine driving claim and document review.
///
/// Constructed once by the hosting service and shared by reference; all
/// operations take `&self`. Mutation happens only through
/// [`submit_decision`](ReviewEngine::submit_decision), which serializes per
/// item via the store's compare-and-swap.
pub struct ReviewEngine<S, D> {
    store: S,
    synthesizer: D,
}

impl<S: ReviewStore, D: Synthesizer> ReviewEngine<S, D> {
    /// Build an engine over a store and a synthesizer.
    pub const fn new(store: S, synthesizer: D) -> Self {
        Self { store, synthesizer }
    }

    /// The underlying store, for read-side collaborators.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Enter a new claim or document into the pipeline.
    ///
    /// The item starts at `VillageCouncil`/`Pending`, version 0, with an
    /// empty audit trail: audit length counts accepted decisions exactly.
    ///
    /// # Errors
    /// Propagates store rejection of the insert.
    pub fn admit(
        &self,
        kind: ItemKind,
        subject: SubjectInfo,
    ) -> Result<ReviewableItem, WorkflowError> {
        let item = ReviewableItem::new(kind, subject);
        self.store.insert(item.clone())?;
        tracing::info!(item_id = %item.id, kind = ?item.kind, "item admitted for review");
        Ok(item)
    }

    /// Validate and apply one decision.
    ///
    /// On acceptance: exactly one audit entry is appended, the acting
    /// stage's outcome is recorded, the version is incremented by one, a
    /// `Forward` moves the item to the next stage as `Pending`, and a
    /// `Finalize` synthesizes the digitized record before the store write
    /// so that both become visible together or not at all. The updated item
    /// is returned.
    ///
    /// # Errors
    /// - [`WorkflowError::NotFound`] — unknown item id.
    /// - [`WorkflowError::AlreadyFinalized`] — repeat `Finalize`; the
    ///   stored record is left unchanged.
    /// - [`WorkflowError::StaleVersion`] — `expected_version` does not
    ///   match the stored version, at validation time or at the store's
    ///   compare-and-swap.
    /// - [`WorkflowError::WrongActor`] — `actor` does not own the item's
    ///   current stage.
    /// - [`WorkflowError::IllegalTransition`] — the decision is not legal
    ///   for the current stage/status pair.
    /// - [`WorkflowError::Digitization`] — synthesis failed; stored state
    ///   is untouched.
    pub fn submit_decision(
        &self,
        id: ItemId,
        expected_version: u64,
        actor: ActorRole,
        decision: Decision,
        notes: impl Into<String>,
    ) -> Result<ReviewableItem, WorkflowError> {
        let mut item = self.store.get(id)?;

        if item.is_finalized() && decision == Decision::Finalize {
            return reject(WorkflowError::AlreadyFinalized(id));
        }
        if expected_version != item.version {
            return reject(WorkflowError::StaleVersion {
                id,
                submitted: expected_version,
                current: item.version,
            });
        }
        if actor.stage() != item.stage {
            return reject(WorkflowError::WrongActor {
                id,
                actor,
                stage: item.stage,
            });
        }
        let Some(effect) = item
            .is_in_flight()
            .then(|| transition_effect(item.stage, decision))
            .flatten()
        else {
            return reject(WorkflowError::IllegalTransition {
                id,
                stage: item.stage,
                status: item.stage_status,
                decision,
            });
        };

        // Synthesize before touching the item: a failure here aborts the
        // whole transition with stored state untouched.
        let record = if effect.synthesizes {
            Some(self.synthesizer.synthesize(&item)?)
        } else {
            None
        };

        let acted_stage = item.stage;
        item.audit.append(AuditEntry::new(
            actor,
            acted_stage,
            decision,
            notes,
            Utc::now(),
        ));
        item.stage_outcomes.insert(acted_stage, effect.outcome);
        if let Some(next) = effect.next_stage {
            item.stage = next;
            item.stage_status = StageStatus::Pending;
        } else {
            item.stage_status = effect.outcome;
        }
        if let Some(record) = record {
            item.digitized = Some(record);
        }
        item.version += 1;

        // The store re-checks the version under its write lock; of two
        // concurrent submissions exactly one lands, the other maps back to
        // StaleVersion here.
        self.store.put(item.clone(), expected_version)?;

        tracing::info!(
            item_id = %id,
            stage = ?acted_stage,
            decision = ?decision,
            to_stage = ?item.stage,
            status = ?item.stage_status,
            version = item.version,
            "decision accepted"
        );
        Ok(item)
    }

    /// Items awaiting review at `stage`.
    ///
    /// Always read through to the store; results are never cached.
    pub fn list_pending(&self, stage: ReviewStage) -> Vec<ReviewableItem> {
        self.store.list_by_stage(stage, &IN_FLIGHT)
    }

    /// The cross-stage finalized records.
    pub fn list_finalized(&self) -> Vec<ReviewableItem> {
        self.store.list_finalized()
    }
}

fn reject<T>(err: WorkflowError) -> Result<T, WorkflowError> {
    tracing::warn!(error = %err, "decision rejected");
    Err(err)
}
