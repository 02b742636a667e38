//! Append-only audit trail embedded in each reviewable item.
//!
//! Every accepted decision appends exactly one [`AuditEntry`]. Entries are
//! hash-chained: each carries the hash of its predecessor, so reordering,
//! editing, or dropping an entry is detectable with [`AuditTrail::verify_integrity`].
//! There is no edit or removal operation.

use crate::stage::{ActorRole, Decision, ReviewStage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One attributed, timestamped decision record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Role that submitted the decision.
    pub actor: ActorRole,
    /// Stage the item sat at when the decision was taken.
    pub stage_at_time: ReviewStage,
    /// The decision itself.
    pub decision: Decision,
    /// Free-form reviewer notes.
    pub notes: String,
    /// When the decision was accepted.
    pub timestamp: DateTime<Utc>,
    /// Hash of the preceding entry (zero for the first).
    pub prev_hash: [u8; 32],
    /// Hash of this entry, covering all fields above.
    pub hash: [u8; 32],
}

impl AuditEntry {
    /// Build an entry with unset chain hashes; [`AuditTrail::append`] fills them.
    #[must_use]
    pub fn new(
        actor: ActorRole,
        stage_at_time: ReviewStage,
        decision: Decision,
        notes: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            actor,
            stage_at_time,
            decision,
            notes: notes.into(),
            timestamp,
            prev_hash: [0u8; 32],
            hash: [0u8; 32],
        }
    }
}

/// Insertion-ordered, append-only sequence of audit entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditTrail {
    entries: Vec<AuditEntry>,
}

impl AuditTrail {
    /// An empty trail.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry, linking it into the hash chain.
    pub fn append(&mut self, mut entry: AuditEntry) {
        entry.prev_hash = self.entries.last().map_or([0u8; 32], |e| e.hash);
        entry.hash = compute_hash(&entry);
        self.entries.push(entry);
    }

    /// Entries in insertion order. Restartable; borrows the trail.
    pub fn entries(&self) -> impl Iterator<Item = &AuditEntry> + '_ {
        self.entries.iter()
    }

    /// Number of entries recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no decision has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walk the chain and recompute every hash.
    ///
    /// # Errors
    /// Returns [`AuditError::IntegrityViolation`] if any link or entry hash
    /// does not match.
    pub fn verify_integrity(&self) -> Result<(), AuditError> {
        let mut prev = [0u8; 32];
        for entry in &self.entries {
            if entry.prev_hash != prev || entry.hash != compute_hash(entry) {
                return Err(AuditError::IntegrityViolation);
            }
            prev = entry.hash;
        }
        Ok(())
    }
}

fn compute_hash(entry: &AuditEntry) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update([entry.actor.as_u8()]);
    hasher.update([entry.stage_at_time.as_u8()]);
    hasher.update([entry.decision.as_u8()]);
    hasher.update(entry.notes.as_bytes());
    hasher.update([0]);
    hasher.update(entry.timestamp.to_rfc3339().as_bytes());
    hasher.update([0]);
    hasher.update(entry.prev_hash);
    hasher.finalize().into()
}

/// Errors raised by audit-trail verification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuditError {
    /// The hash chain does not verify: an entry was altered or reordered.
    #[error("audit trail integrity violation")]
    IntegrityViolation,
}
