//! The synthesizer contract.

use fra_record::{DigitizedRecord, HashError, ReviewableItem};

/// Produces the terminal digitized record for an item being finalized.
///
/// # Contract
/// - Deterministic extraction: identical subject input yields identical
///   extracted fields, content hash, and signature.
/// - A failure must leave no observable partial record; the caller aborts
///   the finalization transition.
/// - Implementations do not guard against repeat invocation; the workflow
///   engine enforces once-per-item.
pub trait Synthesizer: Send + Sync {
    /// Synthesize the digitized record for `item`.
    ///
    /// # Errors
    /// Returns [`DigitizeError`] if the payload cannot be canonically
    /// serialized or the signing key is unavailable.
    fn synthesize(&self, item: &ReviewableItem) -> Result<DigitizedRecord, DigitizeError>;
}

/// Errors raised during record synthesis.
#[derive(Debug, thiserror::Error)]
pub enum DigitizeError {
    /// The subject or extracted fields could not be canonically serialized.
    #[error("canonical serialization failed: {0}")]
    Canonicalization(#[from] HashError),

    /// The process signing key could not be used.
    #[error("signing key unavailable")]
    SigningKeyUnavailable,
}
