//! Digitization synthesizer for finalized review items.
//!
//! At the District tier's `Finalize` decision the workflow engine hands the
//! item to a [`Synthesizer`], which produces the immutable
//! [`DigitizedRecord`](fra_record::DigitizedRecord): a snapshot of the
//! subject attributes plus integrity markers (content hash and Ed25519
//! signature) binding the record to the item's state at finalization.
//!
//! Synthesis must be deterministic given identical input. The reference
//! implementation, [`FieldCopySynthesizer`], copies the structured subject
//! payload verbatim; an OCR-backed extractor would implement the same trait
//! behind the same contract. The engine, not the synthesizer, guarantees
//! synthesis runs at most once per item.

pub mod field_copy;
pub mod synthesizer;

pub use field_copy::FieldCopySynthesizer;
pub use synthesizer::{DigitizeError, Synthesizer};
