//! The immutable record produced when an item is finalized.
//!
//! A [`DigitizedRecord`] is created exactly once, at the District tier's
//! `Finalize` decision, and never changes afterwards. Its integrity markers
//! bind it to the source item: the content hash covers the canonical
//! serialization of the subject payload plus the extracted fields, and the
//! signature is an Ed25519 tag over that hash under a process-held key.

use crate::hash::{ContentHash, HashError};
use crate::subject::{GeoPoint, RightType, SubjectInfo};
use chrono::{DateTime, Utc};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Subject and claim attributes as interpreted by the synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Beneficiary name as extracted.
    pub beneficiary_name: String,
    /// National identity number as extracted.
    pub national_id: String,
    /// Village of origin.
    pub village: String,
    /// Category of right recorded on the claim.
    pub right_type: RightType,
    /// Claimed area in hectares.
    pub claim_area_hectares: f64,
    /// Associated forest area in hectares.
    pub forest_area_hectares: f64,
    /// Tribal community of the claimant.
    pub tribal_community: String,
    /// Declared annual income in rupees.
    pub annual_income: u64,
    /// Parcel location, when present on the source.
    pub coordinates: Option<GeoPoint>,
}

/// How the extracted fields were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtractionMethod {
    /// Deterministic copy of the structured subject payload.
    StructuredCopy,
    /// Optical character recognition over scanned documents.
    OcrExtraction,
}

impl Display for ExtractionMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionMethod::StructuredCopy => write!(f, "structured-copy"),
            ExtractionMethod::OcrExtraction => write!(f, "ocr-extraction"),
        }
    }
}

/// Immutable digital record of a finalized item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitizedRecord {
    /// Snapshot of the subject attributes at finalization.
    pub extracted: ExtractedFields,
    /// Extraction confidence, 0–100.
    pub confidence_score: f32,
    /// Wall-clock synthesis time in milliseconds. Provenance only; not
    /// covered by the hash or signature.
    pub processing_millis: u64,
    /// Provenance of the extracted fields.
    pub method: ExtractionMethod,
    /// BLAKE3 over the canonical serialization of subject + extracted fields.
    pub content_hash: ContentHash,
    /// Ed25519 tag over `content_hash` under the process signing key.
    pub signature: Signature,
    /// When finalization happened.
    pub finalized_at: DateTime<Utc>,
}

impl DigitizedRecord {
    /// The hash every record's signature must cover: canonical JSON of the
    /// subject payload and the extracted fields, in that order.
    ///
    /// # Errors
    /// Returns [`HashError::Serialization`] if either value cannot be encoded.
    pub fn signing_hash(
        subject: &SubjectInfo,
        extracted: &ExtractedFields,
    ) -> Result<ContentHash, HashError> {
        ContentHash::compute_canonical(&(subject, extracted))
    }

    /// Re-verify this record against the item's subject payload.
    ///
    /// Checks that the stored content hash still matches the payload and
    /// that the signature verifies under `verifying_key`.
    #[must_use]
    pub fn verify(&self, subject: &SubjectInfo, verifying_key: &VerifyingKey) -> bool {
        let Ok(expected) = Self::signing_hash(subject, &self.extracted) else {
            return false;
        };
        expected == self.content_hash
            && verifying_key
                .verify(self.content_hash.as_bytes(), &self.signature)
                .is_ok()
    }
}
