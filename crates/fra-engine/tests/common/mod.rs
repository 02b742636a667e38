//! Shared fixtures for the engine integration tests.

use ed25519_dalek::SigningKey;
use fra_digitize::FieldCopySynthesizer;
use fra_engine::ReviewEngine;
use fra_record::{ActorRole, Decision, GeoPoint, ItemKind, ReviewableItem, RightType, SubjectInfo};
use fra_store::MemoryStore;
use rand::rngs::OsRng;

pub type TestEngine = ReviewEngine<MemoryStore, FieldCopySynthesizer>;

pub fn engine() -> TestEngine {
    ReviewEngine::new(
        MemoryStore::new(),
        FieldCopySynthesizer::new(SigningKey::generate(&mut OsRng)),
    )
}

pub fn subject() -> SubjectInfo {
    SubjectInfo {
        applicant_name: "Ram Singh".to_string(),
        national_id: "XXXX-XXXX-1234".to_string(),
        village: "Bhamragad".to_string(),
        right_type: RightType::Ifr,
        claim_area_hectares: 2.5,
        forest_area_hectares: 1.2,
        tribal_community: "Gond".to_string(),
        annual_income: 45_000,
        coordinates: Some(GeoPoint {
            latitude: 19.42,
            longitude: 80.35,
        }),
    }
}

/// Drive a fresh item up to the District tier's pending queue.
pub fn item_at_district(engine: &TestEngine) -> ReviewableItem {
    let item = engine.admit(ItemKind::Claim, subject()).unwrap();
    let item = engine
        .submit_decision(
            item.id,
            item.version,
            ActorRole::VillageCouncil,
            Decision::Forward,
            "village council verified",
        )
        .unwrap();
    engine
        .submit_decision(
            item.id,
            item.version,
            ActorRole::SubDistrict,
            Decision::Forward,
            "sub-district verified",
        )
        .unwrap()
}
