//! Single-writer-per-item semantics under concurrent submissions.

mod common;

use common::{engine, subject};
use fra_engine::WorkflowError;
use fra_record::{ActorRole, Decision, ItemKind, ReviewStage};
use fra_store::ReviewStore;
use std::sync::Arc;
use std::thread;

#[test]
fn concurrent_submissions_against_one_version_yield_one_winner() {
    let engine = Arc::new(engine());
    let item = engine.admit(ItemKind::Claim, subject()).unwrap();

    let handles: Vec<_> = [Decision::Forward, Decision::Reject]
        .into_iter()
        .map(|decision| {
            let engine = Arc::clone(&engine);
            let id = item.id;
            thread::spawn(move || {
                engine.submit_decision(id, 0, ActorRole::VillageCouncil, decision, "racing")
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = results.iter().filter(|r| r.is_ok()).count();
    let stale = results
        .iter()
        .filter(|r| matches!(r, Err(WorkflowError::StaleVersion { .. })))
        .count();

    assert_eq!(winners, 1);
    assert_eq!(stale, 1);

    // Exactly one transition landed.
    let stored = engine.store().get(item.id).unwrap();
    assert_eq!(stored.version, 1);
    assert_eq!(stored.audit.len(), 1);
}

#[test]
fn writes_to_distinct_items_proceed_independently() {
    let engine = Arc::new(engine());
    let items: Vec<_> = (0..8)
        .map(|_| engine.admit(ItemKind::SupportingDocument, subject()).unwrap())
        .collect();

    let handles: Vec<_> = items
        .iter()
        .map(|item| {
            let engine = Arc::clone(&engine);
            let id = item.id;
            thread::spawn(move || {
                engine.submit_decision(id, 0, ActorRole::VillageCouncil, Decision::Forward, "")
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
    assert_eq!(engine.list_pending(ReviewStage::SubDistrict).len(), 8);
    assert!(engine.list_pending(ReviewStage::VillageCouncil).is_empty());
}

#[test]
fn loser_can_re_read_and_retry() {
    let engine = engine();
    let item = engine.admit(ItemKind::Claim, subject()).unwrap();
    engine
        .submit_decision(item.id, 0, ActorRole::VillageCouncil, Decision::Forward, "")
        .unwrap();

    // First attempt on the stale snapshot fails; the engine never retries
    // on the caller's behalf.
    let stale = engine.submit_decision(
        item.id,
        0,
        ActorRole::SubDistrict,
        Decision::Approve,
        "based on old read",
    );
    assert!(matches!(stale, Err(WorkflowError::StaleVersion { .. })));

    // Re-read, resubmit against the current version.
    let current = engine.store().get(item.id).unwrap();
    let approved = engine
        .submit_decision(
            current.id,
            current.version,
            ActorRole::SubDistrict,
            Decision::Approve,
            "based on fresh read",
        )
        .unwrap();
    assert_eq!(approved.version, current.version + 1);
}
