use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use game_core::{DialogueLine, GuessOutcome, PuzzleTarget};
use runtime::{
    CompletionLedger, FixedClock, GameController, InMemoryStore, MemoryHost, PersistentStore,
    RemoteCachedStore, SessionEvent, StoreError,
};

fn target() -> PuzzleTarget {
    PuzzleTarget::new(
        "Up",
        DialogueLine::new("CARL", "Adventure is out there!"),
        [DialogueLine::new("RUSSELL", "Wilderness explorer!")],
    )
}

fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 6, 15, 18, 0, 0).unwrap()))
}

// ================================================================
// Remote-backed store
// ================================================================

#[tokio::test]
async fn remote_writes_are_fire_and_forget() {
    let host = Arc::new(MemoryHost::new());
    let (store, worker) = RemoteCachedStore::hydrate(host.clone(), Duration::from_secs(1))
        .await
        .expect("hydration should succeed");
    let store = Arc::new(store);

    let ledger = CompletionLedger::new(store.clone(), "cueline", clock());
    let mut controller =
        GameController::start(ledger.clone(), "pixar", "2024-06-15", target(), 16).unwrap();
    controller.submit_guess(true, false);

    // Local reads see the write before the host does anything.
    assert_eq!(ledger.load_session("pixar", "2024-06-15").unwrap().attempt_count, 1);

    store.flush().await.expect("worker should be running");
    let remote = host
        .get("cueline:pixar:2024-06-15")
        .unwrap()
        .expect("host should receive the record");
    assert!(remote.contains("\"movieLocked\":true"));

    store.close(worker).await.unwrap();
}

#[tokio::test]
async fn slow_host_never_blocks_play() {
    let host = Arc::new(MemoryHost::new().with_latency(Duration::from_millis(500)));
    let (store, worker) = RemoteCachedStore::hydrate(host.clone(), Duration::from_millis(20))
        .await
        .unwrap();
    let store = Arc::new(store);

    let ledger = CompletionLedger::new(store.clone(), "cueline", clock());
    let mut controller =
        GameController::start(ledger.clone(), "pixar", "2024-06-15", target(), 16).unwrap();

    let started = std::time::Instant::now();
    for _ in 0..5 {
        controller.submit_guess(false, false);
    }
    assert!(started.elapsed() < Duration::from_millis(500));
    assert!(controller.session().is_over);
    assert!(ledger.load_session("pixar", "2024-06-15").unwrap().is_over);

    // Every remote write times out; the local copy is unaffected.
    store.flush().await.unwrap();
    assert_eq!(host.get("cueline:pixar:2024-06-15").unwrap(), None);

    store.close(worker).await.unwrap();
}

#[tokio::test]
async fn failing_host_is_logged_not_raised() {
    let host = Arc::new(MemoryHost::new().failing());
    let (store, worker) = RemoteCachedStore::hydrate(host.clone(), Duration::from_secs(1))
        .await
        .unwrap();

    store.set("k", "v").expect("local write must succeed");
    store.flush().await.unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    assert!(host.is_empty().unwrap());

    store.close(worker).await.unwrap();
}

// ================================================================
// Quota failures
// ================================================================

#[test]
fn full_store_does_not_abort_play() {
    let store = Arc::new(InMemoryStore::with_quota(16));
    let ledger = CompletionLedger::new(store.clone(), "cueline", clock());
    let mut controller =
        GameController::start(ledger.clone(), "pixar", "2024-06-15", target(), 16).unwrap();
    let mut events = controller.subscribe();

    let outcome = controller.submit_guess(false, true);
    assert_eq!(outcome, GuessOutcome::Continue { attempt_count: 1 });
    assert!(controller.session().character_locked);

    match events.try_recv().unwrap() {
        SessionEvent::PersistFailed { reason } => assert!(reason.contains("quota")),
        other => panic!("expected PersistFailed, got {other:?}"),
    }

    let outcome = controller.submit_guess(true, true);
    assert_eq!(outcome, GuessOutcome::Won { attempt_count: 2 });
    assert!(ledger.load_session("pixar", "2024-06-15").is_none());
    assert!(matches!(
        ledger.save_session("pixar", "2024-06-15", controller.session()),
        Err(StoreError::QuotaExceeded { .. })
    ));
}
