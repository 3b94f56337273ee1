use std::sync::Arc;

use chrono::{TimeZone, Utc};
use game_core::{
    AttemptRecord, DialogueLine, GameConfig, GameEngine, GameSession, GuessOutcome, PuzzleTarget,
    Timestamp,
};
use runtime::{
    CompletionLedger, FileStore, FixedClock, GameController, InMemoryStore, PersistentStore,
    SessionRecord, StartKind,
};

fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2024, 6, 15, 18, 30, 0).unwrap(),
    ))
}

fn memory_ledger() -> CompletionLedger {
    CompletionLedger::new(Arc::new(InMemoryStore::new()), "cueline", clock())
}

fn play(records: &[AttemptRecord]) -> GameSession {
    let mut session = GameSession::new();
    let mut engine = GameEngine::new(&mut session);
    for (i, record) in records.iter().enumerate() {
        engine.submit_guess(*record, Timestamp::from_millis(1_718_470_000_000 + i as i64));
    }
    session
}

// ================================================================
// Round-trips
// ================================================================

#[test]
fn fresh_session_round_trips() {
    let ledger = memory_ledger();
    let session = GameSession::new();

    ledger
        .save_session("pixar", "2024-06-15", &session)
        .expect("save should succeed");
    let loaded = ledger
        .load_session("pixar", "2024-06-15")
        .expect("record should load");

    assert_eq!(loaded, session);
}

#[test]
fn terminated_sessions_round_trip() {
    let ledger = memory_ledger();
    let won = play(&[
        AttemptRecord::new(true, false),
        AttemptRecord::new(false, false),
        AttemptRecord::new(true, true),
    ]);
    let lost = play(&[AttemptRecord::new(false, true); 5]);

    ledger.save_session("pixar", "2024-06-15", &won).unwrap();
    ledger.save_session("disney", "2024-06-15", &lost).unwrap();

    assert_eq!(ledger.load_session("pixar", "2024-06-15"), Some(won));
    assert_eq!(ledger.load_session("disney", "2024-06-15"), Some(lost));
}

#[test]
fn legacy_record_round_trips_after_upgrade() {
    let ledger = memory_ledger();
    let key = ledger.key("pixar", "2024-06-10");
    ledger
        .store()
        .set(
            &key,
            r#"{"attempts":2,"gameOver":true,"success":true,"movieLocked":true}"#,
        )
        .unwrap();

    let migrated = ledger
        .load_session("pixar", "2024-06-10")
        .expect("legacy record should load");
    assert_eq!(migrated.attempt_count, 2);
    assert_eq!(migrated.attempts[1], AttemptRecord::new(true, true));
    assert!(migrated.completed_at.is_none());

    ledger.save_session("pixar", "2024-06-10", &migrated).unwrap();
    let raw = ledger.store().get(&key).unwrap().unwrap();
    let record: SessionRecord = serde_json::from_str(&raw).unwrap();
    assert_eq!(record.version, SessionRecord::CURRENT_VERSION);
    assert!(record.completed_at.is_none());

    assert_eq!(ledger.load_session("pixar", "2024-06-10"), Some(migrated));
}

#[test]
fn file_store_round_trips_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let session = play(&[AttemptRecord::new(false, false), AttemptRecord::new(true, true)]);

    {
        let store = Arc::new(FileStore::open(&path).unwrap());
        let ledger = CompletionLedger::new(store, "cueline", clock());
        ledger.save_session("pixar", "2024-06-15", &session).unwrap();
    }

    let store = Arc::new(FileStore::open(&path).unwrap());
    let ledger = CompletionLedger::new(store, "cueline", clock());
    assert_eq!(ledger.load_session("pixar", "2024-06-15"), Some(session));
}

#[test]
fn exhausted_open_records_restore_as_finished() {
    let target = PuzzleTarget::new(
        "Up",
        DialogueLine::new("CARL", "Adventure is out there!"),
        [DialogueLine::new("RUSSELL", "Wilderness explorer!")],
    );

    for raw in [
        r#"{"attempts":5,"gameOver":false}"#,
        r#"{"version":2,"attempts":5,"gameOver":false,"characterLocked":false,"guessHistory":[]}"#,
    ] {
        let ledger = memory_ledger();
        let key = ledger.key("pixar", "2024-06-12");
        ledger.store().set(&key, raw).unwrap();

        let mut controller =
            GameController::start(ledger.clone(), "pixar", "2024-06-12", target.clone(), 8)
                .expect("controller should start");
        assert_eq!(controller.start_kind(), StartKind::Revisit, "{raw}");
        assert!(controller.session().is_over);
        assert!(!controller.session().is_win);

        assert_eq!(controller.submit_guess(false, false), GuessOutcome::Ignored);
        let stored = ledger
            .load_session("pixar", "2024-06-12")
            .expect("record should load");
        assert_eq!(stored.attempt_count, GameConfig::MAX_ATTEMPTS, "{raw}");
        assert!(stored.is_over);
    }
}

// ================================================================
// History scans
// ================================================================

#[test]
fn corrupt_and_foreign_entries_are_skipped() {
    let ledger = memory_ledger();
    let store = ledger.store().clone();

    ledger
        .save_session("pixar", "2024-06-14", &play(&[AttemptRecord::new(true, true)]))
        .unwrap();
    ledger
        .save_session("pixar", "2024-06-15", &play(&[AttemptRecord::new(false, false)]))
        .unwrap();
    store.set("cueline:pixar:2024-06-13", "{not json").unwrap();
    store.set("cueline:pixar:yesterday", "{}").unwrap();
    store.set("other:pixar:2024-06-12", r#"{"gameOver":true}"#).unwrap();
    store.set("settings", "dark").unwrap();

    let completed = ledger
        .list_completed_sessions()
        .expect("scan should not fail on bad entries");

    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].pack_id, "pixar");
    assert_eq!(completed[0].date.to_string(), "2024-06-14");
    assert!(completed[0].success);
    assert_eq!(completed[0].attempt_count, 1);
    assert!(completed[0].completed_at.is_some());
}

#[test]
fn stats_summarise_history() {
    let ledger = memory_ledger();
    let miss = AttemptRecord::new(false, false);
    let full = AttemptRecord::new(true, true);

    ledger.save_session("pixar", "2024-06-13", &play(&[full])).unwrap();
    ledger.save_session("pixar", "2024-06-14", &play(&[miss, miss, full])).unwrap();
    ledger.save_session("pixar", "2024-06-15", &play(&[miss; 5])).unwrap();

    let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let stats = ledger.stats_in(today, &Utc).unwrap();

    assert_eq!(stats.played, 3);
    assert_eq!(stats.wins, 2);
    assert!((stats.win_rate - 2.0 / 3.0).abs() < f64::EPSILON);
    assert_eq!(stats.distribution, [1, 0, 1, 0, 0]);
    // All three were completed on 2024-06-15 by the fixed engine timestamps.
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.max_streak, 1);
}
