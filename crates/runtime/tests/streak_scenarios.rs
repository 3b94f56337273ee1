use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use game_core::{GameSession, Timestamp};
use runtime::{
    CompletedSession, CompletionLedger, FixedClock, InMemoryStore, compute_streak_in,
    longest_streak,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn instant(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn entry(puzzle_date: &str, completed_at: &str) -> CompletedSession {
    CompletedSession {
        pack_id: "pixar".into(),
        date: date(puzzle_date),
        success: true,
        attempt_count: 2,
        completed_at: Some(instant(completed_at)),
    }
}

#[test]
fn three_consecutive_days_ending_today() {
    let entries = [
        entry("2024-06-13", "2024-06-13T12:00:00Z"),
        entry("2024-06-14", "2024-06-14T12:00:00Z"),
        entry("2024-06-15", "2024-06-15T12:00:00Z"),
    ];
    assert_eq!(compute_streak_in(&entries, date("2024-06-15"), &Utc), 3);
}

#[test]
fn old_completions_only_give_zero() {
    let entries = [
        entry("2024-06-11", "2024-06-11T12:00:00Z"),
        entry("2024-06-12", "2024-06-12T12:00:00Z"),
    ];
    assert_eq!(compute_streak_in(&entries, date("2024-06-15"), &Utc), 0);
}

#[test]
fn backlog_cleared_in_one_sitting_counts_once() {
    let entries = [
        entry("2024-06-01", "2024-06-15T12:00:00Z"),
        entry("2024-06-03", "2024-06-15T12:05:00Z"),
        entry("2024-06-07", "2024-06-15T12:10:00Z"),
        entry("2024-06-10", "2024-06-15T12:15:00Z"),
        entry("2024-06-12", "2024-06-15T12:20:00Z"),
    ];
    assert_eq!(compute_streak_in(&entries, date("2024-06-15"), &Utc), 1);
    assert_eq!(longest_streak(&entries, &Utc), 1);
}

#[test]
fn streak_through_the_ledger() {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 20, 0, 0).unwrap();
    let ledger = CompletionLedger::new(
        Arc::new(InMemoryStore::new()),
        "cueline",
        Arc::new(FixedClock(now)),
    );

    for day in 13..=15 {
        let mut session = GameSession::new();
        session.is_over = true;
        session.is_win = true;
        session.attempt_count = 1;
        let finished = Utc.with_ymd_and_hms(2024, 6, day, 9, 0, 0).unwrap();
        session.completed_at = Some(Timestamp::from_millis(finished.timestamp_millis()));
        ledger
            .save_session("pixar", &format!("2024-06-{day}"), &session)
            .unwrap();
    }

    let completed = ledger.list_completed_sessions().unwrap();
    assert_eq!(compute_streak_in(&completed, date("2024-06-15"), &Utc), 3);
    assert_eq!(compute_streak_in(&completed, date("2024-06-16"), &Utc), 0);
    assert_eq!(ledger.stats_in(date("2024-06-15"), &Utc).unwrap().max_streak, 3);
}
