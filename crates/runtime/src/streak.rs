//! Daily streaks over completed sessions.
//!
//! A streak counts consecutive calendar days with at least one completion,
//! measured by when the player actually finished (local date of
//! `completedAt`), not by the puzzle's nominal date. Clearing a backlog of old
//! puzzles in one sitting counts as a single day.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDate, TimeZone};

use crate::ledger::CompletedSession;

fn play_dates<Tz: TimeZone>(entries: &[CompletedSession], tz: &Tz) -> BTreeSet<NaiveDate> {
    entries.iter().map(|entry| entry.play_date(tz)).collect()
}

/// Streak ending on `today`, with play dates taken in `tz`.
///
/// Walks back from `today` and stops at the first day without a completion,
/// so a player who has not played yet today has a streak of 0.
pub fn compute_streak_in<Tz: TimeZone>(
    entries: &[CompletedSession],
    today: NaiveDate,
    tz: &Tz,
) -> u32 {
    let dates = play_dates(entries, tz);

    let mut streak = 0;
    let mut day = Some(today);
    while let Some(current) = day
        && dates.contains(&current)
    {
        streak += 1;
        day = current.pred_opt();
    }
    streak
}

/// [`compute_streak_in`] on the local calendar.
pub fn compute_streak(entries: &[CompletedSession], today: NaiveDate) -> u32 {
    compute_streak_in(entries, today, &Local)
}

/// Longest run of consecutive play dates anywhere in the history.
pub fn longest_streak<Tz: TimeZone>(entries: &[CompletedSession], tz: &Tz) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for date in play_dates(entries, tz) {
        run = match previous {
            Some(prev) if prev.succ_opt() == Some(date) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(date);
    }
    longest
}
