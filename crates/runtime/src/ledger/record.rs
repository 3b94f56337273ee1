//! Persisted session record and its schema migration.
//!
//! # Schema
//!
//! ```text
//! { version, attempts, gameOver, success, movieLocked, characterLocked,
//!   guessHistory: [{ movie, char }], completedAt, lastUpdated, celebrationShown? }
//! ```
//!
//! Every field is optional on read. A record without `version` is version 1.
//! Writes always emit [`SessionRecord::CURRENT_VERSION`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use game_core::{AttemptRecord, Attempts, GameConfig, GameSession};

use crate::clock::{from_datetime, to_datetime};

/// One entry of the persisted guess history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessEntry {
    #[serde(default)]
    pub movie: bool,
    #[serde(default, rename = "char")]
    pub character: bool,
}

impl From<AttemptRecord> for GuessEntry {
    fn from(record: AttemptRecord) -> Self {
        Self {
            movie: record.movie_correct,
            character: record.character_correct,
        }
    }
}

impl From<GuessEntry> for AttemptRecord {
    fn from(entry: GuessEntry) -> Self {
        AttemptRecord::new(entry.movie, entry.character)
    }
}

/// Serialized form of a [`GameSession`] under one ledger key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default = "legacy_version")]
    pub version: u32,
    #[serde(default)]
    pub attempts: u8,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub movie_locked: bool,
    /// Absent in the oldest records.
    #[serde(default)]
    pub character_locked: Option<bool>,
    /// Absent in the oldest records.
    #[serde(default)]
    pub guess_history: Option<Vec<GuessEntry>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub celebration_shown: bool,
}

fn legacy_version() -> u32 {
    SessionRecord::LEGACY_VERSION
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl SessionRecord {
    pub const LEGACY_VERSION: u32 = 1;
    pub const CURRENT_VERSION: u32 = 2;

    /// Current-version record for `session`, stamped `last_updated = now`.
    pub fn from_session(session: &GameSession, now: DateTime<Utc>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            attempts: session.attempt_count,
            game_over: session.is_over,
            success: session.is_win,
            movie_locked: session.movie_locked,
            character_locked: Some(session.character_locked),
            guess_history: Some(session.attempts.iter().copied().map(GuessEntry::from).collect()),
            completed_at: session.completed_at.and_then(to_datetime),
            last_updated: Some(now),
            celebration_shown: session.celebration_shown,
        }
    }

    /// Whether this record predates the history and character-lock fields.
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
            || self.guess_history.is_none()
            || self.character_locked.is_none()
    }

    /// Rebuilds the live session.
    ///
    /// Records without a guess history get a best-effort reconstruction: every
    /// attempt but the last was a miss, and the last one was fully correct on a
    /// win or carried the movie lock on a loss.
    ///
    /// A record that used every attempt without being marked over is restored
    /// as lost, so it can neither accept a sixth guess nor stay open forever.
    pub fn to_session(&self) -> GameSession {
        let attempt_count = self.attempts.min(GameConfig::MAX_ATTEMPTS);
        let exhausted = attempt_count >= GameConfig::MAX_ATTEMPTS && !self.game_over;
        let is_over = self.game_over || exhausted;
        let is_win = self.success && !exhausted;

        let attempts: Attempts = match &self.guess_history {
            Some(history) => history
                .iter()
                .copied()
                .take(usize::from(GameConfig::MAX_ATTEMPTS))
                .map(AttemptRecord::from)
                .collect(),
            None => self.reconstruct_history(attempt_count, is_win),
        };

        GameSession {
            attempts,
            attempt_count,
            movie_locked: self.movie_locked,
            character_locked: self.character_locked.unwrap_or(self.success),
            is_over,
            is_win,
            completed_at: self.completed_at.map(from_datetime),
            celebration_shown: self.celebration_shown,
        }
    }

    fn reconstruct_history(&self, attempt_count: u8, is_win: bool) -> Attempts {
        let mut history = Attempts::new();
        if attempt_count == 0 {
            return history;
        }
        for _ in 1..attempt_count {
            history.push(AttemptRecord::new(false, false));
        }
        let last = if is_win {
            AttemptRecord::new(true, true)
        } else {
            AttemptRecord::new(self.movie_locked, false)
        };
        history.push(last);
        history
    }
}
