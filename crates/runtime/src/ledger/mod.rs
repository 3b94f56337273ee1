//! Completion ledger: versioned per-(pack, date) session records.
//!
//! Keys follow `"<namespace>:<packId>:<YYYY-MM-DD>"`. Reads never fail the
//! caller on bad data: a missing or unparseable record loads as `None`, and
//! corrupt entries are skipped when scanning history.

mod record;

pub use record::{GuessEntry, SessionRecord};

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tracing::{debug, warn};

use game_core::{GameConfig, GameSession};

use crate::clock::Clock;
use crate::store::{PersistentStore, Result, StoreError};
use crate::streak;

/// Calendar date format used in keys and puzzle files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A finished session found while scanning the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletedSession {
    pub pack_id: String,
    /// Nominal puzzle date taken from the key.
    pub date: NaiveDate,
    pub success: bool,
    pub attempt_count: u8,
    /// Actual completion instant; absent on legacy records.
    pub completed_at: Option<DateTime<Utc>>,
}

impl CompletedSession {
    /// Local calendar day the session was played, falling back to the puzzle
    /// date when the completion instant is unknown.
    pub fn play_date<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.completed_at
            .map(|instant| instant.with_timezone(tz).date_naive())
            .unwrap_or(self.date)
    }
}

/// Aggregate view over every completed session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LedgerStats {
    pub played: u32,
    pub wins: u32,
    /// `wins / played`, 0 when nothing was played.
    pub win_rate: f64,
    /// Wins by attempt count; index 0 is a first-guess win.
    pub distribution: [u32; GameConfig::MAX_ATTEMPTS as usize],
    pub current_streak: u32,
    pub max_streak: u32,
}

/// Reads and writes session records through a [`PersistentStore`].
#[derive(Clone)]
pub struct CompletionLedger {
    store: Arc<dyn PersistentStore>,
    namespace: String,
    clock: Arc<dyn Clock>,
}

impl CompletionLedger {
    pub fn new(
        store: Arc<dyn PersistentStore>,
        namespace: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            namespace: namespace.into(),
            clock,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn store(&self) -> &Arc<dyn PersistentStore> {
        &self.store
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn key(&self, pack_id: &str, date: &str) -> String {
        format!("{}:{}:{}", self.namespace, pack_id, date)
    }

    /// Splits a key of this namespace into `(pack_id, date)`.
    fn split_key<'k>(&self, key: &'k str) -> Option<(&'k str, &'k str)> {
        key.strip_prefix(self.namespace.as_str())?
            .strip_prefix(':')?
            .rsplit_once(':')
    }

    /// Writes the full session as a current-version record.
    pub fn save_session(&self, pack_id: &str, date: &str, session: &GameSession) -> Result<()> {
        let key = self.key(pack_id, date);
        let record = SessionRecord::from_session(session, self.clock.now());
        let json = serde_json::to_string(&record).map_err(|e| StoreError::Json(e.to_string()))?;
        self.store.set(&key, &json)?;
        debug!("Saved session {} (attempts={})", key, record.attempts);
        Ok(())
    }

    /// Stored session for `pack_id` on `date`.
    ///
    /// Missing data, unreadable stores, and unparseable records all yield
    /// `None`; the latter two are logged.
    pub fn load_session(&self, pack_id: &str, date: &str) -> Option<GameSession> {
        let key = self.key(pack_id, date);
        let record = self.read_record(&key)?;
        if record.needs_migration() {
            debug!(
                "Loaded version {} record {}, upgrading on next write",
                record.version, key
            );
        }
        Some(record.to_session())
    }

    fn read_record(&self, key: &str) -> Option<SessionRecord> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read {}: {}", key, e);
                return None;
            }
        };
        match parse_record(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Ignoring unparseable record {}: {}", key, e);
                None
            }
        }
    }

    /// Marks the win celebration as played without touching gameplay fields.
    ///
    /// Returns `false` when no record exists for the key.
    pub fn mark_celebration_shown(&self, pack_id: &str, date: &str) -> Result<bool> {
        let Some(mut session) = self.load_session(pack_id, date) else {
            return Ok(false);
        };
        session.celebration_shown = true;
        self.save_session(pack_id, date, &session)?;
        Ok(true)
    }

    /// Every finished session under this namespace, ordered by date then pack.
    ///
    /// Corrupt records and keys with malformed dates are skipped.
    pub fn list_completed_sessions(&self) -> Result<Vec<CompletedSession>> {
        let mut completed = Vec::new();

        for key in self.store.keys()? {
            let Some((pack_id, date)) = self.split_key(&key) else {
                continue;
            };
            let Ok(date) = NaiveDate::parse_from_str(date, DATE_FORMAT) else {
                debug!("Skipping key with malformed date: {}", key);
                continue;
            };
            let Some(record) = self.read_record(&key) else {
                continue;
            };
            if !record.game_over {
                continue;
            }

            completed.push(CompletedSession {
                pack_id: pack_id.to_owned(),
                date,
                success: record.success,
                attempt_count: record.attempts.min(GameConfig::MAX_ATTEMPTS),
                completed_at: record.completed_at,
            });
        }

        completed.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.pack_id.cmp(&b.pack_id)));
        Ok(completed)
    }

    /// Totals, win distribution, and streaks as of `today` in `tz`.
    pub fn stats_in<Tz: TimeZone>(&self, today: NaiveDate, tz: &Tz) -> Result<LedgerStats> {
        let completed = self.list_completed_sessions()?;

        let mut stats = LedgerStats {
            played: completed.len() as u32,
            ..LedgerStats::default()
        };
        for session in completed.iter().filter(|s| s.success) {
            stats.wins += 1;
            let slot = usize::from(session.attempt_count.max(1)) - 1;
            if let Some(count) = stats.distribution.get_mut(slot) {
                *count += 1;
            }
        }
        if stats.played > 0 {
            stats.win_rate = f64::from(stats.wins) / f64::from(stats.played);
        }
        stats.current_streak = streak::compute_streak_in(&completed, today, tz);
        stats.max_streak = streak::longest_streak(&completed, tz);

        Ok(stats)
    }

    /// [`Self::stats_in`] on the local calendar.
    pub fn stats(&self, today: NaiveDate) -> Result<LedgerStats> {
        self.stats_in(today, &chrono::Local)
    }
}

/// Parses a stored value, rejecting anything that is not a JSON object.
fn parse_record(raw: &str) -> std::result::Result<SessionRecord, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom("record is not a JSON object"));
    }
    serde_json::from_value(value)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::clock::FixedClock;
    use crate::store::InMemoryStore;

    fn ledger() -> CompletionLedger {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 18, 30, 0).unwrap();
        CompletionLedger::new(Arc::new(InMemoryStore::new()), "cueline", Arc::new(FixedClock(now)))
    }

    #[test]
    fn key_scheme() {
        let ledger = ledger();
        assert_eq!(ledger.key("pixar", "2024-06-15"), "cueline:pixar:2024-06-15");
        assert_eq!(
            ledger.split_key("cueline:pixar:2024-06-15"),
            Some(("pixar", "2024-06-15"))
        );
        assert_eq!(ledger.split_key("other:pixar:2024-06-15"), None);
        assert_eq!(ledger.split_key("cuelinex:pixar:2024-06-15"), None);
    }

    #[test]
    fn non_object_records_load_as_none() {
        let ledger = ledger();
        for raw in ["[1,2]", "\"text\"", "{bad json", "{\"attempts\":-1}"] {
            ledger.store().set("cueline:pixar:2024-06-15", raw).unwrap();
            assert_eq!(ledger.load_session("pixar", "2024-06-15"), None, "{raw}");
        }
    }

    #[test]
    fn celebration_flag_only_touches_cosmetics() {
        let ledger = ledger();
        assert!(!ledger.mark_celebration_shown("pixar", "2024-06-15").unwrap());

        let mut session = GameSession::new();
        session.is_over = true;
        session.is_win = true;
        ledger.save_session("pixar", "2024-06-15", &session).unwrap();

        assert!(ledger.mark_celebration_shown("pixar", "2024-06-15").unwrap());
        let loaded = ledger.load_session("pixar", "2024-06-15").unwrap();
        assert!(loaded.celebration_shown);
        assert_eq!(
            GameSession {
                celebration_shown: false,
                ..loaded
            },
            session
        );
    }

    #[test]
    fn stats_on_empty_ledger() {
        let stats = ledger()
            .stats_in(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), &Utc)
            .unwrap();
        assert_eq!(stats, LedgerStats::default());
    }
}
