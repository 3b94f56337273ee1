//! Authoritative session state for one pack on one calendar date.
//!
//! The runtime clones or serializes this state but mutates it exclusively
//! through [`crate::engine::GameEngine`].

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Milliseconds since the Unix epoch.
///
/// game-core never reads a clock; callers pass the current instant in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

/// Correctness of one submitted guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AttemptRecord {
    pub movie_correct: bool,
    pub character_correct: bool,
}

impl AttemptRecord {
    pub const fn new(movie_correct: bool, character_correct: bool) -> Self {
        Self {
            movie_correct,
            character_correct,
        }
    }

    /// Both dimensions right on this guess.
    pub const fn is_full(&self) -> bool {
        self.movie_correct && self.character_correct
    }
}

/// Guess history, bounded by [`GameConfig::MAX_ATTEMPTS`].
pub type Attempts = ArrayVec<AttemptRecord, { GameConfig::MAX_ATTEMPTS as usize }>;

/// Coarse lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SessionPhase {
    InProgress,
    Won,
    Lost,
}

/// Live or finished play of one daily puzzle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameSession {
    /// Submitted guesses in submission order.
    pub attempts: Attempts,

    /// Equals `attempts.len()` after every guess.
    pub attempt_count: u8,

    /// Monotonic: never cleared once set.
    pub movie_locked: bool,
    /// Monotonic: never cleared once set.
    pub character_locked: bool,

    pub is_over: bool,
    /// Only meaningful when `is_over`.
    pub is_win: bool,

    /// Set exactly once, when `is_over` flips to true.
    pub completed_at: Option<Timestamp>,

    /// Cosmetic one-shot flag (the win celebration already played).
    pub celebration_shown: bool,
}

impl GameSession {
    /// A fresh session: no attempts, no locks, not over.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.is_over, self.is_win) {
            (false, _) => SessionPhase::InProgress,
            (true, true) => SessionPhase::Won,
            (true, false) => SessionPhase::Lost,
        }
    }

    /// Guesses left before the session is lost.
    pub fn remaining_attempts(&self) -> u8 {
        if self.is_over {
            0
        } else {
            GameConfig::MAX_ATTEMPTS.saturating_sub(self.attempt_count)
        }
    }

    /// Whether nothing has been guessed yet.
    pub fn is_fresh(&self) -> bool {
        self.attempts.is_empty() && !self.is_over
    }
}
