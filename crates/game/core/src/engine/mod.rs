//! Guess submission pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameSession`]. It
//! applies one guess at a time and reports what changed; persistence and
//! notifications are left to the runtime.

use crate::config::GameConfig;
use crate::state::{AttemptRecord, GameSession, Timestamp};

/// Result of feeding one guess to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The session was already over; nothing changed.
    Ignored,
    /// Recorded; the session is still in progress.
    Continue { attempt_count: u8 },
    /// Both dimensions correct on this guess.
    Won { attempt_count: u8 },
    /// The final allowed guess missed.
    Lost { attempt_count: u8 },
}

impl GuessOutcome {
    /// Whether the guess mutated the session.
    pub const fn is_applied(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// Whether this guess ended the session.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }
}

/// Applies guesses to a borrowed session.
pub struct GameEngine<'a> {
    session: &'a mut GameSession,
}

impl<'a> GameEngine<'a> {
    pub fn new(session: &'a mut GameSession) -> Self {
        Self { session }
    }

    /// Records a guess taken at `now`.
    ///
    /// Guesses on a finished session are ignored so a stale UI can resubmit
    /// without effect. Locks only ever turn on. A fully correct guess ends the
    /// game immediately with `attempt_count` pinned to the number of guesses;
    /// otherwise the counter advances and the game is lost at the limit.
    pub fn submit_guess(&mut self, record: AttemptRecord, now: Timestamp) -> GuessOutcome {
        let session = &mut *self.session;
        if session.is_over {
            return GuessOutcome::Ignored;
        }
        // A full history on an open session can only come from a damaged
        // restore; the limit has been reached, so the game is lost.
        if session.attempts.try_push(record).is_err() {
            session.attempt_count = GameConfig::MAX_ATTEMPTS;
            session.is_win = false;
            Self::finish(session, now);
            return GuessOutcome::Lost {
                attempt_count: session.attempt_count,
            };
        }

        session.movie_locked |= record.movie_correct;
        session.character_locked |= record.character_correct;

        if record.is_full() {
            session.attempt_count = session.attempts.len() as u8;
            session.is_win = true;
            Self::finish(session, now);
            return GuessOutcome::Won {
                attempt_count: session.attempt_count,
            };
        }

        session.attempt_count = session
            .attempt_count
            .saturating_add(1)
            .min(GameConfig::MAX_ATTEMPTS);
        if session.attempt_count >= GameConfig::MAX_ATTEMPTS {
            session.is_win = false;
            Self::finish(session, now);
            return GuessOutcome::Lost {
                attempt_count: session.attempt_count,
            };
        }

        GuessOutcome::Continue {
            attempt_count: session.attempt_count,
        }
    }

    fn finish(session: &mut GameSession, now: Timestamp) {
        session.is_over = true;
        if session.completed_at.is_none() {
            session.completed_at = Some(now);
        }
    }
}
