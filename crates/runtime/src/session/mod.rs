//! Live session controller.
//!
//! [`GameController`] owns one [`GameSession`] for a (pack, date) pair. It
//! evaluates guesses against the puzzle target, hands them to
//! [`GameEngine`], and writes the whole session back through the
//! [`CompletionLedger`] after every accepted guess. Store failures are logged
//! and published but never interrupt play.

mod events;

pub use events::{SessionEvent, StartKind};

use chrono::NaiveDate;
use tokio::sync::broadcast;
use tracing::{info, warn};

use game_core::{
    AttemptRecord, GameEngine, GameSession, Guess, GuessOutcome, PuzzleTarget, ResultTier,
    RevealState,
};

use crate::error::{Result, RuntimeError};
use crate::ledger::{CompletionLedger, DATE_FORMAT};

pub struct GameController {
    pack_id: String,
    date: String,
    target: PuzzleTarget,
    session: GameSession,
    ledger: CompletionLedger,
    start_kind: StartKind,
    /// Bumped on every submitted guess so views can replay reveal animations.
    reveal_generation: u64,
    events: broadcast::Sender<SessionEvent>,
}

impl GameController {
    /// Restores the stored session for `pack_id` on `date`, or starts fresh.
    ///
    /// `date` must be a `YYYY-MM-DD` calendar date.
    pub fn start(
        ledger: CompletionLedger,
        pack_id: impl Into<String>,
        date: impl Into<String>,
        target: PuzzleTarget,
        event_buffer: usize,
    ) -> Result<Self> {
        let pack_id = pack_id.into();
        let date = date.into();
        NaiveDate::parse_from_str(&date, DATE_FORMAT)
            .map_err(|_| RuntimeError::InvalidDate(date.clone()))?;

        let (session, start_kind) = match ledger.load_session(&pack_id, &date) {
            Some(session) if session.is_over => (session, StartKind::Revisit),
            Some(session) => (session, StartKind::Resume),
            None => (GameSession::new(), StartKind::FirstStart),
        };

        info!(
            pack_id = %pack_id,
            date = %date,
            kind = ?start_kind,
            attempts = session.attempt_count,
            "session started"
        );

        let (events, _) = broadcast::channel(event_buffer.max(1));
        let controller = Self {
            pack_id,
            date,
            target,
            session,
            ledger,
            start_kind,
            reveal_generation: 0,
            events,
        };
        controller.publish(SessionEvent::Started {
            pack_id: controller.pack_id.clone(),
            date: controller.date.clone(),
            kind: start_kind,
        });
        Ok(controller)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Scores `guess` against the target and records it.
    pub fn submit(&mut self, guess: &Guess) -> GuessOutcome {
        let record = self.target.evaluate(
            guess,
            self.session.movie_locked,
            self.session.character_locked,
        );
        self.submit_guess(record.movie_correct, record.character_correct)
    }

    /// Records a pre-scored guess and persists the session.
    ///
    /// The guess is ignored once the session is over, but the session is still
    /// written back and `reveal_generation` still advances on every call.
    pub fn submit_guess(&mut self, movie_correct: bool, character_correct: bool) -> GuessOutcome {
        let record = AttemptRecord::new(movie_correct, character_correct);
        let now = self.ledger.clock().now_timestamp();
        let outcome = GameEngine::new(&mut self.session).submit_guess(record, now);

        self.reveal_generation += 1;
        self.persist();

        if !outcome.is_applied() {
            return outcome;
        }

        self.publish(SessionEvent::GuessRecorded {
            record,
            outcome,
            reveal_generation: self.reveal_generation,
        });

        if outcome.is_terminal() {
            info!(
                pack_id = %self.pack_id,
                date = %self.date,
                won = self.session.is_win,
                attempts = self.session.attempt_count,
                "session finished"
            );
            self.publish(SessionEvent::Finished {
                won: self.session.is_win,
                attempt_count: self.session.attempt_count,
            });
        }

        outcome
    }

    /// Records that the win celebration has played.
    ///
    /// Cosmetic only; gameplay fields are untouched.
    pub fn mark_celebration_shown(&mut self) {
        if self.session.celebration_shown {
            return;
        }
        self.session.celebration_shown = true;
        self.persist();
        self.publish(SessionEvent::CelebrationShown);
    }

    /// Clues visible right now.
    pub fn reveal(&self) -> RevealState {
        RevealState::for_session(&self.session, self.target.context_after.len())
    }

    pub fn result_tier(&self) -> Option<ResultTier> {
        ResultTier::for_session(&self.session)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn target(&self) -> &PuzzleTarget {
        &self.target
    }

    pub fn pack_id(&self) -> &str {
        &self.pack_id
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn start_kind(&self) -> StartKind {
        self.start_kind
    }

    pub fn reveal_generation(&self) -> u64 {
        self.reveal_generation
    }

    fn persist(&self) {
        if let Err(e) = self
            .ledger
            .save_session(&self.pack_id, &self.date, &self.session)
        {
            warn!(
                pack_id = %self.pack_id,
                date = %self.date,
                "progress not saved: {}",
                e
            );
            self.publish(SessionEvent::PersistFailed {
                reason: e.to_string(),
            });
        }
    }

    fn publish(&self, event: SessionEvent) {
        // No subscribers is fine; events are best-effort.
        let _ = self.events.send(event);
    }
}
