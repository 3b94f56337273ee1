//! Notifications published by the session controller.

use game_core::{AttemptRecord, GuessOutcome};

/// How a controller was initialised.
///
/// Logged and published for the UI; it never changes gameplay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartKind {
    /// No stored record for this pack and date.
    FirstStart,
    /// A stored record that is still in progress.
    Resume,
    /// A stored record that is already finished.
    Revisit,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    Started {
        pack_id: String,
        date: String,
        kind: StartKind,
    },
    GuessRecorded {
        record: AttemptRecord,
        outcome: GuessOutcome,
        reveal_generation: u64,
    },
    Finished {
        won: bool,
        attempt_count: u8,
    },
    /// The store rejected a write; play continues in memory.
    PersistFailed {
        reason: String,
    },
    CelebrationShown,
}
