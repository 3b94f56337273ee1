//! Deterministic rules for the daily dialogue puzzle.
//!
//! `game-core` owns the pieces every client must agree on: which line is
//! today's target, how a guess moves a session forward, and which clues are
//! visible at each step. It performs no I/O and reads no clock. All session
//! mutation flows through [`engine::GameEngine`]; persistence lives in the
//! runtime crate.
pub mod config;
pub mod engine;
pub mod error;
pub mod puzzle;
pub mod reveal;
pub mod selector;
pub mod state;
pub mod summary;

pub use config::GameConfig;
pub use engine::{GameEngine, GuessOutcome};
pub use error::{PuzzleError, SelectionError};
pub use puzzle::{ContextLines, DialogueLine, Guess, PuzzleTarget, ScriptLine};
pub use reveal::{RevealFlags, RevealState};
pub use selector::{
    BalancedPick, MovieCandidates, Mulberry32, daily_seed, hash_str, select_balanced,
    select_target_index,
};
pub use state::{AttemptRecord, Attempts, GameSession, SessionPhase, Timestamp};
pub use summary::{ResultTier, share_grid, share_row};
