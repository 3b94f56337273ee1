//! Runtime services around the pure puzzle engine.
//!
//! This crate adds everything game-core leaves out: durable storage, the
//! completion ledger, streaks, wall-clock time, and the live session
//! controller clients drive.
//!
//! Modules are organized by responsibility:
//! - [`store`] provides the key/value backends (file, memory, remote cache)
//! - [`ledger`] reads and writes versioned session records
//! - [`streak`] derives daily streaks from completed sessions
//! - [`session`] hosts the controller and its event stream
//! - [`config`] and [`clock`] are the injectable environment
pub mod clock;
pub mod config;
pub mod error;
pub mod ledger;
pub mod session;
pub mod store;
pub mod streak;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DEFAULT_NAMESPACE, RuntimeConfig, StoreBackend};
pub use error::{Result, RuntimeError};
pub use ledger::{CompletedSession, CompletionLedger, LedgerStats, SessionRecord};
pub use session::{GameController, SessionEvent, StartKind};
pub use store::{
    FileStore, InMemoryStore, MemoryHost, PersistentStore, RemoteCachedStore, RemoteHost,
    StoreError, SyncCommand, SyncWorker,
};
pub use streak::{compute_streak, compute_streak_in, longest_streak};
