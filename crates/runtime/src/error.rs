//! Unified error types surfaced by the runtime API.
//!
//! Store failures are usually swallowed by the session controller; the errors
//! here reach callers that ask for durable results directly (history, stats,
//! backend setup).

use thiserror::Error;

pub use crate::store::StoreError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("sync worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("invalid calendar date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
