//! Error types raised by store implementations.

use thiserror::Error;

/// Errors surfaced by [`super::PersistentStore`] backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("store quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("remote sync channel closed")]
    SyncChannelClosed,

    #[error("remote host error: {0}")]
    Remote(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
