//! Key/value persistence with interchangeable backends.
//!
//! Every backend is synchronous from the caller's point of view. The
//! remote-backed variant only defers the network round trip; its cache is
//! updated before `set` returns.

mod error;
mod file;
mod memory;
mod remote;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use remote::{MemoryHost, RemoteCachedStore, RemoteHost, SyncCommand, SyncWorker};

/// String key/value store shared by the ledger and its callers.
///
/// Values are opaque strings (the ledger writes JSON text). Implementations
/// must be usable behind `Arc<dyn PersistentStore>`.
pub trait PersistentStore: Send + Sync {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Every key currently stored, in no particular order.
    fn keys(&self) -> Result<Vec<String>>;

    /// Remove every key.
    fn clear(&self) -> Result<()>;

    /// Check if a key exists.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}
