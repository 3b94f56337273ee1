//! Remote-backed store: a hydrated local cache with fire-and-forget sync.
//!
//! [`RemoteCachedStore`] answers every read from memory. Writes update the
//! cache and then queue a [`SyncCommand`] for the [`SyncWorker`], which pushes
//! it to the [`RemoteHost`] under a timeout. Remote failures are logged by the
//! worker and never reach the writer.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::RuntimeError;
use crate::store::{InMemoryStore, PersistentStore, Result, StoreError};

/// Remote key/value host mirrored by [`RemoteCachedStore`].
#[async_trait]
pub trait RemoteHost: Send + Sync {
    /// Every key/value pair held remotely, used once to hydrate the cache.
    async fn snapshot(&self) -> Result<HashMap<String, String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    async fn clear(&self) -> Result<()>;
}

/// In-process [`RemoteHost`] for tests and offline development.
///
/// Latency and failure injection let callers check that a slow or broken host
/// never stalls local play.
#[derive(Debug, Default)]
pub struct MemoryHost {
    entries: RwLock<HashMap<String, String>>,
    latency: Option<Duration>,
    failing: bool,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        Self {
            entries: RwLock::new(entries),
            ..Self::default()
        }
    }

    /// Delay every call by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Reject every write.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Value currently held by the host.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    pub fn len(&self) -> Result<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    async fn delay(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl RemoteHost for MemoryHost {
    async fn snapshot(&self) -> Result<HashMap<String, String>> {
        self.delay().await;
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.clone())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.delay().await;
        if self.failing {
            return Err(StoreError::Remote(format!("write rejected for {key}")));
        }
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.delay().await;
        if self.failing {
            return Err(StoreError::Remote("clear rejected".into()));
        }
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        entries.clear();
        Ok(())
    }
}

/// Commands queued for the [`SyncWorker`].
#[derive(Debug)]
pub enum SyncCommand {
    /// Mirror one write.
    Set { key: String, value: String },

    /// Mirror a clear.
    Clear,

    /// Reply once every earlier command has been attempted.
    Flush { reply: oneshot::Sender<()> },

    /// Stop the worker after draining earlier commands.
    Shutdown,
}

/// Background task that forwards cache writes to the remote host.
pub struct SyncWorker {
    host: Arc<dyn RemoteHost>,
    command_rx: mpsc::UnboundedReceiver<SyncCommand>,
    flush_timeout: Duration,
}

impl SyncWorker {
    pub fn new(
        host: Arc<dyn RemoteHost>,
        command_rx: mpsc::UnboundedReceiver<SyncCommand>,
        flush_timeout: Duration,
    ) -> Self {
        Self {
            host,
            command_rx,
            flush_timeout,
        }
    }

    /// Main worker loop
    pub async fn run(mut self) {
        info!("SyncWorker started: flush_timeout={:?}", self.flush_timeout);

        while let Some(command) = self.command_rx.recv().await {
            match command {
                SyncCommand::Set { key, value } => {
                    let outcome =
                        tokio::time::timeout(self.flush_timeout, self.host.set(&key, &value))
                            .await;
                    match outcome {
                        Ok(Ok(())) => debug!("Synced {}", key),
                        Ok(Err(e)) => warn!("Remote write for {} failed: {}", key, e),
                        Err(_) => warn!("Remote write for {} timed out", key),
                    }
                }
                SyncCommand::Clear => {
                    match tokio::time::timeout(self.flush_timeout, self.host.clear()).await {
                        Ok(Ok(())) => debug!("Synced clear"),
                        Ok(Err(e)) => warn!("Remote clear failed: {}", e),
                        Err(_) => warn!("Remote clear timed out"),
                    }
                }
                SyncCommand::Flush { reply } => {
                    // Receiver may have given up waiting.
                    let _ = reply.send(());
                }
                SyncCommand::Shutdown => {
                    info!("Shutdown command received");
                    break;
                }
            }
        }

        info!("SyncWorker stopped");
    }
}

/// [`PersistentStore`] over a hydrated cache of a remote host.
pub struct RemoteCachedStore {
    cache: InMemoryStore,
    command_tx: mpsc::UnboundedSender<SyncCommand>,
}

impl RemoteCachedStore {
    /// Fetch the host snapshot, fill the cache, and spawn the sync worker.
    ///
    /// Must be called inside a Tokio runtime. The returned handle completes
    /// after [`Self::shutdown`] or once the store is dropped.
    pub async fn hydrate(
        host: Arc<dyn RemoteHost>,
        flush_timeout: Duration,
    ) -> Result<(Self, JoinHandle<()>)> {
        let snapshot = host.snapshot().await?;
        info!("Hydrated remote cache with {} keys", snapshot.len());

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let worker = SyncWorker::new(host, command_rx, flush_timeout);
        let handle = tokio::spawn(worker.run());

        Ok((
            Self {
                cache: InMemoryStore::with_entries(snapshot),
                command_tx,
            },
            handle,
        ))
    }

    /// Wait until every write queued so far has been attempted remotely.
    pub async fn flush(&self) -> Result<()> {
        let (reply, done) = oneshot::channel();
        self.command_tx
            .send(SyncCommand::Flush { reply })
            .map_err(|_| StoreError::SyncChannelClosed)?;
        done.await.map_err(|_| StoreError::SyncChannelClosed)
    }

    /// Ask the worker to stop after the commands already queued.
    pub fn shutdown(&self) -> Result<()> {
        self.command_tx
            .send(SyncCommand::Shutdown)
            .map_err(|_| StoreError::SyncChannelClosed)
    }

    /// Stop the worker and wait for it to drain.
    pub async fn close(&self, worker: JoinHandle<()>) -> crate::error::Result<()> {
        if self.shutdown().is_err() {
            debug!("Sync worker already stopped");
        }
        worker.await.map_err(RuntimeError::WorkerJoin)
    }

    fn forward(&self, command: SyncCommand) {
        if let Err(e) = self.command_tx.send(command) {
            warn!("Remote sync unavailable, keeping local copy only: {:?}", e.0);
        }
    }
}

impl PersistentStore for RemoteCachedStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.cache.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.cache.set(key, value)?;
        self.forward(SyncCommand::Set {
            key: key.to_owned(),
            value: value.to_owned(),
        });
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        self.cache.keys()
    }

    fn clear(&self) -> Result<()> {
        self.cache.clear()?;
        self.forward(SyncCommand::Clear);
        Ok(())
    }
}
