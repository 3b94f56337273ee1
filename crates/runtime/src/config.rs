//! Runtime configuration and store backend selection.
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::store::{FileStore, InMemoryStore, PersistentStore};

/// Default key namespace for session records.
pub const DEFAULT_NAMESPACE: &str = "cueline";

/// File name of the on-device store inside the data directory.
pub const STORE_FILE_NAME: &str = "store.json";

/// Which local [`PersistentStore`] backs the ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreBackend {
    /// One JSON file under the data directory.
    #[default]
    File,
    /// Process memory only; nothing survives exit.
    Memory,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StoreBackend::File => "file",
            StoreBackend::Memory => "memory",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown store backend '{other}'")),
        }
    }
}

/// Runtime configuration shared by the ledger, stores, and controller.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub namespace: String,
    pub store: StoreBackend,
    /// Directory for the file store; `None` uses the platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Upper bound on one remote sync call.
    pub flush_timeout: Duration,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            store: StoreBackend::default(),
            data_dir: None,
            flush_timeout: Duration::from_millis(3000),
            event_buffer_size: 64,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CUELINE_NAMESPACE` - Key namespace (default: cueline)
    /// - `CUELINE_STORE` - `file` or `memory` (default: file)
    /// - `CUELINE_DATA_DIR` - Directory for the file store (default: platform-specific)
    /// - `CUELINE_FLUSH_TIMEOUT_MS` - Remote sync timeout (default: 3000)
    /// - `CUELINE_EVENT_BUFFER` - Session event channel capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(namespace) = env::var("CUELINE_NAMESPACE")
            && !namespace.trim().is_empty()
        {
            config.namespace = namespace.trim().to_owned();
        }

        if let Some(store) = read_env::<StoreBackend>("CUELINE_STORE") {
            config.store = store;
        }

        config.data_dir = env::var("CUELINE_DATA_DIR").ok().map(PathBuf::from);

        if let Some(millis) = read_env::<u64>("CUELINE_FLUSH_TIMEOUT_MS") {
            config.flush_timeout = Duration::from_millis(millis.max(1));
        }

        if let Some(capacity) = read_env::<usize>("CUELINE_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        config
    }

    /// Data directory in use: the configured one, or the platform default.
    ///
    /// Follows platform conventions:
    /// - macOS: `~/Library/Application Support/cueline`
    /// - Linux: `~/.local/share/cueline` (or `$XDG_DATA_HOME/cueline`)
    /// - Windows: `%APPDATA%\cueline`
    /// - Fallback: `./save_data`
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", "cueline")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("./save_data"))
        })
    }

    /// Open the configured local store backend.
    pub fn open_store(&self) -> Result<Arc<dyn PersistentStore>> {
        let store: Arc<dyn PersistentStore> = match self.store {
            StoreBackend::File => {
                let path = self.resolved_data_dir().join(STORE_FILE_NAME);
                Arc::new(FileStore::open(path)?)
            }
            StoreBackend::Memory => Arc::new(InMemoryStore::new()),
        };
        tracing::info!("Opened {} store", self.store);
        Ok(store)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok()?.parse().ok()
}
