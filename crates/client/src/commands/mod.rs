//! Subcommands and the options they share.

mod history;
mod play;
mod select;
mod stats;
mod streak;

pub use history::History;
pub use play::Play;
pub use select::Select;
pub use stats::Stats;
pub use streak::Streak;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use runtime::ledger::DATE_FORMAT;
use runtime::{Clock, CompletionLedger, RuntimeConfig, StoreBackend, SystemClock};

/// Options that override the `CUELINE_*` environment.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Also log to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Store backend: file or memory
    #[arg(long, global = true, value_name = "BACKEND")]
    pub store: Option<StoreBackend>,

    /// Directory holding the file store
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Key namespace for session records
    #[arg(long, global = true)]
    pub namespace: Option<String>,
}

impl GlobalArgs {
    pub fn runtime_config(&self) -> RuntimeConfig {
        let mut config = RuntimeConfig::from_env();
        if let Some(store) = self.store {
            config.store = store;
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if let Some(namespace) = &self.namespace {
            config.namespace = namespace.clone();
        }
        config
    }
}

/// Ledger over the configured store, on the system clock.
fn open_ledger(config: &RuntimeConfig) -> Result<CompletionLedger> {
    let store = config.open_store().context("Failed to open store")?;
    Ok(CompletionLedger::new(
        store,
        config.namespace.clone(),
        Arc::new(SystemClock),
    ))
}

/// `date` parsed as `YYYY-MM-DD`, or today's local date.
fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .with_context(|| format!("Invalid date '{raw}', expected YYYY-MM-DD")),
        None => Ok(SystemClock.today()),
    }
}
