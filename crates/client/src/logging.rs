//! Tracing setup for the binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log to a per-run file, and to stderr as well when `verbose` is set.
///
/// `RUST_LOG` overrides the default `info` level.
pub fn setup_logging(verbose: bool) -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_name = format!("run_{}.log", chrono::Local::now().format("%Y%m%d_%H%M%S"));
    let file_appender = tracing_appender::rolling::never(&log_dir, &file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(env_filter());

    let stderr_layer = verbose.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(env_filter())
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .init();

    // Keep the file writer alive for the whole process.
    std::mem::forget(guard);

    tracing::info!("Log file: {}", log_dir.join(&file_name).display());
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
}

/// Platform cache directory, e.g. `~/.cache/cueline/logs` on Linux.
fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "cueline")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/cueline"))
        .join("logs")
}
