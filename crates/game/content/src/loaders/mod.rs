//! Content loaders for reading puzzle data from files.
//!
//! Each loader reads one JSON file into the shapes defined in
//! [`crate::formats`]. [`ContentFactory`] resolves paths inside a content
//! directory.

pub mod daily;
pub mod factory;
pub mod pack;
pub mod script;

pub use daily::DailyPuzzleLoader;
pub use factory::ContentFactory;
pub use pack::{ManifestLoader, PackLoader};
pub use script::ScriptLoader;

use std::path::Path;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads and parses a JSON file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let content = read_file(path)?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse JSON {}: {}", path.display(), e))
}
