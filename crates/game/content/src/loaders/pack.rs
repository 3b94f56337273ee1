//! Pack definition and manifest loaders.

use std::path::Path;

use crate::formats::{PackDefinition, PackManifest};
use crate::loaders::{LoadResult, read_json};

/// Loader for `daily/<pack>/manifest.json`.
pub struct ManifestLoader;

impl ManifestLoader {
    pub fn load(path: &Path) -> LoadResult<PackManifest> {
        read_json(path)
    }
}

/// Loader for `packs/<pack>.json`.
pub struct PackLoader;

impl PackLoader {
    pub fn load(path: &Path) -> LoadResult<PackDefinition> {
        let pack: PackDefinition = read_json(path)?;
        anyhow::ensure!(
            !pack.movies.is_empty(),
            "pack {} lists no movies",
            pack.id
        );
        Ok(pack)
    }
}
