//! Content factory for locating puzzle files.

use std::path::{Path, PathBuf};

use game_core::PuzzleTarget;

use crate::formats::{Corpus, DailyPuzzle, PackDefinition, PackManifest};
use crate::loaders::{DailyPuzzleLoader, LoadResult, ManifestLoader, PackLoader, ScriptLoader};

/// Content factory that loads puzzle content from a content directory.
///
/// # Directory Structure
///
/// ```text
/// content_dir/
/// ├── packs/
/// │   └── pixar.json
/// ├── scripts/
/// │   ├── toy-story.json
/// │   └── up.json
/// └── daily/
///     └── pixar/
///         ├── manifest.json
///         └── 2024-06-15.json
/// ```
pub struct ContentFactory {
    content_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    pub fn daily_path(&self, pack_id: &str, date: &str) -> PathBuf {
        self.content_dir
            .join("daily")
            .join(pack_id)
            .join(format!("{date}.json"))
    }

    pub fn manifest_path(&self, pack_id: &str) -> PathBuf {
        self.content_dir.join("daily").join(pack_id).join("manifest.json")
    }

    pub fn pack_path(&self, pack_id: &str) -> PathBuf {
        self.content_dir.join("packs").join(format!("{pack_id}.json"))
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.content_dir.join("scripts")
    }

    /// Load the published puzzle for `pack_id` on `date`.
    pub fn load_daily(&self, pack_id: &str, date: &str) -> LoadResult<DailyPuzzle> {
        DailyPuzzleLoader::load(&self.daily_path(pack_id, date), pack_id, date)
    }

    pub fn load_manifest(&self, pack_id: &str) -> LoadResult<PackManifest> {
        ManifestLoader::load(&self.manifest_path(pack_id))
    }

    pub fn load_pack(&self, pack_id: &str) -> LoadResult<PackDefinition> {
        PackLoader::load(&self.pack_path(pack_id))
    }

    /// Load and flatten every script of a pack.
    pub fn load_corpus(&self, pack: &PackDefinition) -> LoadResult<Corpus> {
        ScriptLoader::load_corpus(&self.scripts_dir(), &pack.movies)
    }

    /// Target for `date`: the published daily file when one exists, otherwise a
    /// movie-balanced pick over the pack's scripts.
    pub fn resolve_target(&self, pack_id: &str, date: &str) -> LoadResult<PuzzleTarget> {
        let daily = self.daily_path(pack_id, date);
        if daily.is_file() {
            return Ok(DailyPuzzleLoader::load(&daily, pack_id, date)?.into_target());
        }

        tracing::info!(pack_id, date, "no daily file, selecting from scripts");
        let pack = self.load_pack(pack_id)?;
        let corpus = self.load_corpus(&pack)?;
        Ok(corpus.balanced_target(pack_id, date, &pack.movies)?)
    }

    /// Returns the content directory path.
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }
}
