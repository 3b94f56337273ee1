//! Daily puzzle loader.

use std::path::Path;

use crate::formats::DailyPuzzle;
use crate::loaders::{LoadResult, read_json};

/// Loader for `daily/<pack>/<date>.json`.
pub struct DailyPuzzleLoader;

impl DailyPuzzleLoader {
    /// Load a daily puzzle and check it belongs to the requested pack and date.
    pub fn load(path: &Path, pack_id: &str, date: &str) -> LoadResult<DailyPuzzle> {
        let puzzle: DailyPuzzle = read_json(path)?;

        anyhow::ensure!(
            puzzle.pack_id == pack_id && puzzle.date == date,
            "puzzle file {} is for {}/{}, expected {}/{}",
            path.display(),
            puzzle.pack_id,
            puzzle.date,
            pack_id,
            date
        );
        if puzzle.puzzle.context_after.len() > game_core::GameConfig::MAX_CONTEXT_LINES {
            tracing::debug!(
                pack_id,
                date,
                lines = puzzle.puzzle.context_after.len(),
                "truncating follow-up lines"
            );
        }

        Ok(puzzle)
    }
}
