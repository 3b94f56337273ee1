//! Script corpus loader.

use std::path::Path;

use crate::formats::{Corpus, ScriptFile};
use crate::loaders::{LoadResult, read_json};

/// Loader for `scripts/<movieId>.json`.
pub struct ScriptLoader;

impl ScriptLoader {
    pub fn load(path: &Path) -> LoadResult<ScriptFile> {
        read_json(path)
    }

    /// Loads every listed movie from `scripts_dir` and flattens them.
    ///
    /// A missing script fails the whole load; a corpus with holes would shift
    /// every index after it.
    pub fn load_corpus(scripts_dir: &Path, movie_ids: &[String]) -> LoadResult<Corpus> {
        let mut scripts = Vec::with_capacity(movie_ids.len());
        for movie_id in movie_ids {
            let path = scripts_dir.join(format!("{movie_id}.json"));
            scripts.push((movie_id.clone(), Self::load(&path)?));
        }

        let corpus = Corpus::from_scripts(scripts);
        tracing::debug!(movies = movie_ids.len(), lines = corpus.len(), "loaded corpus");
        Ok(corpus)
    }
}
