//! Parsed movie scripts and the flattened multi-script corpus.

use std::collections::{BTreeMap, HashSet};

use game_core::{
    MovieCandidates, PuzzleError, PuzzleTarget, ScriptLine, SelectionError, select_balanced,
    select_target_index,
};
use serde::{Deserialize, Serialize};

/// One script file (`scripts/<movieId>.json`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptFile {
    pub title: String,
    #[serde(default)]
    pub year: Option<u16>,
    pub lines: Vec<ScriptFileLine>,
    /// Speakers eligible as puzzle targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_speaking_cast: Option<Vec<String>>,
    /// Older name for `top_speaking_cast`, read only when the newer key is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_cast: Option<Vec<String>>,
}

impl ScriptFile {
    /// Eligible speakers, preferring `topSpeakingCast` over `topCast`.
    pub fn cast(&self) -> &[String] {
        self.top_speaking_cast
            .as_deref()
            .or(self.top_cast.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptFileLine {
    pub character: String,
    pub text: String,
}

/// Every line of a pack, flattened in ascending movie-id order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    lines: Vec<ScriptLine>,
    top_cast: BTreeMap<String, HashSet<String>>,
}

impl Corpus {
    /// Lines required before an eligible target.
    pub const LEADING_PADDING: usize = 1;
    /// Lines required after an eligible target.
    pub const TRAILING_PADDING: usize = 3;

    /// Flattens scripts keyed by movie id. Ordering is by movie id regardless
    /// of the iteration order of the input.
    pub fn from_scripts(scripts: impl IntoIterator<Item = (String, ScriptFile)>) -> Self {
        let sorted: BTreeMap<String, ScriptFile> = scripts.into_iter().collect();

        let mut corpus = Self::default();
        for (movie_id, script) in sorted {
            let cast: HashSet<String> = script.cast().iter().cloned().collect();
            corpus.lines.extend(script.lines.into_iter().map(|line| ScriptLine {
                movie: script.title.clone(),
                movie_id: movie_id.clone(),
                character: line.character,
                text: line.text,
            }));
            corpus
                .top_cast
                .insert(movie_id, cast);
        }
        corpus
    }

    pub fn lines(&self) -> &[ScriptLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Indices of lines spoken by a top-cast character with enough padding
    /// around them, grouped by movie id.
    pub fn eligible_indices(&self) -> BTreeMap<String, Vec<usize>> {
        let upper = self.lines.len().saturating_sub(Self::TRAILING_PADDING);
        let mut by_movie: BTreeMap<String, Vec<usize>> = BTreeMap::new();

        for (idx, line) in self.lines.iter().enumerate() {
            if idx < Self::LEADING_PADDING || idx >= upper {
                continue;
            }
            let significant = self
                .top_cast
                .get(&line.movie_id)
                .is_some_and(|cast| cast.contains(&line.character));
            if significant {
                by_movie.entry(line.movie_id.clone()).or_default().push(idx);
            }
        }
        by_movie
    }

    /// Legacy full-script puzzle: one draw over the whole corpus.
    pub fn legacy_target(&self, pack_id: &str, date: &str) -> Result<PuzzleTarget, PuzzleError> {
        let index = select_target_index(pack_id, date, self.lines.len());
        PuzzleTarget::from_corpus(&self.lines, index)
    }

    /// Movie-balanced puzzle over the eligible lines, drawing movies in
    /// `movie_order` (the pack definition's order).
    pub fn balanced_target(
        &self,
        pack_id: &str,
        date: &str,
        movie_order: &[String],
    ) -> Result<PuzzleTarget, BalancedTargetError> {
        let eligible = self.eligible_indices();
        let candidates: Vec<MovieCandidates<'_>> = movie_order
            .iter()
            .filter_map(|movie_id| {
                eligible
                    .get(movie_id)
                    .map(|indices| MovieCandidates::new(movie_id, indices))
            })
            .collect();

        let pick = select_balanced(pack_id, date, &candidates)?;
        Ok(PuzzleTarget::from_corpus(&self.lines, pick.target_index)?)
    }
}

/// Failure to cut a balanced puzzle out of a corpus.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BalancedTargetError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}
