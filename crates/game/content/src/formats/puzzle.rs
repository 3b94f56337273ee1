//! Published daily puzzle files (`daily/<pack>/<date>.json`).

use std::collections::BTreeMap;

use game_core::{DialogueLine, PuzzleTarget};
use serde::{Deserialize, Serialize};

/// One pre-generated daily puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPuzzle {
    #[serde(default)]
    pub version: Option<u32>,
    pub pack_id: String,
    pub date: String,
    pub puzzle: PuzzleBody,
    #[serde(default)]
    pub metadata: PuzzleMetadata,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleBody {
    pub target_line: TargetLine,
    #[serde(default)]
    pub context_before: Option<DialogueLine>,
    #[serde(default)]
    pub context_after: Vec<DialogueLine>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetLine {
    pub character: String,
    pub text: String,
    pub movie: String,
}

/// Answer lists offered to the player.
///
/// Keys of the per-movie maps are movie identifiers as listed in `movies`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleMetadata {
    #[serde(default)]
    pub movies: Vec<String>,
    #[serde(default)]
    pub characters_by_movie: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub movie_years: BTreeMap<String, u16>,
    #[serde(default)]
    pub movie_titles: BTreeMap<String, String>,
}

impl PuzzleMetadata {
    /// Display title for a movie id, falling back to the id itself.
    pub fn title_of<'a>(&'a self, movie_id: &'a str) -> &'a str {
        self.movie_titles
            .get(movie_id)
            .map(String::as_str)
            .unwrap_or(movie_id)
    }

    /// Candidate speakers for a movie id; empty when the movie is unknown.
    pub fn characters_of(&self, movie_id: &str) -> &[String] {
        self.characters_by_movie
            .get(movie_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl DailyPuzzle {
    /// Engine-facing target; follow-up lines beyond the first two are dropped.
    pub fn to_target(&self) -> PuzzleTarget {
        let line = &self.puzzle.target_line;
        PuzzleTarget::new(
            line.movie.clone(),
            DialogueLine::new(line.character.clone(), line.text.clone()),
            self.puzzle.context_after.iter().cloned(),
        )
    }

    pub fn into_target(self) -> PuzzleTarget {
        let PuzzleBody {
            target_line,
            context_after,
            ..
        } = self.puzzle;
        PuzzleTarget::new(
            target_line.movie,
            DialogueLine::new(target_line.character, target_line.text),
            context_after,
        )
    }
}
