//! Puzzle targets and guess evaluation.
//!
//! A [`PuzzleTarget`] is produced upstream (a daily puzzle file or a legacy
//! corpus cut) and handed to the engine as read-only input.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::PuzzleError;
use crate::state::AttemptRecord;

/// A single spoken line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogueLine {
    pub character: String,
    pub text: String,
}

impl DialogueLine {
    pub fn new(character: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            text: text.into(),
        }
    }
}

/// Context lines that follow the target, capped at [`GameConfig::MAX_CONTEXT_LINES`].
pub type ContextLines = ArrayVec<DialogueLine, { GameConfig::MAX_CONTEXT_LINES }>;

/// The line the player has to attribute, plus the clues that follow it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PuzzleTarget {
    pub movie: String,
    pub character: String,
    pub text: String,
    pub context_after: ContextLines,
}

impl PuzzleTarget {
    /// Builds a target, keeping at most two context lines.
    pub fn new(
        movie: impl Into<String>,
        line: DialogueLine,
        context_after: impl IntoIterator<Item = DialogueLine>,
    ) -> Self {
        Self {
            movie: movie.into(),
            character: line.character,
            text: line.text,
            context_after: context_after
                .into_iter()
                .take(GameConfig::MAX_CONTEXT_LINES)
                .collect(),
        }
    }

    /// Cuts a target out of a flattened script corpus.
    ///
    /// Follow-up lines are taken in corpus order, whichever movie they belong
    /// to, and silently shortened at the end of the corpus.
    pub fn from_corpus(lines: &[ScriptLine], index: usize) -> Result<Self, PuzzleError> {
        if lines.is_empty() {
            return Err(PuzzleError::EmptyCorpus);
        }
        let target = lines.get(index).ok_or(PuzzleError::IndexOutOfRange {
            index,
            len: lines.len(),
        })?;

        let context = lines[index + 1..]
            .iter()
            .map(|line| DialogueLine::new(line.character.clone(), line.text.clone()));

        Ok(Self::new(
            target.movie.clone(),
            DialogueLine::new(target.character.clone(), target.text.clone()),
            context,
        ))
    }

    /// Scores a guess against this target.
    ///
    /// A dimension that is already locked stays correct: once the player has
    /// found the movie it is pinned in the UI and cannot be changed.
    pub fn evaluate(&self, guess: &Guess, movie_locked: bool, character_locked: bool) -> AttemptRecord {
        AttemptRecord {
            movie_correct: movie_locked || names_match(&guess.movie, &self.movie),
            character_correct: character_locked || names_match(&guess.character, &self.character),
        }
    }
}

/// One line of a flattened multi-script corpus.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScriptLine {
    /// Display title of the movie.
    pub movie: String,
    /// Stable identifier of the movie within the pack.
    pub movie_id: String,
    pub character: String,
    pub text: String,
}

/// A player's pick for both dimensions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Guess {
    pub movie: String,
    pub character: String,
}

impl Guess {
    pub fn new(movie: impl Into<String>, character: impl Into<String>) -> Self {
        Self {
            movie: movie.into(),
            character: character.into(),
        }
    }
}

/// Selector values come from fixed lists, but typed input and older saves
/// may differ in case or stray whitespace.
fn names_match(guess: &str, answer: &str) -> bool {
    let guess = guess.trim();
    !guess.is_empty() && guess.to_lowercase() == answer.trim().to_lowercase()
}
