//! Error types raised by the pure rules layer.
//!
//! Most of game-core is total: the legacy selector clamps, and guesses on a
//! finished session are ignored rather than rejected. The errors here cover
//! the few inputs that cannot be degraded into a sensible answer.

/// Errors surfaced while choosing a target line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// No movie in the pack has an eligible line.
    #[error("no eligible lines in pack '{pack_id}'")]
    NoCandidates { pack_id: String },
}

/// Errors surfaced while cutting a puzzle out of a script corpus.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("target index {index} is out of range for a corpus of {len} lines")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("corpus is empty")]
    EmptyCorpus,
}
