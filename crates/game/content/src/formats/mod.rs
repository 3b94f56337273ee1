//! On-disk JSON shapes for published puzzle content.
//!
//! Field names follow the camelCase keys the puzzle generator writes.

mod pack;
mod puzzle;
mod script;

pub use pack::{DateRange, PackDefinition, PackManifest, TierMessages};
pub use puzzle::{DailyPuzzle, PuzzleBody, PuzzleMetadata, TargetLine};
pub use script::{BalancedTargetError, Corpus, ScriptFile, ScriptFileLine};
