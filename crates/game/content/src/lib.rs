//! Read-only puzzle content and loaders.
//!
//! This crate describes the files the puzzle generator publishes and loads
//! them into engine inputs:
//! - Daily puzzles (`daily/<pack>/<date>.json`)
//! - Pack manifests and tier messages (`daily/<pack>/manifest.json`)
//! - Pack definitions with canonical movie order (`packs/<pack>.json`)
//! - Parsed scripts, flattened into a selection corpus (`scripts/<movie>.json`)
//!
//! Content is input to a session and never appears in persisted state.

pub mod formats;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use formats::{
    BalancedTargetError, Corpus, DailyPuzzle, DateRange, PackDefinition, PackManifest, PuzzleBody,
    PuzzleMetadata, ScriptFile, ScriptFileLine, TargetLine, TierMessages,
};

#[cfg(feature = "loaders")]
pub use loaders::{
    ContentFactory, DailyPuzzleLoader, LoadResult, ManifestLoader, PackLoader, ScriptLoader,
};
