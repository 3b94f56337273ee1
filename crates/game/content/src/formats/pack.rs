//! Pack definitions and the per-pack puzzle manifest.

use std::collections::BTreeMap;

use game_core::ResultTier;
use serde::{Deserialize, Serialize};

/// Messages keyed by lowercase tier name (`perfect`, `good`, ...).
pub type TierMessages = BTreeMap<String, String>;

/// Authoring-side pack definition (`packs/<pack>.json`).
///
/// `movies` is the canonical movie order used by balanced selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackDefinition {
    pub id: String,
    pub name: String,
    pub movies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_messages: Option<TierMessages>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Summary of a pack's published puzzles (`daily/<pack>/manifest.json`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackManifest {
    pub pack_id: String,
    pub pack_name: String,
    #[serde(default)]
    pub generated_at: Option<String>,
    pub date_range: DateRange,
    pub total_puzzles: u32,
    pub cycle_length: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_messages: Option<TierMessages>,
}

impl PackManifest {
    /// Message for `tier`, if the pack defines one.
    pub fn tier_message(&self, tier: ResultTier) -> Option<&str> {
        let key: &'static str = tier.into();
        self.tier_messages.as_ref()?.get(key).map(String::as_str)
    }

    /// Whether a puzzle was published for `date` (`YYYY-MM-DD`).
    ///
    /// ISO dates compare correctly as strings.
    pub fn covers(&self, date: &str) -> bool {
        self.date_range.start.as_str() <= date && date <= self.date_range.end.as_str()
    }
}
