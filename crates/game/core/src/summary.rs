//! End-of-game summary: result tier and the shareable attempt grid.

use crate::state::{AttemptRecord, GameSession};

/// Coarse grade of a finished session, keyed into a pack's tier messages.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum ResultTier {
    Perfect,
    Good,
    Average,
    Barely,
    Failure,
}

impl ResultTier {
    /// Tier for a finished session; `None` while the session is in progress.
    pub fn for_session(session: &GameSession) -> Option<Self> {
        if !session.is_over {
            return None;
        }
        if !session.is_win {
            return Some(Self::Failure);
        }
        Some(match session.attempt_count {
            0 | 1 => Self::Perfect,
            2 => Self::Good,
            3 => Self::Average,
            _ => Self::Barely,
        })
    }
}

const HIT: char = '🟩';
const MISS: char = '🟥';

fn mark(correct: bool) -> char {
    if correct { HIT } else { MISS }
}

/// One row per guess: movie mark followed by character mark.
pub fn share_row(record: &AttemptRecord) -> String {
    [mark(record.movie_correct), mark(record.character_correct)]
        .iter()
        .collect()
}

/// Newline-separated grid of every recorded guess.
pub fn share_grid(session: &GameSession) -> String {
    session
        .attempts
        .iter()
        .map(share_row)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameEngine;
    use crate::state::Timestamp;

    fn finished(records: &[AttemptRecord]) -> GameSession {
        let mut session = GameSession::new();
        let mut engine = GameEngine::new(&mut session);
        for record in records {
            engine.submit_guess(*record, Timestamp(0));
        }
        session
    }

    #[test]
    fn tiers_follow_winning_attempt() {
        let miss = AttemptRecord::new(false, false);
        let full = AttemptRecord::new(true, true);
        let expected = [
            ResultTier::Perfect,
            ResultTier::Good,
            ResultTier::Average,
            ResultTier::Barely,
            ResultTier::Barely,
        ];
        for (misses, tier) in expected.iter().enumerate() {
            let mut records = vec![miss; misses];
            records.push(full);
            assert_eq!(ResultTier::for_session(&finished(&records)), Some(*tier));
        }

        assert_eq!(
            ResultTier::for_session(&finished(&[miss; 5])),
            Some(ResultTier::Failure)
        );
        assert_eq!(ResultTier::for_session(&finished(&[miss])), None);
    }

    #[test]
    fn grid_has_one_row_per_guess() {
        let session = finished(&[
            AttemptRecord::new(true, false),
            AttemptRecord::new(true, true),
        ]);
        assert_eq!(share_grid(&session), "🟩🟥\n🟩🟩");
        assert_eq!(share_grid(&GameSession::new()), "");
    }

    #[test]
    fn tier_names_match_manifest_keys() {
        assert_eq!(ResultTier::Perfect.to_string(), "perfect");
        let key: &'static str = ResultTier::Failure.into();
        assert_eq!(key, "failure");
    }
}
