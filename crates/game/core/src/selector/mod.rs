//! Deterministic choice of the daily target line.
//!
//! Every player of the same pack on the same calendar date must land on the
//! same excerpt without a server round trip, so the pack identifier and the
//! date string are the whole seed. Two strategies share the seed:
//!
//! - [`select_target_index`]: legacy full-script mode, one draw over the whole
//!   flattened corpus.
//! - [`select_balanced`]: one draw to pick a movie, a second draw to pick a line
//!   within it, so short scripts are not drowned out by long ones.

mod hash;
mod rng;

pub use hash::{daily_seed, hash_str};
pub use rng::Mulberry32;

use crate::config::GameConfig;
use crate::error::SelectionError;

/// Picks the target index for `pack_id` on `date` in a corpus of `corpus_len`
/// lines.
///
/// The result lies in `[1, corpus_len - 6)`, leaving room for the line before
/// and the follow-up lines after. A corpus too short for that margin yields 0.
pub fn select_target_index(pack_id: &str, date: &str, corpus_len: usize) -> usize {
    let min = GameConfig::MIN_TARGET_INDEX;
    let max = match corpus_len.checked_sub(GameConfig::TRAILING_MARGIN) {
        Some(max) if max >= min => max,
        _ => return 0,
    };

    let mut rng = Mulberry32::new(daily_seed(pack_id, date));
    rng::scale(rng.next_unit(), min, max)
}

/// Eligible lines for one movie, in corpus index space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovieCandidates<'a> {
    pub movie_id: &'a str,
    pub line_indices: &'a [usize],
}

impl<'a> MovieCandidates<'a> {
    pub const fn new(movie_id: &'a str, line_indices: &'a [usize]) -> Self {
        Self {
            movie_id,
            line_indices,
        }
    }
}

/// Outcome of a movie-balanced selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalancedPick {
    pub movie_id: String,
    /// Index into the flattened corpus.
    pub target_index: usize,
}

/// Picks a movie uniformly, then a line uniformly within that movie.
///
/// `candidates` must be in the pack's canonical movie order; movies without
/// eligible lines are skipped before the draw so they cannot shift the result.
pub fn select_balanced(
    pack_id: &str,
    date: &str,
    candidates: &[MovieCandidates<'_>],
) -> Result<BalancedPick, SelectionError> {
    let movies: Vec<&MovieCandidates<'_>> = candidates
        .iter()
        .filter(|movie| !movie.line_indices.is_empty())
        .collect();

    if movies.is_empty() {
        return Err(SelectionError::NoCandidates {
            pack_id: pack_id.to_owned(),
        });
    }

    let mut rng = Mulberry32::new(daily_seed(pack_id, date));
    let movie = movies[rng.next_index(movies.len())];
    let target_index = movie.line_indices[rng.next_index(movie.line_indices.len())];

    Ok(BalancedPick {
        movie_id: movie.movie_id.to_owned(),
        target_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_indices() {
        assert_eq!(select_target_index("pixar", "2024-06-15", 500), 32);
        assert_eq!(select_target_index("pixar", "2024-06-16", 500), 361);
        assert_eq!(select_target_index("disney", "2024-06-15", 500), 57);
        assert_eq!(select_target_index("classics", "2025-01-01", 1200), 982);
    }

    #[test]
    fn repeated_calls_agree() {
        let first = select_target_index("pixar", "2024-06-15", 500);
        for _ in 0..5 {
            assert_eq!(select_target_index("pixar", "2024-06-15", 500), first);
        }
    }

    #[test]
    fn short_corpora_degrade_to_zero() {
        assert_eq!(select_target_index("pixar", "2024-06-15", 0), 0);
        assert_eq!(select_target_index("pixar", "2024-06-15", 1), 0);
        assert_eq!(select_target_index("pixar", "2024-06-15", 6), 0);
    }

    #[test]
    fn smallest_usable_corpus_pins_index_one() {
        assert_eq!(select_target_index("pixar", "2024-06-15", 7), 1);
    }

    #[test]
    fn index_stays_inside_margin() {
        let len = 40;
        for day in 1..=28 {
            let date = format!("2024-02-{day:02}");
            let index = select_target_index("margin", &date, len);
            assert!((1..=len - 6).contains(&index), "{date}: {index}");
        }
    }

    #[test]
    fn balanced_golden_pick() {
        let toy_story = [3, 10, 17, 42];
        let up: [usize; 0] = [];
        let cars = [100, 101, 102];
        let wall_e = [200, 250];
        let candidates = [
            MovieCandidates::new("toy-story", &toy_story),
            MovieCandidates::new("up", &up),
            MovieCandidates::new("cars", &cars),
            MovieCandidates::new("wall-e", &wall_e),
        ];

        let pick = select_balanced("pixar", "2024-06-15", &candidates).unwrap();
        assert_eq!(pick.movie_id, "toy-story");
        assert_eq!(pick.target_index, 3);
    }

    #[test]
    fn balanced_rejects_packs_without_lines() {
        let empty: [usize; 0] = [];
        let candidates = [MovieCandidates::new("up", &empty)];
        let err = select_balanced("pixar", "2024-06-15", &candidates).unwrap_err();
        assert_eq!(
            err,
            SelectionError::NoCandidates {
                pack_id: "pixar".into()
            }
        );
        assert!(select_balanced("pixar", "2024-06-15", &[]).is_err());
    }
}
