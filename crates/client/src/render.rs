//! Plain-text views of the puzzle, the result, and ledger stats.

use std::fmt::Write;

use game_content::PuzzleMetadata;
use game_core::{GameConfig, GameSession, PuzzleTarget, ResultTier, RevealState, share_grid};
use runtime::LedgerStats;

const HIDDEN_SPEAKER: &str = "???";
const HIDDEN_TEXT: &str = "...";

/// The target line followed by whatever context the reveal allows.
pub fn puzzle(target: &PuzzleTarget, reveal: &RevealState) -> String {
    let speaker = if reveal.target_speaker_revealed() {
        target.character.as_str()
    } else {
        HIDDEN_SPEAKER
    };

    let mut out = format!("  {speaker}: \"{}\"\n", target.text);
    for (i, line) in target.context_after.iter().enumerate() {
        let k = i + 1;
        let speaker = if reveal.context_speaker_revealed(k) {
            line.character.as_str()
        } else {
            HIDDEN_SPEAKER
        };
        let text = if reveal.context_text_revealed(k) {
            line.text.as_str()
        } else {
            HIDDEN_TEXT
        };
        let _ = writeln!(out, "  {speaker}: {text}");
    }
    out
}

/// Comma-separated movie titles offered by the daily file, if any.
pub fn movie_choices(metadata: &PuzzleMetadata) -> Option<String> {
    let titles: Vec<&str> = metadata
        .movies
        .iter()
        .map(|id| metadata.title_of(id))
        .collect();
    (!titles.is_empty()).then(|| titles.join(", "))
}

/// Speakers offered for the movie titled `title` (case-insensitive).
pub fn character_choices(metadata: &PuzzleMetadata, title: &str) -> Option<String> {
    let title = title.trim();
    let movie_id = metadata
        .movies
        .iter()
        .find(|id| metadata.title_of(id).eq_ignore_ascii_case(title))?;
    let characters = metadata.characters_of(movie_id);
    (!characters.is_empty()).then(|| characters.join(", "))
}

/// Final answer, tier, and the share grid of a finished session.
pub fn summary(
    target: &PuzzleTarget,
    session: &GameSession,
    tier: ResultTier,
    tier_message: Option<&str>,
) -> String {
    let mut out = String::new();
    if session.is_win {
        let _ = writeln!(
            out,
            "Solved in {}/{}!",
            session.attempt_count,
            GameConfig::MAX_ATTEMPTS
        );
    } else {
        let _ = writeln!(out, "Out of guesses.");
    }
    let _ = writeln!(out, "It was {} in {}.", target.character, target.movie);
    match tier_message {
        Some(message) => {
            let _ = writeln!(out, "[{tier}] {message}");
        }
        None => {
            let _ = writeln!(out, "[{tier}]");
        }
    }
    let _ = writeln!(out, "\n{}", share_grid(session));
    out
}

pub fn stats(stats: &LedgerStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Played          {}", stats.played);
    let _ = writeln!(out, "Win rate        {:.0}%", stats.win_rate * 100.0);
    let _ = writeln!(out, "Current streak  {}", stats.current_streak);
    let _ = writeln!(out, "Max streak      {}", stats.max_streak);
    let _ = writeln!(out, "Guess distribution");

    let widest = stats.distribution.iter().copied().max().unwrap_or(0).max(1);
    for (i, count) in stats.distribution.iter().enumerate() {
        let bar = "#".repeat((*count as usize * 20).div_ceil(widest as usize));
        let _ = writeln!(out, "  {} {bar} {count}", i + 1);
    }
    out
}
