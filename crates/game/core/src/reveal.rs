//! Progressive clue reveal.
//!
//! Reveal state is a pure function of `attempt_count` and `is_over`. It is
//! recomputed on every query and never stored, so loading a finished session
//! shows the full ladder immediately.

use bitflags::bitflags;

use crate::config::GameConfig;
use crate::state::GameSession;

bitflags! {
    /// Fields of the puzzle currently visible to the player.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RevealFlags: u8 {
        const CONTEXT_1_TEXT    = 1 << 0;
        const CONTEXT_1_SPEAKER = 1 << 1;
        const CONTEXT_2_TEXT    = 1 << 2;
        const CONTEXT_2_SPEAKER = 1 << 3;
        const TARGET_SPEAKER    = 1 << 4;
    }
}

impl RevealFlags {
    /// Text flag for 1-based context line `k`.
    pub const fn context_text(k: usize) -> Self {
        match k {
            1 => Self::CONTEXT_1_TEXT,
            2 => Self::CONTEXT_2_TEXT,
            _ => Self::empty(),
        }
    }

    /// Speaker flag for 1-based context line `k`.
    pub const fn context_speaker(k: usize) -> Self {
        match k {
            1 => Self::CONTEXT_1_SPEAKER,
            2 => Self::CONTEXT_2_SPEAKER,
            _ => Self::empty(),
        }
    }
}

/// Snapshot of what the player may see.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealState {
    flags: RevealFlags,
    context_len: usize,
}

impl RevealState {
    /// Context line `k` (1-based) shows its text at `attempt_count >= 2k - 1`
    /// and its speaker at `attempt_count >= 2k`. The target speaker appears only
    /// once the game is over, and a finished game reveals everything.
    pub fn compute(attempt_count: u8, is_over: bool, context_len: usize) -> Self {
        let context_len = context_len.min(GameConfig::MAX_CONTEXT_LINES);
        let attempts = usize::from(attempt_count);

        let mut flags = RevealFlags::empty();
        for k in 1..=context_len {
            if is_over || attempts >= 2 * k - 1 {
                flags |= RevealFlags::context_text(k);
            }
            if is_over || attempts >= 2 * k {
                flags |= RevealFlags::context_speaker(k);
            }
        }
        if is_over {
            flags |= RevealFlags::TARGET_SPEAKER;
        }

        Self { flags, context_len }
    }

    pub fn for_session(session: &GameSession, context_len: usize) -> Self {
        Self::compute(session.attempt_count, session.is_over, context_len)
    }

    pub fn flags(&self) -> RevealFlags {
        self.flags
    }

    pub fn context_text_revealed(&self, k: usize) -> bool {
        k >= 1 && k <= self.context_len && self.flags.contains(RevealFlags::context_text(k))
    }

    pub fn context_speaker_revealed(&self, k: usize) -> bool {
        k >= 1 && k <= self.context_len && self.flags.contains(RevealFlags::context_speaker(k))
    }

    pub fn target_speaker_revealed(&self) -> bool {
        self.flags.contains(RevealFlags::TARGET_SPEAKER)
    }

    /// Context lines with at least their text visible.
    pub fn visible_context_lines(&self) -> usize {
        (1..=self.context_len)
            .take_while(|&k| self.context_text_revealed(k))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_follows_attempt_count() {
        let fresh = RevealState::compute(0, false, 2);
        assert_eq!(fresh.flags(), RevealFlags::empty());

        let one = RevealState::compute(1, false, 2);
        assert!(one.context_text_revealed(1));
        assert!(!one.context_speaker_revealed(1));

        let two = RevealState::compute(2, false, 2);
        assert!(two.context_speaker_revealed(1));
        assert!(!two.context_text_revealed(2));

        let three = RevealState::compute(3, false, 2);
        assert!(three.context_text_revealed(2));
        assert!(!three.context_speaker_revealed(2));

        let four = RevealState::compute(4, false, 2);
        assert!(four.context_speaker_revealed(2));
        assert!(!four.target_speaker_revealed());
    }

    #[test]
    fn reveal_only_grows_while_in_progress() {
        for context_len in 0..=GameConfig::MAX_CONTEXT_LINES {
            let mut previous = RevealFlags::empty();
            for attempts in 0..=GameConfig::MAX_ATTEMPTS {
                let flags = RevealState::compute(attempts, false, context_len).flags();
                assert!(flags.contains(previous), "{attempts} attempts, {context_len} lines");
                assert!(!flags.contains(RevealFlags::TARGET_SPEAKER));
                previous = flags;
            }
        }
    }

    #[test]
    fn finished_game_reveals_everything() {
        let state = RevealState::compute(1, true, 2);
        assert_eq!(state.flags(), RevealFlags::all());
        assert_eq!(state.visible_context_lines(), 2);
    }

    #[test]
    fn missing_context_lines_are_never_revealed() {
        let state = RevealState::compute(4, false, 1);
        assert!(state.context_speaker_revealed(1));
        assert!(!state.context_text_revealed(2));
        assert_eq!(state.visible_context_lines(), 1);

        let over = RevealState::compute(5, true, 0);
        assert_eq!(over.flags(), RevealFlags::TARGET_SPEAKER);
    }

    #[test]
    fn for_session_reads_counter_and_outcome() {
        let mut session = GameSession::new();
        session.attempt_count = 2;
        let state = RevealState::for_session(&session, 2);
        assert!(state.context_speaker_revealed(1));
        session.is_over = true;
        assert!(RevealState::for_session(&session, 2).target_speaker_revealed());
    }
}
