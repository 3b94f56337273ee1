/// Game rules constants shared by the selector, engine, and reveal ladder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== session limits =====
    /// Guesses allowed before a session is lost.
    pub const MAX_ATTEMPTS: u8 = 5;

    // ===== puzzle shape =====
    /// Context lines shown after the target line.
    pub const MAX_CONTEXT_LINES: usize = 2;

    // ===== legacy full-script selection =====
    /// Lowest selectable index; index 0 is kept for the line before the target.
    pub const MIN_TARGET_INDEX: usize = 1;
    /// Lines reserved at the end of the corpus so follow-up lines always exist.
    pub const TRAILING_MARGIN: usize = 6;
}
