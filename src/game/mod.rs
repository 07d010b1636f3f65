//! Game session and derived player-facing state

mod keyboard;
mod session;
mod stats;

pub use keyboard::{KEYBOARD_ROWS, KeyboardPolicy, KeyboardState};
pub use session::{GameState, GuessRecord, Session, SubmitError};
pub use stats::Statistics;

/// Default number of attempts per game
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Settings shared by every session a frontend starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
    pub keyboard_policy: KeyboardPolicy,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_guesses: usize, keyboard_policy: KeyboardPolicy) -> Self {
        Self {
            max_guesses,
            keyboard_policy,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GUESSES, KeyboardPolicy::FirstSeen)
    }
}
