//! Per-process game statistics (not persisted)

use super::session::{GameState, Session};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// Winning guess count -> number of games won in that many guesses
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    /// Record a finished session
    ///
    /// Sessions still in progress are ignored.
    pub fn record(&mut self, session: &Session) {
        match session.state() {
            GameState::InProgress => {}
            GameState::Lost => self.games_played += 1,
            GameState::Won => {
                self.games_played += 1;
                self.games_won += 1;
                *self
                    .guess_distribution
                    .entry(session.guess_count())
                    .or_insert(0) += 1;
            }
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
