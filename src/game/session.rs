//! Game session state machine
//!
//! A session owns the answer and the chronological guess log. Outcome flags
//! and the keyboard are derived from the log on demand, so there is a single
//! piece of mutable state and one transition (`submit_guess`).

use super::GameConfig;
use super::keyboard::KeyboardState;
use crate::core::{GuessStatus, Word, WordError, evaluate};
use crate::wordlists::pick_answer;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Check if the state is terminal
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub status: GuessStatus,
}

/// Why a submission was rejected
///
/// A rejected submission never changes the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("The game is already over")]
    GameAlreadyOver,
    #[error("Invalid guess: {0}")]
    InvalidFormat(#[from] WordError),
    #[error("You already guessed {guess}!")]
    DuplicateGuess { guess: Word },
}

/// A single play-through against one hidden answer
#[derive(Debug, Clone)]
pub struct Session {
    answer: Word,
    config: GameConfig,
    guesses: Vec<GuessRecord>,
}

impl Session {
    /// Start a session with a known answer
    ///
    /// A `max_guesses` of zero is treated as one.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameConfig, GameState, Session};
    ///
    /// let mut session = Session::new(Word::new("allow").unwrap(), GameConfig::default());
    /// assert_eq!(session.submit_guess("lolly"), Ok(GameState::InProgress));
    /// assert_eq!(session.submit_guess("allow"), Ok(GameState::Won));
    /// ```
    #[must_use]
    pub fn new(answer: Word, config: GameConfig) -> Self {
        let config = GameConfig {
            max_guesses: config.max_guesses.max(1),
            ..config
        };
        debug!(answer = %answer, max_guesses = config.max_guesses, "session started");

        Self {
            answer,
            config,
            guesses: Vec::with_capacity(config.max_guesses),
        }
    }

    /// Start a session with an answer drawn uniformly from `words`
    ///
    /// Returns `None` if the word list is empty.
    pub fn random<R: Rng + ?Sized>(
        words: &[Word],
        rng: &mut R,
        config: GameConfig,
    ) -> Option<Self> {
        pick_answer(words, rng).map(|answer| Self::new(answer.clone(), config))
    }

    /// Submit a raw guess
    ///
    /// The input is trimmed and uppercased before validation. On success the
    /// guess is evaluated, appended to the log, and the new state returned.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the session untouched, if:
    /// - The game is already won or lost (`GameAlreadyOver`)
    /// - The input is not exactly 5 letters A-Z (`InvalidFormat`)
    /// - The same word was guessed earlier in this session (`DuplicateGuess`)
    pub fn submit_guess(&mut self, raw: &str) -> Result<GameState, SubmitError> {
        if self.is_over() {
            debug!(input = raw, "guess rejected: game over");
            return Err(SubmitError::GameAlreadyOver);
        }

        let guess = Word::new(raw).inspect_err(|e| {
            debug!(input = raw, error = %e, "guess rejected: invalid format");
        })?;

        if self.guesses.iter().any(|record| record.guess == guess) {
            debug!(guess = %guess, "guess rejected: duplicate");
            return Err(SubmitError::DuplicateGuess { guess });
        }

        let status = evaluate(&guess, &self.answer);
        debug!(guess = %guess, feedback = %status.to_emoji(), "guess accepted");
        self.guesses.push(GuessRecord { guess, status });

        let state = self.state();
        match state {
            GameState::Won => info!(guesses = self.guesses.len(), "game won"),
            GameState::Lost => info!(answer = %self.answer, "game lost"),
            GameState::InProgress => {}
        }
        Ok(state)
    }

    /// Current state, derived from the guess log
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.has_won() {
            GameState::Won
        } else if self.guesses.len() >= self.config.max_guesses {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }

    /// Check if the latest guess solved the puzzle
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.latest().is_some_and(|record| record.status.is_solved())
    }

    /// Check if no further guesses are accepted
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state().is_over()
    }

    /// Accepted guesses in chronological order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Most recent accepted guess
    #[must_use]
    pub fn latest(&self) -> Option<&GuessRecord> {
        self.guesses.last()
    }

    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.config.max_guesses
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.guesses.len())
    }

    /// The answer, revealed only once the game is over
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        self.is_over().then_some(&self.answer)
    }

    /// Letter statuses across all guesses, using the configured policy
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::from_guesses(&self.guesses, self.config.keyboard_policy)
    }
}
