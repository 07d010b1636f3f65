//! Wordle Game
//!
//! A terminal Wordle clone: guess a hidden five-letter word in a limited
//! number of attempts, with exact duplicate-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameConfig, GameState, Session, SubmitError};
//!
//! let mut session = Session::new(Word::new("beach").unwrap(), GameConfig::default());
//!
//! assert_eq!(session.submit_guess("crane"), Ok(GameState::InProgress));
//! assert!(matches!(
//!     session.submit_guess("CRANE"),
//!     Err(SubmitError::DuplicateGuess { .. })
//! ));
//!
//! let feedback = session.latest().unwrap().status.to_emoji();
//! assert_eq!(feedback, "🟨⬜🟩⬜🟨");
//! ```

// Core domain types
pub mod core;

// Session state machine and derived state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod logging;
