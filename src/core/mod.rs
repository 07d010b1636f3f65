//! Core domain types for Wordle
//!
//! This module contains the word type and the guess evaluator.
//! All types here are pure, testable, and free of I/O.

mod feedback;
mod word;

pub use feedback::{GuessStatus, LetterResult, LetterStatus, evaluate};
pub use word::{WORD_LENGTH, Word, WordError};
