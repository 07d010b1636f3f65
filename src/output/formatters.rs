//! Formatting utilities for terminal output

use crate::core::{GuessStatus, LetterStatus};
use crate::game::{KEYBOARD_ROWS, KeyboardState};
use colored::{ColoredString, Colorize};

/// Render one letter as a coloured tile like " A "
#[must_use]
pub fn letter_tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => tile.white().on_green().bold(),
        Some(LetterStatus::Misplaced) => tile.black().on_yellow().bold(),
        Some(LetterStatus::Incorrect) => tile.white().on_bright_black().bold(),
        None => tile.black().on_white(),
    }
}

/// Render a whole guess as a row of coloured tiles
#[must_use]
pub fn guess_row(status: &GuessStatus) -> String {
    status
        .iter()
        .map(|r| letter_tile(r.letter, Some(r.status)).to_string())
        .collect()
}

/// Render the on-screen keyboard, one string per QWERTY row
///
/// Rows are indented to mimic a staggered keyboard.
#[must_use]
pub fn keyboard_rows(state: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .chars()
                .map(|c| letter_tile(c, state.status(c)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}

/// Plain-text marker for a status, for terminals without colour
#[must_use]
pub const fn status_marker(status: LetterStatus) -> char {
    match status {
        LetterStatus::Correct => 'G',
        LetterStatus::Misplaced => 'Y',
        LetterStatus::Incorrect => '-',
    }
}

/// Plain-text feedback string like "YYG--"
#[must_use]
pub fn status_markers(status: &GuessStatus) -> String {
    status.iter().map(|r| status_marker(r.status)).collect()
}
