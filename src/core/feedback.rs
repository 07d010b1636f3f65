//! Guess evaluation and per-letter feedback
//!
//! Each guessed letter receives one of three statuses:
//! - Correct: letter is in the answer at this position
//! - Misplaced: letter is in the answer at another position
//! - Incorrect: letter is not in the answer (or all its occurrences are used up)

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback status for a single guessed letter
///
/// Ordered by how much it reveals: `Incorrect < Misplaced < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Incorrect,
    Misplaced,
    Correct,
}

impl LetterStatus {
    /// Emoji tile for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Misplaced => "misplaced",
            Self::Incorrect => "incorrect",
        };
        f.write_str(name)
    }
}

/// One guessed letter and its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterResult {
    pub letter: char,
    pub status: LetterStatus,
}

/// Feedback for a whole guess, one result per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessStatus([LetterResult; WORD_LENGTH]);

impl GuessStatus {
    /// Per-position statuses in guess order
    #[must_use]
    pub fn statuses(&self) -> [LetterStatus; WORD_LENGTH] {
        self.0.map(|r| r.status)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LetterResult> {
        self.0.iter()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|r| r.status == LetterStatus::Correct)
    }

    /// Convert to an emoji string like "🟨🟨🟩⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.status.emoji()).collect()
    }
}

impl<'a> IntoIterator for &'a GuessStatus {
    type Item = &'a LetterResult;
    type IntoIter = std::slice::Iter<'a, LetterResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Evaluate `guess` against `answer`
///
/// Implements Wordle's feedback rules, including duplicate letters: every
/// answer letter is claimed by at most one guess position.
///
/// # Algorithm
/// 1. First pass: mark exact matches as correct and remove them from the answer's letter pool
/// 2. Second pass, left to right: mark letters still in the pool as misplaced and remove them
/// 3. Everything else is incorrect
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterStatus::*, Word, evaluate};
///
/// let guess = Word::new("lolly").unwrap();
/// let answer = Word::new("allow").unwrap();
/// let status = evaluate(&guess, &answer);
///
/// assert_eq!(
///     status.statuses(),
///     [Misplaced, Misplaced, Correct, Incorrect, Incorrect]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, answer: &Word) -> GuessStatus {
    let mut statuses = [LetterStatus::Incorrect; WORD_LENGTH];
    let mut answer_available = answer.letter_counts();

    // First pass: Mark exact position matches
    // Allow: Index needed to access guess[i], answer[i], and set statuses[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        let letter = guess.letter_at(i);
        if letter == answer.letter_at(i) {
            statuses[i] = LetterStatus::Correct;

            if let Some(count) = answer_available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: Mark misplaced letters from the remaining pool
    // Allow: Index needed to access guess[i] and check/set statuses[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }

        let letter = guess.letter_at(i);
        if let Some(count) = answer_available.get_mut(&letter)
            && *count > 0
        {
            statuses[i] = LetterStatus::Misplaced;
            *count -= 1;
        }
    }

    let letters = guess.letters();
    GuessStatus(std::array::from_fn(|i| LetterResult {
        letter: char::from(letters[i]),
        status: statuses[i],
    }))
}
