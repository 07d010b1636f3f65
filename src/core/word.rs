//! Wordle word representation
//!
//! A Word stores a validated, uppercased 5-letter word as both text and bytes.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A validated 5-letter uppercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only letters A-Z")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from raw input
    ///
    /// Surrounding whitespace is trimmed and ASCII letters are uppercased
    /// before validation. Other characters are left untouched and rejected.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new(" crane ").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_ascii_uppercase();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // All chars are ASCII, so byte length == char count == 5
        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Count occurrences of each letter
    ///
    /// This is the answer's available-letter pool during evaluation.
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), b"CRANE");
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("crane").unwrap().text(), "CRANE");
        assert_eq!(Word::new("CrAnE").unwrap().text(), "CRANE");
        assert_eq!(Word::new("  slate\n").unwrap().text(), "SLATE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
        assert_eq!(Word::new("   "), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_non_ascii_counts_characters() {
        // Five characters, but not A-Z
        assert_eq!(Word::new("crème"), Err(WordError::InvalidCharacters));
        // Six characters, length reported in characters not bytes
        assert_eq!(Word::new("crèmes"), Err(WordError::InvalidLength(6)));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'C');
        assert_eq!(word.letter_at(2), b'A');
        assert_eq!(word.letter_at(4), b'E');
    }

    #[test]
    fn word_creation_does_not_case_fold_unicode() {
        // ß would uppercase to "SS", dotless ı to "I"
        assert_eq!(Word::new("ßtar"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new("ßtars"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ıcons"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ﬁnal"), Err(WordError::InvalidLength(4)));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("allow").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'A'), Some(&1));
        assert_eq!(counts.get(&b'L'), Some(&2));
        assert_eq!(counts.get(&b'O'), Some(&1));
        assert_eq!(counts.get(&b'W'), Some(&1));
    }

    #[test]
    fn word_letter_counts_all_same() {
        let counts = Word::new("aaaaa").unwrap().letter_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'A'), Some(&5));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "crane".parse().unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }

    #[test]
    fn word_equality_ignores_input_case() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }
}
