//! Per-letter keyboard state derived from the guess log

use super::session::GuessRecord;
use crate::core::LetterStatus;
use std::fmt;
use std::str::FromStr;

/// QWERTY rows of the on-screen keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// How statuses from several guesses are folded into one per letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyboardPolicy {
    /// Keep the first status recorded for a letter and never update it.
    ///
    /// A letter first seen as misplaced stays misplaced even after it is
    /// later placed correctly.
    #[default]
    FirstSeen,
    /// Keep the most informative status: correct > misplaced > incorrect.
    BestSeen,
}

impl KeyboardPolicy {
    /// Create policy from name string
    ///
    /// Supported names: "first", "first-seen", "best", "best-seen"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "first" | "first-seen" => Some(Self::FirstSeen),
            "best" | "best-seen" => Some(Self::BestSeen),
            _ => None,
        }
    }
}

impl FromStr for KeyboardPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| format!("Unknown keyboard policy: {s} (use 'first' or 'best')"))
    }
}

impl fmt::Display for KeyboardPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstSeen => f.write_str("first"),
            Self::BestSeen => f.write_str("best"),
        }
    }
}

/// Status of every letter A-Z; `None` means the letter has not been guessed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: [Option<LetterStatus>; 26],
}

impl KeyboardState {
    /// Fold the guess log into a keyboard state
    ///
    /// Guesses are visited in chronological order and letters within a guess
    /// left to right.
    #[must_use]
    pub fn from_guesses(guesses: &[GuessRecord], policy: KeyboardPolicy) -> Self {
        let mut state = Self::default();

        for result in guesses.iter().flat_map(|record| record.status.iter()) {
            let Some(slot) = index_of(result.letter).map(|i| &mut state.letters[i]) else {
                continue;
            };

            *slot = match (policy, *slot) {
                (_, None) => Some(result.status),
                (KeyboardPolicy::FirstSeen, seen) => seen,
                (KeyboardPolicy::BestSeen, Some(seen)) => Some(seen.max(result.status)),
            };
        }

        state
    }

    /// Status recorded for a letter (case-insensitive), `None` if unseen
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        index_of(letter).and_then(|i| self.letters[i])
    }

    /// All letters A-Z with their status
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<LetterStatus>)> + '_ {
        ('A'..='Z').zip(self.letters.iter().copied())
    }
}

fn index_of(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| (upper as u8 - b'A') as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Correct, Incorrect, Misplaced};
    use crate::core::{Word, evaluate};

    fn log(answer: &str, guesses: &[&str]) -> Vec<GuessRecord> {
        let answer = Word::new(answer).unwrap();
        guesses
            .iter()
            .map(|g| {
                let guess = Word::new(g).unwrap();
                let status = evaluate(&guess, &answer);
                GuessRecord { guess, status }
            })
            .collect()
    }

    #[test]
    fn empty_log_leaves_every_letter_unseen() {
        let state = KeyboardState::from_guesses(&[], KeyboardPolicy::FirstSeen);
        assert!(state.iter().all(|(_, status)| status.is_none()));
        assert_eq!(state.iter().count(), 26);
    }

    #[test]
    fn crane_against_beach() {
        let guesses = log("beach", &["crane"]);
        for policy in [KeyboardPolicy::FirstSeen, KeyboardPolicy::BestSeen] {
            let state = KeyboardState::from_guesses(&guesses, policy);
            assert_eq!(state.status('C'), Some(Misplaced));
            assert_eq!(state.status('R'), Some(Incorrect));
            assert_eq!(state.status('A'), Some(Correct));
            assert_eq!(state.status('N'), Some(Incorrect));
            assert_eq!(state.status('E'), Some(Misplaced));
            assert_eq!(state.status('B'), None);
            assert_eq!(state.status('z'), None);
        }
    }

    #[test]
    fn first_seen_keeps_earlier_status() {
        let guesses = log("beach", &["crane", "leech"]);
        let state = KeyboardState::from_guesses(&guesses, KeyboardPolicy::FirstSeen);

        // E was misplaced in CRANE and correct in LEECH (position 1)
        assert_eq!(state.status('E'), Some(Misplaced));
        // C was misplaced in CRANE and correct in LEECH (position 3)
        assert_eq!(state.status('C'), Some(Misplaced));
        assert_eq!(state.status('L'), Some(Incorrect));
        assert_eq!(state.status('H'), Some(Correct));
    }

    #[test]
    fn best_seen_upgrades_to_correct() {
        let guesses = log("beach", &["crane", "leech"]);
        let state = KeyboardState::from_guesses(&guesses, KeyboardPolicy::BestSeen);

        assert_eq!(state.status('E'), Some(Correct));
        assert_eq!(state.status('C'), Some(Correct));
        assert_eq!(state.status('H'), Some(Correct));
    }

    #[test]
    fn first_seen_applies_within_a_single_guess() {
        // LOLLY vs ALLOW: the first L is misplaced, the middle L is correct
        let guesses = log("allow", &["lolly"]);
        let first = KeyboardState::from_guesses(&guesses, KeyboardPolicy::FirstSeen);
        let best = KeyboardState::from_guesses(&guesses, KeyboardPolicy::BestSeen);

        assert_eq!(first.status('L'), Some(Misplaced));
        assert_eq!(best.status('L'), Some(Correct));
    }

    #[test]
    fn correct_never_regresses() {
        // A is correct in CRANE, then only misplaced in ALOFT
        let guesses = log("beach", &["crane", "aloft", "snaky"]);
        for policy in [KeyboardPolicy::FirstSeen, KeyboardPolicy::BestSeen] {
            let state = KeyboardState::from_guesses(&guesses, policy);
            assert_eq!(state.status('A'), Some(Correct), "{policy}");
        }
    }

    #[test]
    fn policy_from_name() {
        assert_eq!(KeyboardPolicy::from_name("first"), Some(KeyboardPolicy::FirstSeen));
        assert_eq!(KeyboardPolicy::from_name("best-seen"), Some(KeyboardPolicy::BestSeen));
        assert_eq!(KeyboardPolicy::from_name("latest"), None);
        assert!("nope".parse::<KeyboardPolicy>().is_err());
        assert_eq!(KeyboardPolicy::default(), KeyboardPolicy::FirstSeen);
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|row| row.chars()).collect();
        letters.sort_unstable();
        assert_eq!(letters, ('A'..='Z').collect::<Vec<_>>());
    }
}
