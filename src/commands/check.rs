//! Single guess check command
//!
//! Evaluates one guess against a chosen answer without starting a session.

use crate::core::{GuessStatus, Word, WordError, evaluate};

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub answer: Word,
    pub status: GuessStatus,
}

/// Evaluate `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is not exactly 5 letters A-Z.
pub fn check_guess(guess: &str, answer: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let status = evaluate(&guess, &answer);

    Ok(CheckResult {
        guess,
        answer,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Correct, Incorrect, Misplaced};

    #[test]
    fn check_valid_words() {
        let result = check_guess("lolly", "allow").unwrap();

        assert_eq!(result.guess.text(), "LOLLY");
        assert_eq!(result.answer.text(), "ALLOW");
        assert_eq!(
            result.status.statuses(),
            [Misplaced, Misplaced, Correct, Incorrect, Incorrect]
        );
    }

    #[test]
    fn check_rejects_invalid_guess() {
        assert_eq!(
            check_guess("lol", "allow").err(),
            Some(WordError::InvalidLength(3))
        );
    }

    #[test]
    fn check_rejects_invalid_answer() {
        assert_eq!(
            check_guess("lolly", "a11ow").err(),
            Some(WordError::InvalidCharacters)
        );
    }
}
