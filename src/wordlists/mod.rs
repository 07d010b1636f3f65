//! Word lists and answer selection
//!
//! Provides the embedded word list compiled into the binary, plus uniform
//! random answer selection with a caller-supplied random source.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick an answer uniformly at random
///
/// Returns `None` if `words` is empty.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_game::wordlists::{WORDS, loader::words_from_slice, pick_answer};
///
/// let words = words_from_slice(WORDS);
/// let mut rng = StdRng::seed_from_u64(42);
/// let answer = pick_answer(&words, &mut rng).unwrap();
/// assert!(words.contains(answer));
/// ```
pub fn pick_answer<'a, R: Rng + ?Sized>(words: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    words.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid_uppercase() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn words_convert_without_loss() {
        assert_eq!(words_from_slice(WORDS).len(), WORDS_COUNT);
    }

    #[test]
    fn pick_answer_empty_list() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(pick_answer(&[], &mut rng).is_none());
    }

    #[test]
    fn pick_answer_same_seed_same_word() {
        let words = words_from_slice(WORDS);
        let a = pick_answer(&words, &mut StdRng::seed_from_u64(9)).cloned();
        let b = pick_answer(&words, &mut StdRng::seed_from_u64(9)).cloned();
        assert_eq!(a, b);
    }

    #[test]
    fn pick_answer_reaches_every_word() {
        let words = words_from_slice(&["crane", "slate", "beach"]);
        let mut rng = StdRng::seed_from_u64(3);
        let seen: HashSet<_> = (0..200)
            .filter_map(|_| pick_answer(&words, &mut rng))
            .map(Word::text)
            .collect();
        assert_eq!(seen.len(), 3);
    }
}
