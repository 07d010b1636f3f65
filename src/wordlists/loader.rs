//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Error type for custom word lists
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Word list {} contains no valid 5-letter words", path.display())]
    Empty { path: PathBuf },
}

/// Load words from a file, one per line
///
/// Blank lines are ignored; invalid entries are skipped with a warning.
///
/// # Errors
///
/// Returns `WordListError` if the file cannot be read or yields no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content);
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            Word::new(trimmed)
                .inspect_err(|e| {
                    warn!(line = line_no + 1, entry = trimmed, error = %e, "skipping word");
                })
                .ok()
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_words_skips_blank_and_invalid_lines() {
        let words = parse_words("crane\n\n  slate  \nnope\nb3ach\nALLOW\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE", "ALLOW"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path =
            std::env::temp_dir().join(format!("wordle_game_words_{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "crane\nslate\n\nbeach").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[2].text(), "BEACH");
    }

    #[test]
    fn load_from_file_without_valid_words_is_an_error() {
        let path =
            std::env::temp_dir().join(format!("wordle_game_empty_{}.txt", std::process::id()));
        fs::write(&path, "toolong\n\n1234\n").unwrap();

        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(WordListError::Empty { .. })));
    }

    #[test]
    fn load_from_missing_file_is_an_io_error() {
        let result = load_from_file("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }
}
