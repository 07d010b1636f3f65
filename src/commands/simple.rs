//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a guess per line, get coloured
//! feedback, the board, and the keyboard.

use crate::core::Word;
use crate::game::{GameConfig, GameState, Session, Statistics, SubmitError};
use crate::output::{write_banner, write_board, write_keyboard, write_statistics};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What the player asked for on one line of input
enum Input {
    Quit,
    NewGame,
    Keyboard,
    Guess(String),
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewGame,
        "keys" | "k" => Input::Keyboard,
        _ => Input::Guess(line.trim().to_string()),
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if the word list is empty or on an I/O error.
pub fn run_simple<R: Rng + ?Sized>(
    words: &[Word],
    config: GameConfig,
    rng: &mut R,
) -> Result<Statistics> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(stdin.lock(), stdout.lock(), words, config, rng)
}

/// Run the game loop over arbitrary input and output streams
///
/// Returns when the player quits, declines another game, or input ends.
///
/// # Errors
///
/// Returns an error if the word list is empty or on an I/O error.
pub fn run_simple_with<I, O, R>(
    mut input: I,
    mut out: O,
    words: &[Word],
    config: GameConfig,
    rng: &mut R,
) -> Result<Statistics>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    let mut stats = Statistics::default();

    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║              Wordle - Simple Mode            ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the hidden 5-letter word in {} tries.",
        config.max_guesses
    )?;
    writeln!(
        out,
        "Commands: 'quit' to exit, 'new' for new game, 'keys' to show the keyboard\n"
    )?;

    let mut session = new_session(words, config, rng)?;

    loop {
        let label = format!("Guess {}", session.guess_count() + 1);
        let Some(line) = prompt(&mut input, &mut out, &label)? else {
            break;
        };

        match parse_input(&line) {
            Input::Quit => break,
            Input::NewGame => {
                session = new_session(words, config, rng)?;
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Input::Keyboard => write_keyboard(&mut out, &session)?,
            Input::Guess(guess) => match session.submit_guess(&guess) {
                Ok(GameState::InProgress) => {
                    write_board(&mut out, &session)?;
                    writeln!(out, "{} guesses left", session.remaining_guesses())?;
                }
                Ok(_) => {
                    write_board(&mut out, &session)?;
                    write_banner(&mut out, &session)?;
                    stats.record(&session);
                    write_statistics(&mut out, &stats)?;

                    let again = prompt(&mut input, &mut out, "Play again? (yes/no)")?;
                    let play_again = again
                        .is_some_and(|reply| matches!(reply.to_lowercase().as_str(), "yes" | "y"));
                    if !play_again {
                        break;
                    }
                    session = new_session(words, config, rng)?;
                    writeln!(out, "\n🔄 New game started!\n")?;
                }
                Err(SubmitError::DuplicateGuess { guess }) => {
                    writeln!(out, "{}", format!("You already guessed {guess}!").yellow())?;
                }
                Err(e) => writeln!(out, "{}", format!("❌ {e}").red())?,
            },
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

fn new_session<R: Rng + ?Sized>(
    words: &[Word],
    config: GameConfig,
    rng: &mut R,
) -> Result<Session> {
    Session::random(words, rng, config).context("Word list is empty")
}

/// Prompt and read one line; `None` at end of input
fn prompt<I: BufRead, O: Write>(input: &mut I, out: &mut O, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
