//! Display functions for game and command results

use super::formatters::{guess_row, keyboard_rows, status_markers};
use crate::commands::CheckResult;
use crate::game::{GameState, Session, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Write the guess grid: filled rows for past guesses, blank rows for the rest
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_board<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out)?;
    for record in session.guesses() {
        writeln!(out, "  {}", guess_row(&record.status))?;
    }
    for _ in 0..session.remaining_guesses() {
        writeln!(out, "  {}", " _ ".repeat(5).bright_black())?;
    }
    writeln!(out)
}

/// Write the coloured on-screen keyboard
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_keyboard<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    for row in keyboard_rows(&session.keyboard()) {
        writeln!(out, "  {row}")?;
    }
    writeln!(out)
}

/// Write the win/lose banner, if the game is over
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_banner<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    match session.state() {
        GameState::InProgress => Ok(()),
        GameState::Won => {
            let count = session.guess_count();
            let noun = if count == 1 { "guess" } else { "guesses" };
            writeln!(
                out,
                "{} Got it in {} {noun}.",
                "Congratulations!".green().bold(),
                count.to_string().bright_cyan().bold()
            )
        }
        GameState::Lost => {
            let answer = session
                .revealed_answer()
                .map_or_else(String::new, ToString::to_string);
            writeln!(
                out,
                "{} the correct answer is {}.",
                "Sorry,".red().bold(),
                answer.bright_yellow().bold()
            )
        }
    }
}

/// Write per-process statistics
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(
        out,
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        stats.games_played,
        stats.games_won,
        stats.win_rate()
    )?;
    for (guesses, count) in &stats.guess_distribution {
        writeln!(out, "  {guesses}: {} {count}", "█".repeat(*count).green())?;
    }
    Ok(())
}

/// Print the result of checking a single guess to stdout
///
/// Falls back to plain-text markers when colour output is disabled.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_check_result(result: &CheckResult) -> io::Result<()> {
    let colour = colored::control::SHOULD_COLORIZE.should_colorize();
    write_check_result(&mut io::stdout().lock(), result, colour)
}

/// Write the result of checking a single guess
///
/// With `colour` off the tile row is replaced by markers like "YYG--".
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_check_result<W: Write>(
    out: &mut W,
    result: &CheckResult,
    colour: bool,
) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "Guess {} against {}",
        result.guess.text().bright_yellow().bold(),
        result.answer.text().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(40).cyan())?;

    if colour {
        writeln!(out, "\n  {}", guess_row(&result.status))?;
    } else {
        writeln!(out, "\n  {}", result.guess.text())?;
        writeln!(out, "  {}", status_markers(&result.status))?;
    }
    writeln!(out, "  {}\n", result.status.to_emoji())?;

    for r in &result.status {
        writeln!(out, "  {}  {}", r.letter, r.status)?;
    }

    if result.status.is_solved() {
        writeln!(out, "\n{}", "✅ Exact match!".green().bold())?;
    }
    Ok(())
}
