//! Wordle - CLI
//!
//! Play Wordle in the terminal, either in the TUI or line by line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;
use wordle_game::{
    commands::{check_guess, run_simple},
    core::Word,
    game::{DEFAULT_MAX_GUESSES, GameConfig, KeyboardPolicy},
    logging::{LogOutput, init_logging},
    output::{print_check_result, write_statistics},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of attempts per game
    #[arg(
        short = 'g',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_GUESSES as u8,
        value_parser = clap::value_parser!(u8).range(1..=20)
    )]
    max_guesses: u8,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for answer selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Keyboard colouring: 'first' (first status seen) or 'best' (most informative)
    #[arg(short, long, global = true, default_value_t = KeyboardPolicy::FirstSeen)]
    keyboard: KeyboardPolicy,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Append logs to this file instead of stderr (the TUI logs nowhere else)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Check a single guess against a chosen answer
    Check {
        /// The guessed word
        guess: String,

        /// The answer to check against
        answer: String,
    },
}

/// Load the word list based on the -w flag
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("Cannot use word list '{path}'")),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    let log_file = cli.log_file.as_deref();
    let log_output = match command {
        Commands::Play => LogOutput::for_tui(log_file),
        _ => LogOutput::for_console(log_file),
    };
    init_logging(&cli.log_level, &log_output).context("Cannot open log file")?;

    let config = GameConfig::new(usize::from(cli.max_guesses), cli.keyboard);

    // Default to Play mode if no command given
    match command {
        Commands::Play => {
            let words = load_words(&cli.wordlist)?;
            run_play_command(&words, config, make_rng(cli.seed))
        }
        Commands::Simple => {
            let words = load_words(&cli.wordlist)?;
            let stats = run_simple(&words, config, &mut make_rng(cli.seed))?;
            info!(played = stats.games_played, won = stats.games_won, "session summary");
            if stats.games_played > 0 {
                write_statistics(&mut std::io::stdout(), &stats)?;
            }
            Ok(())
        }
        Commands::Check { guess, answer } => {
            let result = check_guess(&guess, &answer).context("Invalid word")?;
            print_check_result(&result)?;
            Ok(())
        }
    }
}

fn run_play_command(words: &[Word], config: GameConfig, rng: StdRng) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words, config, rng)?;
    run_tui(app)
}
