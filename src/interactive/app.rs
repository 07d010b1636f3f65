//! TUI application state and logic

use crate::core::{WORD_LENGTH, Word};
use crate::game::{GameConfig, GameState, Session, Statistics, SubmitError};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub words: &'a [Word],
    pub config: GameConfig,
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if `words` is empty.
    pub fn new(words: &'a [Word], config: GameConfig, mut rng: StdRng) -> Result<Self> {
        let session = Session::random(words, &mut rng, config).context("Word list is empty")?;

        Ok(Self {
            words,
            config,
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!(
                    "Guess the hidden word in {} tries. Type and press Enter.",
                    config.max_guesses
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            rng,
        })
    }

    pub fn new_game(&mut self) {
        // Only reachable with a non-empty word list, checked in `new`
        if let Some(session) = Session::random(self.words, &mut self.rng, self.config) {
            self.session = session;
        }
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn push_letter(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < WORD_LENGTH {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn submit(&mut self) {
        if self.input_buffer.len() != WORD_LENGTH {
            self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
            return;
        }

        let input = std::mem::take(&mut self.input_buffer);
        match self.session.submit_guess(&input) {
            Ok(GameState::InProgress) => {}
            Ok(GameState::Won) => {
                self.stats.record(&self.session);
                let count = self.session.guess_count();
                let celebration = match count {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                    _ => format!("🎉 Congratulations! Got it in {count} guesses."),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Ok(GameState::Lost) => {
                self.stats.record(&self.session);
                let answer = self
                    .session
                    .revealed_answer()
                    .map_or_else(String::new, ToString::to_string);
                self.add_message(
                    &format!("Sorry, the correct answer is {answer}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Err(SubmitError::DuplicateGuess { .. }) => {
                self.input_buffer = input;
                self.add_message("You already guessed that!", MessageStyle::Error);
            }
            Err(e) => {
                self.input_buffer = input;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.session.is_over() {
            match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                _ => {
                    // Game over, ignore other keys
                }
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Char(c) => self.push_letter(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    debug!(
        played = app.stats.games_played,
        won = app.stats.games_won,
        "leaving interactive mode"
    );
    Ok(())
}
