//! TUI rendering with ratatui
//!
//! Guess grid, input line, on-screen keyboard and outcome banner.

use super::app::{App, MessageStyle};
use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{GameState, KEYBOARD_ROWS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Guess grid
            Constraint::Percentage(55), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile colours for a letter status; `None` is an unused key or empty cell
fn tile_style(status: Option<LetterStatus>) -> Style {
    let style = match status {
        Some(LetterStatus::Correct) => Style::default().bg(Color::Green).fg(Color::White),
        Some(LetterStatus::Misplaced) => Style::default().bg(Color::Yellow).fg(Color::Black),
        Some(LetterStatus::Incorrect) => Style::default().bg(Color::DarkGray).fg(Color::White),
        None => Style::default().bg(Color::Gray).fg(Color::Black),
    };
    style.add_modifier(Modifier::BOLD)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let guesses = app.session.guesses();
    let current_row = guesses.len();
    let mut lines = vec![Line::from("")];

    for row in 0..app.session.max_guesses() {
        let spans: Vec<Span> = if let Some(record) = guesses.get(row) {
            record
                .status
                .iter()
                .flat_map(|r| {
                    [
                        Span::styled(format!(" {} ", r.letter), tile_style(Some(r.status))),
                        Span::raw(" "),
                    ]
                })
                .collect()
        } else if row == current_row && !app.session.is_over() {
            // Row being typed
            let typed: Vec<char> = app.input_buffer.chars().collect();
            (0..WORD_LENGTH)
                .flat_map(|i| {
                    let cell = typed
                        .get(i)
                        .map_or_else(|| " · ".to_string(), |c| format!(" {c} "));
                    let style = Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD);
                    [Span::styled(cell, style), Span::raw(" ")]
                })
                .collect()
        } else {
            (0..WORD_LENGTH)
                .flat_map(|_| {
                    [
                        Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                        Span::raw(" "),
                    ]
                })
                .collect()
        };
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Keyboard
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();
    let mut lines = vec![Line::from("")];

    for row in KEYBOARD_ROWS {
        let spans: Vec<Span> = row
            .chars()
            .flat_map(|c| {
                [
                    Span::styled(format!(" {c} "), tile_style(keyboard.status(c))),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Keyboard ({}) ", app.config.keyboard_policy))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.session.state() {
        GameState::Won => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            format!("Got it in {} guesses.", app.session.guess_count()),
            Color::Green,
        ),
        GameState::Lost => (
            " Out of guesses | Press 'n' for new game or 'q' to quit ".to_string(),
            format!(
                "Sorry, the correct answer is {}.",
                app.session
                    .revealed_answer()
                    .map_or_else(String::new, ToString::to_string)
            ),
            Color::Red,
        ),
        GameState::InProgress => (
            " Enter guess (5 letters) | Enter to submit | Esc to quit ".to_string(),
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let remaining = Paragraph::new(format!(
        "Guesses left: {}",
        app.session.remaining_guesses()
    ))
    .alignment(Alignment::Center);
    f.render_widget(remaining, chunks[0]);

    let stats = Paragraph::new(format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let distribution: String = app
        .stats
        .guess_distribution
        .iter()
        .map(|(guesses, count)| format!("{guesses}:{count} "))
        .collect();
    let distribution = Paragraph::new(distribution).alignment(Alignment::Center);
    f.render_widget(distribution, chunks[2]);

    let help_text = if app.session.is_over() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Ctrl+N: New Game"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_banner_after_loss() {
        let words = words_from_slice(&["beach"]);
        let mut app = App::new(&words, GameConfig::default(), StdRng::seed_from_u64(0)).unwrap();
        for guess in ["CRANE", "SLATE", "AUDIO", "ROBOT", "PILOT", "FUDGE"] {
            app.input_buffer = guess.to_string();
            app.submit();
        }

        let text = screen_text(&app);
        assert!(text.contains("Sorry, the correct answer is BEACH."));
        assert!(text.contains("Keyboard (first)"));
    }

    #[test]
    fn renders_typed_letters() {
        let words = words_from_slice(&["beach"]);
        let mut app = App::new(&words, GameConfig::default(), StdRng::seed_from_u64(0)).unwrap();
        app.input_buffer = "CRA".to_string();

        let text = screen_text(&app);
        assert!(text.contains("Guesses left: 6"));
        assert!(text.contains(" C "));
    }
}
