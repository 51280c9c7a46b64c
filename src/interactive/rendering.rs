//! TUI rendering with ratatui
//!
//! Board, keyboard and statistics for the interactive game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{MAX_ATTEMPTS, RoundStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Width of the longest distribution bar
const BAR_WIDTH: usize = 20;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_play_area(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn tile_style(status: LetterStatus) -> Style {
    let background = match status {
        LetterStatus::Unknown => Color::DarkGray,
        LetterStatus::Absent => Color::Black,
        LetterStatus::Misplaced => Color::Yellow,
        LetterStatus::Correct => Color::Green,
    };
    Style::default()
        .fg(Color::White)
        .bg(background)
        .add_modifier(Modifier::BOLD)
}

fn tile(letter: char, status: LetterStatus) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        tile_style(status),
    )
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE - guess the word in six tries")
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

fn render_play_area(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_ATTEMPTS as u16 * 2 + 1), // Board
            Constraint::Min(5),                              // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let history = app.round.history();
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for row in 0..MAX_ATTEMPTS {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        if let Some(record) = history.get(row) {
            for (&letter, &status) in record.word().chars().iter().zip(record.feedback().statuses()) {
                spans.push(tile(char::from(letter), status));
                spans.push(Span::raw(" "));
            }
        } else if row == history.len() && app.input_mode == InputMode::Guessing {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            for i in 0..WORD_LENGTH {
                let letter = typed.get(i).copied().unwrap_or(' ');
                spans.push(Span::styled(
                    format!(" {} ", letter.to_ascii_uppercase()),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " Board ({}/{MAX_ATTEMPTS}) ",
                    app.round.attempts_used()
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let letters = app.round.letters();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| [tile(c, letters.get(c)), Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Statistics
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_stats(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

/// Bar of `count` out of `max`, scaled to `width` cells
fn scaled_bar(count: u32, max: u32, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (f64::from(count) / f64::from(max) * width as f64).round() as usize;
    "█".repeat(filled.min(width))
}

fn stats_lines(app: &App) -> Vec<Line<'static>> {
    let stats = &app.stats;
    let win_pct = stats
        .win_percentage()
        .map_or_else(|_| "N/A".to_string(), |pct| format!("{pct:.0}%"));

    let mut lines = vec![
        Line::from(format!("Played:         {}", stats.rounds_played())),
        Line::from(format!("Win %:          {win_pct}")),
        Line::from(format!("Current streak: {}", stats.current_streak())),
        Line::from(format!("Max streak:     {}", stats.max_streak())),
        Line::from(""),
        Line::from(Span::styled(
            "Guess distribution",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let max = stats.max_bucket();
    // Highlight the bucket the round just finished in
    let highlight = (app.round.status() == RoundStatus::Won).then(|| app.round.attempts_used());
    for (guesses, count) in stats.histogram() {
        let color = if highlight == Some(guesses) {
            Color::Green
        } else {
            Color::DarkGray
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses} ")),
            Span::styled(scaled_bar(count, max, BAR_WIDTH), Style::default().fg(color)),
            Span::raw(format!(" {count}")),
        ]));
    }
    lines
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(stats_lines(app)).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
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
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | 'n' for a new round, 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type your guess and press Enter ",
            app.input_buffer.to_uppercase(),
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
    let help_text = match app.input_mode {
        InputMode::Guessing => format!(
            "{} guesses left | Enter: Submit | Backspace: Delete | Esc: Quit",
            app.round.attempts_remaining()
        ),
        InputMode::RoundOver => "n: New round | q: Quit".to_string(),
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::AnswerPool;
    use crate::wordlists::WordLists;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
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
    fn renders_board_and_stats() {
        let lists = WordLists::new(
            AnswerPool::new(words_from_slice(&["radar"])),
            words_from_slice(&["lemon"]),
        );
        let mut app = App::new(&lists, StdRng::seed_from_u64(0)).unwrap();
        app.input_buffer = "lemon".to_string();
        app.submit_guess().unwrap();

        let text = screen(&app);
        assert!(text.contains("Board (1/6)"));
        assert!(text.contains("Played:"));
        assert!(text.contains("Guess distribution"));
        assert!(text.contains("5 guesses left"));
    }

    #[test]
    fn scaled_bar_bounds() {
        assert_eq!(scaled_bar(0, 0, 10), "");
        assert_eq!(scaled_bar(5, 5, 10).chars().count(), 10);
        assert_eq!(scaled_bar(1, 2, 10).chars().count(), 5);
    }
}
