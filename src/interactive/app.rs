//! TUI application state and logic

use crate::game::{RoundState, RoundStatus, SessionStats};
use crate::input::parse_guess;
use crate::wordlists::WordLists;
use anyhow::Result;
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
use tracing::{debug, info};

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub lists: &'a WordLists,
    pub rng: StdRng,
    pub round: RoundState,
    pub stats: SessionStats,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
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
    /// Create the app and start its first round
    ///
    /// # Errors
    ///
    /// Returns an error if the answer pool is empty.
    pub fn new(lists: &'a WordLists, mut rng: StdRng) -> Result<Self> {
        let round = RoundState::start(&lists.answers, &mut rng)?;

        Ok(Self {
            lists,
            rng,
            round,
            stats: SessionStats::new(),
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Guess the secret 5-letter word! You have 6 tries.".to_string(),
                style: MessageStyle::Info,
            }],
            input_mode: InputMode::Guessing,
            should_quit: false,
        })
    }

    /// Score the typed guess, or explain why it was not accepted
    ///
    /// # Errors
    ///
    /// Returns an error if the round refuses the guess, which only happens
    /// when it is already over.
    pub fn submit_guess(&mut self) -> Result<()> {
        let guess = match parse_guess(&self.input_buffer, &self.lists.dictionary) {
            Ok(guess) => guess,
            Err(reason) => {
                debug!(input = %self.input_buffer, %reason, "guess rejected");
                self.add_message(&reason.to_string(), MessageStyle::Error);
                return Ok(());
            }
        };

        self.round.add_guess(guess)?;
        self.input_buffer.clear();

        if self.round.is_over() {
            self.finish_round()?;
        }
        Ok(())
    }

    fn finish_round(&mut self) -> Result<()> {
        let status = self.stats.record_round(&self.round)?;
        let solution = self.round.solution().display_text();

        if status == RoundStatus::Won {
            let guesses = self.round.attempts_used();
            let celebration = match guesses {
                1 => "Genius!",
                2 => "Magnificent!",
                3 => "Impressive!",
                4 => "Splendid!",
                5 => "Great!",
                _ => "Phew!",
            };
            self.add_message(
                &format!("{celebration} The word was {solution} ({guesses}/6)"),
                MessageStyle::Success,
            );
        } else {
            self.add_message(&format!("Sorry, the word was {solution}"), MessageStyle::Error);
        }
        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
        self.input_mode = InputMode::RoundOver;
        Ok(())
    }

    /// Start the next round
    ///
    /// # Errors
    ///
    /// Returns an error if the answer pool is empty.
    pub fn new_round(&mut self) -> Result<()> {
        self.round = RoundState::start(&self.lists.answers, &mut self.rng)?;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        info!(round = self.stats.rounds_played() + 1, "starting round");
        self.add_message("New round started!", MessageStyle::Info);
        Ok(())
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Propagates errors from submitting a guess or starting a round.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_round()?,
                _ => {
                    // Ignore other keys until the player chooses
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < 5 {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess()?,
                _ => {}
            },
        }
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
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

    // Run app
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
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    info!(
        played = app.stats.rounds_played(),
        wins = app.stats.wins(),
        "leaving interactive mode"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::AnswerPool;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn lists() -> WordLists {
        WordLists::new(
            AnswerPool::new(words_from_slice(&["radar"])),
            words_from_slice(&["crane", "lemon"]),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_is_limited_to_five_letters() {
        let lists = lists();
        let mut app = App::new(&lists, StdRng::seed_from_u64(1)).unwrap();
        for c in "LEMONS1".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "lemon");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "lemo");
    }

    #[test]
    fn unknown_word_shows_error_and_keeps_input() {
        let lists = lists();
        let mut app = App::new(&lists, StdRng::seed_from_u64(1)).unwrap();
        type_word(&mut app, "zzzzz");

        assert!(app.round.history().is_empty());
        assert_eq!(app.input_buffer, "zzzzz");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Word not in dictionary, please try again");
    }

    #[test]
    fn winning_round_records_stats() {
        let lists = lists();
        let mut app = App::new(&lists, StdRng::seed_from_u64(1)).unwrap();
        type_word(&mut app, "crane");
        type_word(&mut app, "radar");

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.wins(), 1);
        assert!(app.messages.iter().any(|m| m.text.contains("RADAR (2/6)")));

        // Letters are ignored until a new round starts
        press(&mut app, KeyCode::Char('x'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.round.history().is_empty());
        assert_eq!(app.stats.rounds_played(), 1);
    }

    #[test]
    fn losing_round_resets_streak() {
        let lists = lists();
        let mut app = App::new(&lists, StdRng::seed_from_u64(1)).unwrap();
        type_word(&mut app, "radar");
        press(&mut app, KeyCode::Enter);
        for _ in 0..6 {
            type_word(&mut app, "lemon");
        }

        assert_eq!(app.round.status(), RoundStatus::Lost);
        assert_eq!(app.stats.rounds_played(), 2);
        assert_eq!(app.stats.current_streak(), 0);
        assert_eq!(app.stats.max_streak(), 1);
    }

    #[test]
    fn quit_keys() {
        let lists = lists();
        let mut app = App::new(&lists, StdRng::seed_from_u64(1)).unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);

        let mut app = App::new(&lists, StdRng::seed_from_u64(1)).unwrap();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "'q' is a letter while guessing");
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn empty_pool_fails_to_start() {
        let lists = WordLists::new(AnswerPool::default(), words_from_slice(&["crane"]));
        assert!(App::new(&lists, StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn messages_are_capped() {
        let lists = lists();
        let mut app = App::new(&lists, StdRng::seed_from_u64(1)).unwrap();
        for i in 0..10 {
            app.add_message(&format!("note {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "note 9");
    }
}
