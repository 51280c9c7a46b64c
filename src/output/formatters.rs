//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, Word};
use crate::game::{LetterKnowledge, RoundState};
use colored::{ColoredString, Colorize};

/// One letter on a colored background
///
/// Bright white text on gray (not guessed), black (absent), yellow
/// (misplaced) or green (correct).
#[must_use]
pub fn tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = letter.to_ascii_uppercase().to_string().bright_white();
    match status {
        LetterStatus::Unknown => text.on_bright_black(),
        LetterStatus::Absent => text.on_black(),
        LetterStatus::Misplaced => text.on_yellow(),
        LetterStatus::Correct => text.on_green(),
    }
}

/// Color each character of `text` with the matching status
///
/// Extra characters or statuses on either side are dropped.
#[must_use]
pub fn render_letters(text: &str, statuses: &[LetterStatus]) -> String {
    text.chars()
        .zip(statuses)
        .map(|(c, &status)| tile(c, status).to_string())
        .collect()
}

/// A scored guess as a row of tiles
#[must_use]
pub fn render_guess(word: &Word, feedback: &Feedback) -> String {
    render_letters(word.text(), feedback.statuses())
}

/// The A-Z keyboard colored by what is known about each letter
#[must_use]
pub fn render_keyboard(letters: &LetterKnowledge) -> String {
    letters
        .iter()
        .map(|(c, status)| tile(c, status).to_string())
        .collect()
}

/// Emoji grid of a round, one line per guess, for sharing
#[must_use]
pub fn share_grid(round: &RoundState) -> String {
    round
        .history()
        .iter()
        .map(|record| record.feedback().to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Distribution bar: one `*` per round, followed by the count
#[must_use]
pub fn distribution_bar(count: u32) -> String {
    format!("{}{count}", "*".repeat(count as usize))
}
