//! Printing of boards, outcomes and statistics
//!
//! Everything writes to a caller-supplied `Write` so the play loop can run
//! against stdout or an in-memory buffer.

use super::formatters::{distribution_bar, render_guess, render_keyboard, render_letters, share_grid};
use crate::core::LetterStatus;
use crate::game::{RoundState, RoundStatus, SessionStats};
use colored::Colorize;
use std::io::{self, Write};

/// Print the guess history followed by the keyboard
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_board<W: Write>(out: &mut W, round: &RoundState) -> io::Result<()> {
    for record in round.history() {
        writeln!(out, "{}", render_guess(record.word(), record.feedback()))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", render_keyboard(round.letters()))?;
    writeln!(out)
}

/// Announce how a finished round went and reveal the solution
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_outcome<W: Write>(out: &mut W, round: &RoundState) -> io::Result<()> {
    let solution = round.solution().display_text();
    match round.status() {
        RoundStatus::Won => {
            let guesses = round.attempts_used();
            writeln!(
                out,
                "{} The word was {}",
                "Correct!".green().bold(),
                solution.bold()
            )?;
            writeln!(
                out,
                "Solved in {guesses} {}",
                if guesses == 1 { "guess" } else { "guesses" }
            )?;
        }
        RoundStatus::Lost => {
            writeln!(
                out,
                "{} the word was {}",
                "Sorry,".red().bold(),
                solution.bold()
            )?;
        }
        RoundStatus::InProgress => {
            writeln!(out, "Round abandoned, the word was {solution}")?;
        }
    }
    writeln!(out)?;
    writeln!(out, "{}", share_grid(round))?;
    writeln!(out)
}

/// Print session statistics
///
/// The win percentage reads `N/A` until a round has been recorded.
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_stats<W: Write>(out: &mut W, stats: &SessionStats) -> io::Result<()> {
    let win_pct = stats
        .win_percentage()
        .map_or_else(|_| "N/A".to_string(), |pct| format!("{pct:.1}"));

    writeln!(out, "Played: {}", stats.rounds_played())?;
    writeln!(out, "Win %: {win_pct}")?;
    writeln!(out, "Current streak: {}", stats.current_streak())?;
    writeln!(out, "Max streak: {}", stats.max_streak())?;
    writeln!(out, "Guess distribution:")?;
    for (guesses, count) in stats.histogram() {
        writeln!(out, "{guesses}: {}", distribution_bar(count))?;
    }
    writeln!(out)
}

/// Print the result of comparing two arbitrary strings
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_comparison<W: Write>(
    out: &mut W,
    guess: &str,
    statuses: &[LetterStatus],
) -> io::Result<()> {
    let emoji: String = statuses.iter().map(|s| s.emoji()).collect();
    let ordinals: Vec<String> = statuses.iter().map(|s| s.ordinal().to_string()).collect();

    writeln!(out, "{}", render_letters(guess, statuses))?;
    writeln!(out, "{emoji}")?;
    writeln!(out, "[{}]", ordinals.join(", "))
}
