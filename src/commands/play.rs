//! Line-oriented play mode
//!
//! Prompts for guesses on a reader, prints the board to a writer, and keeps
//! session statistics until the player stops or input ends.

use crate::game::{RoundState, SessionStats};
use crate::input::parse_guess;
use crate::output::{print_board, print_outcome, print_stats};
use crate::wordlists::WordLists;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// How a round's input phase ended
enum RoundEnd {
    Finished,
    InputClosed,
}

/// Run rounds until the player declines another or input ends
///
/// A round cut short by end of input is not recorded. Returns the statistics
/// of the session.
///
/// # Errors
///
/// Returns an error on I/O failure or if no solution can be drawn.
pub fn run_play<I, O, R>(
    input: &mut I,
    out: &mut O,
    lists: &WordLists,
    rng: &mut R,
) -> Result<SessionStats>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    let mut stats = SessionStats::new();
    writeln!(
        out,
        "{}",
        "Welcome to Wordle! Guess the secret 5-letter word!".bright_cyan().bold()
    )?;

    loop {
        let mut round = RoundState::start(&lists.answers, rng)?;
        info!(round = stats.rounds_played() + 1, "starting round");
        print_board(out, &round)?;

        match play_round(input, out, lists, &mut round)? {
            RoundEnd::Finished => {}
            RoundEnd::InputClosed => {
                debug!(guesses = round.attempts_used(), "input closed mid-round");
                writeln!(out)?;
                print_outcome(out, &round)?;
                break;
            }
        }

        print_outcome(out, &round)?;
        stats.record_round(&round)?;
        print_stats(out, &stats)?;

        if !ask_play_again(input, out)? {
            break;
        }
    }

    writeln!(out, "Thanks for playing!")?;
    Ok(stats)
}

fn play_round<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    lists: &WordLists,
    round: &mut RoundState,
) -> Result<RoundEnd> {
    while !round.is_over() {
        let Some(line) = prompt(input, out, "Your guess: ")? else {
            return Ok(RoundEnd::InputClosed);
        };

        match parse_guess(&line, &lists.dictionary) {
            Ok(guess) => {
                round.add_guess(guess)?;
                print_board(out, round)?;
            }
            Err(reason) => {
                debug!(input = line.trim(), %reason, "guess rejected");
                writeln!(out, "{}", reason.to_string().yellow())?;
            }
        }
    }
    Ok(RoundEnd::Finished)
}

/// Empty answer counts as yes, matching the `Y/n` hint
fn ask_play_again<I: BufRead, O: Write>(input: &mut I, out: &mut O) -> Result<bool> {
    let answer = prompt(input, out, "Play again? Y/n: ")?;
    Ok(answer.is_some_and(|a| matches!(a.trim().to_lowercase().as_str(), "" | "y" | "yes")))
}

/// Print `text`, then read one line; `None` at end of input
fn prompt<I: BufRead, O: Write>(input: &mut I, out: &mut O, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
