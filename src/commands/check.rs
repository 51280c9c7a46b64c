//! Check command
//!
//! Scores one guess against one solution and prints the feedback, without a
//! round or a dictionary.

use crate::core::{LetterStatus, compare};
use crate::output::print_comparison;
use anyhow::{Context, Result};
use std::io::Write;

/// Compare `guess` against `solution` (case-insensitive) and print the result
///
/// Any equal-length strings are accepted.
///
/// # Errors
///
/// Returns an error if the lengths differ or the output cannot be written.
pub fn run_check<W: Write>(out: &mut W, solution: &str, guess: &str) -> Result<Vec<LetterStatus>> {
    let solution = solution.to_lowercase();
    let guess = guess.to_lowercase();

    let statuses = compare(&solution, &guess)
        .with_context(|| format!("cannot compare '{guess}' against '{solution}'"))?;
    print_comparison(out, &guess, &statuses)?;
    Ok(statuses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Misplaced};
    use crate::error::GameError;

    #[test]
    fn check_prints_feedback() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let statuses = run_check(&mut out, "RADAR", "aaxxx").unwrap();

        assert_eq!(statuses, vec![Misplaced, Correct, Absent, Absent, Absent]);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("AAXXX\n🟨🟩⬛⬛⬛\n"));
    }

    #[test]
    fn check_any_length() {
        let mut out = Vec::new();
        let statuses = run_check(&mut out, "banana", "bandit").unwrap();
        assert_eq!(statuses.len(), 6);
    }

    #[test]
    fn check_length_mismatch() {
        let mut out = Vec::new();
        let err = run_check(&mut out, "abcde", "abc").unwrap_err();

        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::LengthMismatch {
                solution: 5,
                guess: 3
            })
        );
        assert!(out.is_empty());
    }
}
