//! Wordle feedback calculation and representation
//!
//! Feedback is one [`LetterStatus`] per guess position. It is computed in two
//! passes so repeated letters are handled correctly:
//!
//! 1. First pass: mark exact matches `Correct` and put every unmatched
//!    solution letter into a remaining pool
//! 2. Second pass: for each other position, take the letter out of the pool
//!    if it is there (`Misplaced`), otherwise it is `Absent`
//!
//! Exact matches must leave the pool before any misplaced check, otherwise a
//! guess with a doubled letter can be credited for a solution letter that an
//! exact match already used.

use super::{LetterStatus, WORD_LENGTH, Word};
use crate::error::GameError;
use std::fmt;

/// Compare two arbitrary strings Wordle-style
///
/// Works per `char` on any pair of equal-length strings.
///
/// # Errors
/// Returns `GameError::LengthMismatch` if the strings differ in length.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterStatus::*, compare};
///
/// let statuses = compare("radar", "rarax").unwrap();
/// assert_eq!(statuses, vec![Correct, Correct, Misplaced, Correct, Absent]);
///
/// assert!(compare("abcde", "abc").is_err());
/// ```
pub fn compare(solution: &str, guess: &str) -> Result<Vec<LetterStatus>, GameError> {
    let solution: Vec<char> = solution.chars().collect();
    let guess: Vec<char> = guess.chars().collect();

    if solution.len() != guess.len() {
        return Err(GameError::LengthMismatch {
            solution: solution.len(),
            guess: guess.len(),
        });
    }

    let mut statuses = vec![LetterStatus::Unknown; solution.len()];
    score_into(&solution, &guess, &mut statuses);
    Ok(statuses)
}

/// Two-pass scoring shared by [`compare`] and [`Feedback::calculate`]
///
/// All three slices have the same length.
fn score_into<T: Copy + PartialEq>(solution: &[T], guess: &[T], out: &mut [LetterStatus]) {
    debug_assert_eq!(solution.len(), guess.len());
    debug_assert_eq!(solution.len(), out.len());

    // First pass: exact matches; the rest of the solution forms the pool
    let mut remaining: Vec<T> = Vec::with_capacity(solution.len());
    for ((&wanted, &got), status) in solution.iter().zip(guess).zip(out.iter_mut()) {
        if wanted == got {
            *status = LetterStatus::Correct;
        } else {
            remaining.push(wanted);
        }
    }

    // Second pass: misplaced consumes one pool entry, otherwise absent
    for (&got, status) in guess.iter().zip(out.iter_mut()) {
        if *status == LetterStatus::Correct {
            continue;
        }
        *status = match remaining.iter().position(|&c| c == got) {
            Some(index) => {
                remaining.swap_remove(index);
                LetterStatus::Misplaced
            }
            None => LetterStatus::Absent,
        };
    }
}

/// Feedback for one guess of a five-letter word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All correct (solved)
    pub const SOLVED: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Build feedback from explicit statuses
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Calculate the feedback when `guess` is played against `solution`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let solution = Word::new("radar").unwrap();
    /// let guess = Word::new("aaxxx").unwrap();
    ///
    /// assert_eq!(Feedback::calculate(&solution, &guess).to_emoji(), "🟨🟩⬛⬛⬛");
    /// ```
    #[must_use]
    pub fn calculate(solution: &Word, guess: &Word) -> Self {
        let mut statuses = [LetterStatus::Unknown; WORD_LENGTH];
        score_into(solution.chars(), guess.chars(), &mut statuses);
        Self(statuses)
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert feedback to emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
