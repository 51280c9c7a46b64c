//! One round: a solution, the guesses made against it, and the outcome

use super::answers::AnswerPool;
use super::keyboard::LetterKnowledge;
use crate::core::{Feedback, Word};
use crate::error::GameError;
use rand::Rng;
use std::fmt;
use tracing::debug;

/// Guesses allowed per round
pub const MAX_ATTEMPTS: usize = 6;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// A scored guess, fixed once recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// State machine for a single round
///
/// Starts `InProgress` with no guesses. Becomes `Won` as soon as a guess
/// matches the solution and `Lost` once [`MAX_ATTEMPTS`] guesses miss. Both
/// are terminal: after that only the read accessors are useful.
#[derive(Debug, Clone)]
pub struct RoundState {
    solution: Word,
    history: Vec<GuessRecord>,
    letters: LetterKnowledge,
}

impl RoundState {
    #[must_use]
    pub fn new(solution: Word) -> Self {
        Self {
            solution,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            letters: LetterKnowledge::new(),
        }
    }

    /// Start a round with a solution drawn from `answers`
    ///
    /// # Errors
    /// Returns `GameError::EmptyAnswerSet` if `answers` is empty.
    pub fn start<R: Rng + ?Sized>(answers: &AnswerPool, rng: &mut R) -> Result<Self, GameError> {
        let solution = answers.pick(rng)?.clone();
        debug!(solution = %solution, "round started");
        Ok(Self::new(solution))
    }

    /// Score a guess, record it and update the keyboard
    ///
    /// Dictionary checks are the caller's job; any well-formed word is
    /// accepted here.
    ///
    /// # Errors
    /// Returns `GameError::InvalidState` if the round is already won or lost.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{LetterStatus, Word};
    /// use wordle_game::game::{RoundState, RoundStatus};
    ///
    /// let mut round = RoundState::new(Word::new("radar").unwrap());
    /// let feedback = round.add_guess(Word::new("rarax").unwrap()).unwrap();
    ///
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟨🟩⬛");
    /// assert_eq!(round.letters().get('x'), LetterStatus::Absent);
    /// assert_eq!(round.status(), RoundStatus::InProgress);
    /// ```
    pub fn add_guess(&mut self, guess: Word) -> Result<Feedback, GameError> {
        let status = self.status();
        if status.is_terminal() {
            return Err(GameError::InvalidState {
                action: "add a guess",
                status,
            });
        }

        let feedback = Feedback::calculate(&self.solution, &guess);
        self.letters.merge_guess(&guess, &feedback);
        debug!(
            attempt = self.history.len() + 1,
            guess = %guess,
            feedback = %feedback,
            "guess scored"
        );
        self.history.push(GuessRecord {
            word: guess,
            feedback,
        });

        Ok(feedback)
    }

    /// True once the latest guess is the solution
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|record| record.word == self.solution)
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.is_solved() {
            RoundStatus::Won
        } else if self.history.len() >= MAX_ATTEMPTS {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    #[must_use]
    pub fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn letters(&self) -> &LetterKnowledge {
        &self.letters
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.history.len())
    }
}
