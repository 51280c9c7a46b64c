//! Error types for the game core
//!
//! Every variant here is a caller contract violation or a configuration
//! problem. Ordinary bad input from the player is handled by
//! [`crate::input::InputError`] and never reaches the core.

use crate::game::RoundStatus;
use thiserror::Error;

/// Errors raised by the comparator, round state machine, answer pool and
/// session statistics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("solution and guess have different lengths ({solution} vs {guess})")]
    LengthMismatch { solution: usize, guess: usize },

    #[error("cannot {action} while the round is {status}")]
    InvalidState {
        action: &'static str,
        status: RoundStatus,
    },

    #[error("no candidate solutions configured")]
    EmptyAnswerSet,

    #[error("{0} is undefined before any round has been played")]
    UndefinedStatistic(&'static str),

    #[error(transparent)]
    Word(#[from] WordError),
}

/// Error type for invalid words
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    #[error("Word must contain only ASCII letters")]
    NonAscii,

    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_message() {
        let err = GameError::LengthMismatch {
            solution: 5,
            guess: 3,
        };
        assert_eq!(
            err.to_string(),
            "solution and guess have different lengths (5 vs 3)"
        );
    }

    #[test]
    fn invalid_state_names_status() {
        let err = GameError::InvalidState {
            action: "add a guess",
            status: RoundStatus::Won,
        };
        assert_eq!(err.to_string(), "cannot add a guess while the round is won");
    }

    #[test]
    fn word_error_is_transparent() {
        let err: GameError = WordError::InvalidLength(7).into();
        assert_eq!(err.to_string(), "Word must be exactly 5 letters, got 7");
    }
}
