//! Turn-based game state
//!
//! A [`RoundState`] scores guesses against one solution and tracks the
//! keyboard. [`SessionStats`] sums up finished rounds. [`AnswerPool`] supplies
//! solutions.

mod answers;
mod keyboard;
mod round;
mod session;

pub use answers::AnswerPool;
pub use keyboard::{ALPHABET_SIZE, LetterKnowledge};
pub use round::{GuessRecord, MAX_ATTEMPTS, RoundState, RoundStatus};
pub use session::SessionStats;
