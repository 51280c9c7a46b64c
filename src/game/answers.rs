//! Candidate solutions and random selection

use crate::core::Word;
use crate::error::GameError;
use crate::wordlists::{ANSWERS, loader::words_from_slice};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Words a round may pick as its solution
///
/// Selection takes the random source as an argument so tests (and `--seed`)
/// can pin the solution.
#[derive(Debug, Clone, Default)]
pub struct AnswerPool {
    words: Vec<Word>,
}

impl AnswerPool {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Pool built from the embedded answer list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS))
    }

    /// Pick a solution uniformly at random
    ///
    /// # Errors
    /// Returns `GameError::EmptyAnswerSet` if the pool has no words.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, GameError> {
        self.words.choose(rng).ok_or(GameError::EmptyAnswerSet)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
