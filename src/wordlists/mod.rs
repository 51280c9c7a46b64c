//! Word lists for the game
//!
//! The answer list and the allowed-guess list are compiled into the binary by
//! `build.rs`; [`loader`] reads replacements from disk.

pub mod dictionary;
pub mod loader;

pub use dictionary::Dictionary;

use crate::game::AnswerPool;

mod embedded {
    include!(concat!(env!("OUT_DIR"), "/answers.rs"));
    include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
}

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

/// Everything a front end needs to run rounds: where solutions come from and
/// which guesses are accepted
#[derive(Debug, Clone)]
pub struct WordLists {
    pub answers: AnswerPool,
    pub dictionary: Dictionary,
}

impl WordLists {
    /// Pair an answer pool with a dictionary, merging the answers into it
    #[must_use]
    pub fn new(answers: AnswerPool, allowed: impl IntoIterator<Item = crate::core::Word>) -> Self {
        let dictionary = Dictionary::with_answers(allowed, &answers);
        Self {
            answers,
            dictionary,
        }
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(AnswerPool::embedded(), loader::words_from_slice(ALLOWED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn expected_counts() {
        assert_eq!(ANSWERS_COUNT, 486, "Expected 486 answer words");
        assert_eq!(ALLOWED_COUNT, 2046, "Expected 2,046 allowed words");
    }

    #[test]
    fn embedded_dictionary_accepts_every_answer() {
        let lists = WordLists::embedded();
        for answer in lists.answers.iter() {
            assert!(lists.dictionary.contains(answer), "{answer} rejected");
        }
        assert!(lists.dictionary.contains(&Word::new("zebra").unwrap()));
        assert!(!lists.dictionary.contains(&Word::new("xxxxx").unwrap()));
    }
}
