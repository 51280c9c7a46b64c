//! Set of words accepted as guesses
//!
//! Built once and handed to whatever collects input. The round itself never
//! consults it.

use crate::core::{WORD_LENGTH, Word};
use crate::game::AnswerPool;
use rustc_hash::FxHashSet;

/// Accepted guesses
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<[u8; WORD_LENGTH]>,
}

impl Dictionary {
    /// Dictionary of exactly these words
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().map(|w| *w.chars()).collect(),
        }
    }

    /// Dictionary of `allowed` plus every answer
    ///
    /// A solution must always be guessable, even if the allowed list was
    /// replaced by one that does not contain it.
    #[must_use]
    pub fn with_answers(allowed: impl IntoIterator<Item = Word>, answers: &AnswerPool) -> Self {
        let mut dictionary = Self::new(allowed);
        dictionary
            .words
            .extend(answers.iter().map(|w| *w.chars()));
        dictionary
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word.chars())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn contains_only_given_words() {
        let dictionary = Dictionary::new(words_from_slice(&["crane", "slate"]));
        assert!(dictionary.contains(&Word::new("CRANE").unwrap()));
        assert!(!dictionary.contains(&Word::new("radar").unwrap()));
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn answers_are_merged() {
        let answers = AnswerPool::new(words_from_slice(&["radar", "crane"]));
        let dictionary = Dictionary::with_answers(words_from_slice(&["crane", "slate"]), &answers);

        assert!(dictionary.contains(&Word::new("radar").unwrap()));
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn default_is_empty() {
        assert!(Dictionary::default().is_empty());
    }
}
