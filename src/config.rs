//! Runtime configuration
//!
//! Resolved from command-line flags and environment variables in `main`.

use crate::core::Word;
use crate::game::AnswerPool;
use crate::wordlists::{ALLOWED, WordLists, loader};
use anyhow::{Context, Result, ensure};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;

/// Where words come from and how solutions are drawn
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Replacement answer list; embedded list when `None`
    pub answers: Option<PathBuf>,
    /// Replacement allowed-guess list; embedded list when `None`
    pub dictionary: Option<PathBuf>,
    /// Fixed seed for solution selection
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Build the answer pool and dictionary
    ///
    /// # Errors
    ///
    /// Returns an error if a list file cannot be read or a replacement answer
    /// list contains no usable words.
    pub fn load_word_lists(&self) -> Result<WordLists> {
        let answers = match &self.answers {
            Some(path) => {
                let words = loader::load_from_file(path)
                    .with_context(|| format!("failed to read answer list {}", path.display()))?;
                ensure!(
                    !words.is_empty(),
                    "answer list {} has no five-letter words",
                    path.display()
                );
                AnswerPool::new(words)
            }
            None => AnswerPool::embedded(),
        };

        let allowed: Vec<Word> = match &self.dictionary {
            Some(path) => loader::load_from_file(path)
                .with_context(|| format!("failed to read dictionary {}", path.display()))?,
            None => loader::words_from_slice(ALLOWED),
        };

        let lists = WordLists::new(answers, allowed);
        info!(
            answers = lists.answers.len(),
            dictionary = lists.dictionary.len(),
            "word lists ready"
        );
        Ok(lists)
    }

    /// Random source for solution selection
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn list_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn default_config_uses_embedded_lists() {
        let lists = GameConfig::default().load_word_lists().unwrap();
        assert_eq!(lists.answers.len(), crate::wordlists::ANSWERS_COUNT);
        assert!(lists.dictionary.len() >= crate::wordlists::ALLOWED_COUNT);
    }

    #[test]
    fn custom_lists_are_merged() {
        let answers = list_file("radar\nlemon\n");
        let dictionary = list_file("crane\n");
        let config = GameConfig {
            answers: Some(answers.path().to_path_buf()),
            dictionary: Some(dictionary.path().to_path_buf()),
            seed: None,
        };

        let lists = config.load_word_lists().unwrap();
        assert_eq!(lists.answers.len(), 2);
        assert_eq!(lists.dictionary.len(), 3);
        assert!(lists.dictionary.contains(&Word::new("radar").unwrap()));
    }

    #[test]
    fn answer_list_without_words_is_rejected() {
        let answers = list_file("# nothing here\ntoolong\n");
        let config = GameConfig {
            answers: Some(answers.path().to_path_buf()),
            ..GameConfig::default()
        };
        assert!(config.load_word_lists().is_err());
    }

    #[test]
    fn missing_dictionary_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig {
            dictionary: Some(dir.path().join("nope.txt")),
            ..GameConfig::default()
        };
        let err = config.load_word_lists().unwrap_err();
        assert!(err.to_string().starts_with("failed to read dictionary"));
    }

    #[test]
    fn seeded_rng_is_repeatable() {
        use rand::Rng;

        let config = GameConfig {
            seed: Some(11),
            ..GameConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
