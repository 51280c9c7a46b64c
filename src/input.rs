//! Guess validation for the front ends
//!
//! Raw player text is checked here before a round ever sees it. A rejection
//! means "ask again", never an error in the game.

use crate::core::{WORD_LENGTH, Word};
use crate::wordlists::Dictionary;
use thiserror::Error;

/// Why a typed guess was not accepted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Guess must be 5 letters long, please try again")]
    WrongLength(usize),

    #[error("Guess must only contain letters, please try again")]
    NotAWord,

    #[error("Word not in dictionary, please try again")]
    NotInDictionary(Word),
}

/// Turn typed text into a guess the round will accept
///
/// Surrounding whitespace is ignored and case does not matter.
///
/// # Errors
/// Returns the `InputError` to show before prompting again.
///
/// # Examples
/// ```
/// use wordle_game::input::{InputError, parse_guess};
/// use wordle_game::wordlists::WordLists;
///
/// let lists = WordLists::embedded();
/// assert_eq!(parse_guess(" Radar\n", &lists.dictionary).unwrap().text(), "radar");
/// assert_eq!(parse_guess("abc", &lists.dictionary), Err(InputError::WrongLength(3)));
/// ```
pub fn parse_guess(raw: &str, dictionary: &Dictionary) -> Result<Word, InputError> {
    let trimmed = raw.trim();
    let length = trimmed.chars().count();
    if length != WORD_LENGTH {
        return Err(InputError::WrongLength(length));
    }

    let word = Word::new(trimmed).map_err(|_| InputError::NotAWord)?;
    if dictionary.contains(&word) {
        Ok(word)
    } else {
        Err(InputError::NotInDictionary(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&["radar", "lemon"]))
    }

    #[test]
    fn accepts_known_word_any_case() {
        let word = parse_guess("  LeMoN ", &dictionary()).unwrap();
        assert_eq!(word.text(), "lemon");
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            parse_guess("lemons", &dictionary()),
            Err(InputError::WrongLength(6))
        );
        assert_eq!(parse_guess("", &dictionary()), Err(InputError::WrongLength(0)));
    }

    #[test]
    fn rejects_non_letters() {
        assert_eq!(parse_guess("l3mon", &dictionary()), Err(InputError::NotAWord));
        assert_eq!(parse_guess("lém0n", &dictionary()), Err(InputError::NotAWord));
    }

    #[test]
    fn rejects_unknown_word() {
        let err = parse_guess("melon", &dictionary()).unwrap_err();
        assert_eq!(err.to_string(), "Word not in dictionary, please try again");
        assert!(matches!(err, InputError::NotInDictionary(w) if w.text() == "melon"));
    }

    #[test]
    fn wrong_length_message() {
        assert_eq!(
            InputError::WrongLength(3).to_string(),
            "Guess must be 5 letters long, please try again"
        );
    }
}
