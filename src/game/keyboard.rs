//! Best-known status of every letter A-Z

use crate::core::{Feedback, LetterStatus, Word};

/// Number of letters on the keyboard
pub const ALPHABET_SIZE: usize = 26;

/// Per-letter knowledge accumulated over a round
///
/// Each entry only ever moves up the [`LetterStatus`] order, so a letter that
/// was seen `Correct` never drops back to `Misplaced` on the keyboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterKnowledge([LetterStatus; ALPHABET_SIZE]);

impl LetterKnowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best status seen for `letter`
    ///
    /// Accepts either case; anything outside A-Z is `Unknown`.
    #[must_use]
    pub fn get(&self, letter: char) -> LetterStatus {
        index_of(letter).map_or(LetterStatus::Unknown, |i| self.0[i])
    }

    /// Raise `letter` to `status` if that is better than what is known
    pub fn merge(&mut self, letter: u8, status: LetterStatus) {
        if let Some(i) = index_of(char::from(letter)) {
            self.0[i] = self.0[i].max(status);
        }
    }

    /// Merge every position of one scored guess
    pub fn merge_guess(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &status) in guess.chars().iter().zip(feedback.statuses()) {
            self.merge(letter, status);
        }
    }

    /// Letters `a..=z` paired with their status
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        ('a'..='z').zip(self.0.iter().copied())
    }

    /// Letters currently at `status`
    #[must_use]
    pub fn letters_with(&self, status: LetterStatus) -> Vec<char> {
        self.iter()
            .filter(|&(_, s)| s == status)
            .map(|(c, _)| c)
            .collect()
    }
}

fn index_of(letter: char) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    lower
        .is_ascii_lowercase()
        .then(|| usize::from(lower as u8 - b'a'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Misplaced, Unknown};

    #[test]
    fn starts_unknown() {
        let keys = LetterKnowledge::new();
        assert!(keys.iter().all(|(_, s)| s == Unknown));
        assert_eq!(keys.iter().count(), ALPHABET_SIZE);
    }

    #[test]
    fn merge_never_regresses() {
        let mut keys = LetterKnowledge::new();
        keys.merge(b'a', Misplaced);
        keys.merge(b'a', Absent);
        assert_eq!(keys.get('a'), Misplaced);

        keys.merge(b'a', Correct);
        keys.merge(b'a', Misplaced);
        assert_eq!(keys.get('A'), Correct);
    }

    #[test]
    fn merge_guess_uses_best_status_within_guess() {
        // RADAR vs RARAX: the second R is misplaced, the first is correct
        let solution = Word::new("radar").unwrap();
        let guess = Word::new("rarax").unwrap();
        let feedback = Feedback::calculate(&solution, &guess);

        let mut keys = LetterKnowledge::new();
        keys.merge_guess(&guess, &feedback);

        assert_eq!(keys.get('r'), Correct);
        assert_eq!(keys.get('a'), Correct);
        assert_eq!(keys.get('x'), Absent);
        assert_eq!(keys.get('d'), Unknown);
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut keys = LetterKnowledge::new();
        keys.merge(b'!', Correct);
        assert_eq!(keys, LetterKnowledge::new());
        assert_eq!(keys.get('1'), Unknown);
    }

    #[test]
    fn letters_with_filters() {
        let mut keys = LetterKnowledge::new();
        keys.merge(b'q', Absent);
        keys.merge(b'z', Absent);
        keys.merge(b'e', Misplaced);
        assert_eq!(keys.letters_with(Absent), vec!['q', 'z']);
        assert_eq!(keys.letters_with(Misplaced), vec!['e']);
    }
}
