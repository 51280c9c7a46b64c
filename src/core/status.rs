//! Per-letter feedback status
//!
//! The variant order is load-bearing: the keyboard keeps the best status seen
//! for each letter by taking the maximum, so `Unknown < Absent < Misplaced <
//! Correct` must hold.

use std::fmt;

/// What is known about a letter, either at one position of a guess or across
/// a whole round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Not guessed yet
    #[default]
    Unknown,
    /// Not in the solution (after consumed duplicates)
    Absent,
    /// In the solution, but not at this position
    Misplaced,
    /// In the solution at this position
    Correct,
}

impl LetterStatus {
    /// All statuses in ascending order
    pub const ALL: [Self; 4] = [Self::Unknown, Self::Absent, Self::Misplaced, Self::Correct];

    /// Ordinal value: 0 = unknown, 1 = absent, 2 = misplaced, 3 = correct
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Absent => 1,
            Self::Misplaced => 2,
            Self::Correct => 3,
        }
    }

    /// Share-grid square for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Unknown => '⬜',
            Self::Absent => '⬛',
            Self::Misplaced => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Lowercase human name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Absent => "absent",
            Self::Misplaced => "misplaced",
            Self::Correct => "correct",
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
