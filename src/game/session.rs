//! Running statistics across the rounds of one session

use super::round::{MAX_ATTEMPTS, RoundState, RoundStatus};
use crate::error::GameError;
use tracing::info;

/// Win/loss record, streaks and guess distribution
///
/// Only grows: each finished round is added once and nothing is revised.
/// Recording the same round twice counts it twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    rounds_played: u32,
    wins: u32,
    current_streak: u32,
    max_streak: u32,
    histogram: [u32; MAX_ATTEMPTS],
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished round
    ///
    /// # Errors
    /// Returns `GameError::InvalidState` if the round is still in progress.
    pub fn record_round(&mut self, round: &RoundState) -> Result<RoundStatus, GameError> {
        let status = round.status();
        match status {
            RoundStatus::InProgress => {
                return Err(GameError::InvalidState {
                    action: "record the round",
                    status,
                });
            }
            RoundStatus::Won => {
                self.wins += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                // A won round has between 1 and MAX_ATTEMPTS guesses
                if let Some(bucket) = round
                    .attempts_used()
                    .checked_sub(1)
                    .and_then(|i| self.histogram.get_mut(i))
                {
                    *bucket += 1;
                }
            }
            RoundStatus::Lost => self.current_streak = 0,
        }
        self.rounds_played += 1;

        info!(
            outcome = %status,
            guesses = round.attempts_used(),
            played = self.rounds_played,
            streak = self.current_streak,
            "round recorded"
        );
        Ok(status)
    }

    /// Fraction of rounds won, in `0.0..=1.0`
    ///
    /// # Errors
    /// Returns `GameError::UndefinedStatistic` before any round is recorded.
    pub fn win_rate(&self) -> Result<f64, GameError> {
        if self.rounds_played == 0 {
            return Err(GameError::UndefinedStatistic("win rate"));
        }
        Ok(f64::from(self.wins) / f64::from(self.rounds_played))
    }

    /// [`Self::win_rate`] as a percentage
    ///
    /// # Errors
    /// Returns `GameError::UndefinedStatistic` before any round is recorded.
    pub fn win_percentage(&self) -> Result<f64, GameError> {
        self.win_rate().map(|rate| rate * 100.0)
    }

    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.rounds_played - self.wins
    }

    #[must_use]
    pub const fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub const fn max_streak(&self) -> u32 {
        self.max_streak
    }

    /// `(guess_count, wins)` pairs for 1..=6
    pub fn histogram(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.histogram
            .iter()
            .enumerate()
            .map(|(i, &count)| (i + 1, count))
    }

    /// Largest histogram bucket, for scaling bars
    #[must_use]
    pub fn max_bucket(&self) -> u32 {
        self.histogram.iter().copied().max().unwrap_or(0)
    }
}
