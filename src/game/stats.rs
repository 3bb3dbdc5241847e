//! Aggregate player statistics

use super::{MAX_ATTEMPTS, Outcome};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Lifetime results of daily games
///
/// Only games played on their own day are recorded; replays of past dates
/// never reach this record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub distribution: [u32; MAX_ATTEMPTS],
    #[serde(default)]
    pub last_recorded: Option<NaiveDate>,
}

impl Statistics {
    /// Record a finished game for `date`
    ///
    /// Returns `false` without changing anything if `date` was already
    /// recorded, or if the outcome or attempt count cannot describe a
    /// finished game.
    pub fn record(&mut self, date: NaiveDate, outcome: Outcome, attempts: usize) -> bool {
        if self.last_recorded == Some(date) {
            debug!(%date, "statistics already recorded for date");
            return false;
        }

        match outcome {
            Outcome::Won if (1..=MAX_ATTEMPTS).contains(&attempts) => {
                self.played += 1;
                self.wins += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                self.distribution[attempts - 1] += 1;
            }
            Outcome::Lost => {
                self.played += 1;
                self.current_streak = 0;
            }
            _ => return false,
        }

        self.last_recorded = Some(date);
        info!(%date, ?outcome, attempts, streak = self.current_streak, "recorded result");
        true
    }

    /// Percentage of games won, rounded
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        if self.played == 0 {
            return 0;
        }
        (f64::from(self.wins) / f64::from(self.played) * 100.0).round() as u32
    }

    /// Largest distribution bucket, at least 1 (for scaling bars)
    #[must_use]
    pub fn max_bucket(&self) -> u32 {
        self.distribution.iter().copied().max().unwrap_or(0).max(1)
    }
}
