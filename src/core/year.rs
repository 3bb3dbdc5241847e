//! Year-mode feedback
//!
//! A year guess is scored by its signed distance to the event's year and
//! classified into a coarse band.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Guesses within this many years of the answer are `Close`
pub const CLOSE_THRESHOLD: i64 = 50;

/// Coarse distance classification of a year guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Exact,
    Close,
    Far,
}

impl Band {
    /// Classify a signed distance
    #[must_use]
    pub const fn from_distance(distance: i64) -> Self {
        match distance.unsigned_abs() {
            0 => Self::Exact,
            d if d <= CLOSE_THRESHOLD.unsigned_abs() => Self::Close,
            _ => Self::Far,
        }
    }
}

/// Which way the answer lies relative to the guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The event happened after the guessed year
    Later,
    /// The event happened before the guessed year
    Earlier,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Later => write!(f, "later"),
            Self::Earlier => write!(f, "earlier"),
        }
    }
}

/// Feedback for a single year guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGuess {
    pub value: i32,
    pub signed_distance: i64,
    pub band: Band,
}

impl YearGuess {
    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self.band, Band::Exact)
    }

    /// Direction hint for display; `None` on an exact hit
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        if self.signed_distance > 0 {
            Some(Direction::Later)
        } else if self.signed_distance < 0 {
            Some(Direction::Earlier)
        } else {
            None
        }
    }
}

/// Score `guess` against the year of the target event
///
/// Total over every `i32`: the distance is computed in `i64` so extreme
/// inputs cannot overflow.
///
/// # Examples
/// ```
/// use histodle::core::{Band, evaluate_year_guess};
///
/// let feedback = evaluate_year_guess(1969, 1950);
/// assert_eq!(feedback.signed_distance, 19);
/// assert_eq!(feedback.band, Band::Close);
/// ```
#[must_use]
pub fn evaluate_year_guess(target_year: i32, guess: i32) -> YearGuess {
    let signed_distance = i64::from(target_year) - i64::from(guess);

    YearGuess {
        value: guess,
        signed_distance,
        band: Band::from_distance(signed_distance),
    }
}

/// Parse raw year input
///
/// Accepts an optionally signed integer surrounded by whitespace. Empty,
/// non-numeric and zero input yield `None`; such input never counts as an
/// attempt.
#[must_use]
pub fn parse_year(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|&year| year != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_guess() {
        let feedback = evaluate_year_guess(1969, 1969);
        assert_eq!(feedback.band, Band::Exact);
        assert_eq!(feedback.signed_distance, 0);
        assert!(feedback.is_win());
        assert_eq!(feedback.direction(), None);
    }

    #[test]
    fn close_boundary() {
        assert_eq!(evaluate_year_guess(1969, 1919).band, Band::Close);
        assert_eq!(evaluate_year_guess(1969, 2019).band, Band::Close);
        assert_eq!(evaluate_year_guess(1969, 1918).band, Band::Far);
        assert_eq!(evaluate_year_guess(1969, 2020).band, Band::Far);
    }

    #[test]
    fn direction_follows_sign() {
        // Answer 1969 is later than 1900
        assert_eq!(
            evaluate_year_guess(1969, 1900).direction(),
            Some(Direction::Later)
        );
        assert_eq!(
            evaluate_year_guess(1969, 2000).direction(),
            Some(Direction::Earlier)
        );
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let feedback = evaluate_year_guess(i32::MAX, i32::MIN);
        assert_eq!(feedback.band, Band::Far);
        assert!(feedback.signed_distance > 0);
    }

    #[test]
    fn negative_years_are_valid() {
        let feedback = evaluate_year_guess(-44, -50);
        assert_eq!(feedback.signed_distance, 6);
        assert_eq!(feedback.band, Band::Close);
    }

    #[test]
    fn parse_year_accepts_integers() {
        assert_eq!(parse_year("1969"), Some(1969));
        assert_eq!(parse_year("  1492 "), Some(1492));
        assert_eq!(parse_year("-44"), Some(-44));
    }

    #[test]
    fn parse_year_rejects_invalid() {
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("   "), None);
        assert_eq!(parse_year("abc"), None);
        assert_eq!(parse_year("19x9"), None);
        assert_eq!(parse_year("0"), None);
    }
}
