//! Per-date game session

use crate::core::{LetterHints, NameGuess, YearGuess};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attempts allowed per date
pub const MAX_ATTEMPTS: usize = 5;

/// What the player is guessing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Year,
    Name,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => write!(f, "year"),
            Self::Name => write!(f, "name"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "year" | "y" => Ok(Self::Year),
            "name" | "n" | "event" => Ok(Self::Name),
            other => Err(format!("Unknown mode: {other} (expected 'year' or 'name')")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[default]
    Unset,
    Won,
    Lost,
}

/// A scored attempt in either mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Guess {
    Year(YearGuess),
    Name(NameGuess),
}

impl Guess {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        match self {
            Self::Year(g) => g.is_win(),
            Self::Name(g) => g.is_win(),
        }
    }
}

/// Persisted form of a session, keyed externally by date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: Mode,
    pub attempts: Vec<Guess>,
    pub completed: bool,
    #[serde(default)]
    pub outcome: Outcome,
}

/// State of the game for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    date: NaiveDate,
    mode: Mode,
    attempts: Vec<Guess>,
    completed: bool,
    outcome: Outcome,
}

impl Session {
    /// Fresh session with no attempts
    #[must_use]
    pub const fn new(date: NaiveDate, mode: Mode) -> Self {
        Self {
            date,
            mode,
            attempts: Vec::new(),
            completed: false,
            outcome: Outcome::Unset,
        }
    }

    /// Rebuild a session from its persisted form
    ///
    /// Attempts beyond [`MAX_ATTEMPTS`] are dropped, and a completed snapshot
    /// without a recorded outcome gets one from its last attempt.
    #[must_use]
    pub fn from_snapshot(date: NaiveDate, snapshot: Snapshot) -> Self {
        let mut attempts = snapshot.attempts;
        attempts.truncate(MAX_ATTEMPTS);

        let outcome = match (snapshot.completed, snapshot.outcome) {
            (false, _) => Outcome::Unset,
            (true, Outcome::Unset) if attempts.last().is_some_and(Guess::is_win) => Outcome::Won,
            (true, Outcome::Unset) => Outcome::Lost,
            (true, outcome) => outcome,
        };

        Self {
            date,
            mode: snapshot.mode,
            attempts,
            completed: snapshot.completed,
            outcome,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            attempts: self.attempts.clone(),
            completed: self.completed,
            outcome: self.outcome,
        }
    }

    #[inline]
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Guess] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts.len())
    }

    /// Keyboard hints from every name attempt so far
    #[must_use]
    pub fn letter_hints(&self) -> LetterHints {
        LetterHints::from_guesses(self.attempts.iter().filter_map(|g| match g {
            Guess::Name(name) => Some(name),
            Guess::Year(_) => None,
        }))
    }

    pub(crate) fn push(&mut self, guess: Guess) {
        debug_assert!(self.attempts.len() < MAX_ATTEMPTS);
        self.attempts.push(guess);
    }

    pub(crate) fn finish(&mut self, outcome: Outcome) {
        debug_assert!(outcome != Outcome::Unset);
        self.completed = true;
        self.outcome = outcome;
    }
}
