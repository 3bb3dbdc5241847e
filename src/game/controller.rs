//! Session controller
//!
//! Owns the catalog, the store, the statistics record and the session for the
//! date currently on screen. Every front end (TUI, line mode, one-shot
//! commands) drives the game through this type.

use super::{Clock, Guess, MAX_ATTEMPTS, Mode, Outcome, Session, Statistics};
use crate::catalog::{Catalog, Event};
use crate::core::{LetterHints, evaluate_name_guess, evaluate_year_guess, parse_year};
use crate::error::{GameError, Result};
use crate::storage::{self, KeyValueStore};
use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

/// Why a submission was dropped without consuming an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The session is already won or lost
    Completed,
    /// Year mode input was empty, non-numeric or zero
    InvalidYear,
    /// Name mode input was empty after normalization
    EmptyName,
}

/// Result of [`Controller::submit_guess`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Ignored(Rejection),
    Accepted(Guess),
    Finished { guess: Guess, outcome: Outcome },
}

/// Result of [`Controller::switch_mode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSwitch {
    /// Already in the requested mode
    Unchanged,
    /// Session reset under the new mode
    Switched,
    /// The player refused to discard their attempts
    Declined,
}

/// How a recent day stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Won,
    Lost,
    Today,
    Unplayed,
}

/// Answer shown once a day is finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub year: i32,
    pub event: String,
}

/// One row of the recent-days list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub attempts: usize,
    pub revealed: Option<Reveal>,
}

/// Days listed by [`Controller::history`] unless told otherwise
pub const DEFAULT_HISTORY_DAYS: u64 = 7;

pub struct Controller<S, C> {
    catalog: Catalog,
    store: S,
    clock: C,
    stats: Statistics,
    session: Option<Session>,
}

impl<S: KeyValueStore, C: Clock> Controller<S, C> {
    /// Create a controller, loading statistics from `store`
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Storage`] if the store cannot be read.
    pub fn new(catalog: Catalog, store: S, clock: C) -> Result<Self> {
        let stats = storage::load_statistics(&store)?;
        Ok(Self {
            catalog,
            store,
            clock,
            stats,
            session: None,
        })
    }

    /// Open the game for `date`
    ///
    /// A finished game is restored as-is and accepts no further input. An
    /// unfinished or missing one starts over in year mode.
    ///
    /// # Errors
    ///
    /// - [`GameError::FutureDate`] if `date` is after today; the open session
    ///   is kept
    /// - [`GameError::NoEventForDate`] if the catalog has nothing for `date`;
    ///   the previously open session is closed
    /// - [`GameError::Storage`] if the store fails
    pub fn open_date(&mut self, date: NaiveDate) -> Result<&Session> {
        self.open(date, false)
    }

    /// Open the game for `date`, picking an unfinished game up where it left off
    ///
    /// Used by one-shot commands, where each guess arrives in a separate run.
    ///
    /// # Errors
    ///
    /// Same as [`Controller::open_date`].
    pub fn resume_date(&mut self, date: NaiveDate) -> Result<&Session> {
        self.open(date, true)
    }

    /// Open today's game, or the latest past event if today has none
    ///
    /// # Errors
    ///
    /// Same as [`Controller::open_date`].
    pub fn open_today(&mut self) -> Result<&Session> {
        let date = self.default_date()?;
        self.open(date, false)
    }

    /// [`Controller::open_today`] with the resume rules of [`Controller::resume_date`]
    ///
    /// # Errors
    ///
    /// Same as [`Controller::open_date`].
    pub fn resume_today(&mut self) -> Result<&Session> {
        let date = self.default_date()?;
        self.open(date, true)
    }

    fn default_date(&self) -> Result<NaiveDate> {
        let today = self.today();
        if self.catalog.get(today).is_some() {
            return Ok(today);
        }

        // Today has no event, so everything before it is the past
        let latest = self
            .catalog
            .before(today)
            .last()
            .ok_or(GameError::NoEventForDate(today))?;
        info!(%today, fallback = %latest.date, "no event today, opening latest");
        Ok(latest.date)
    }

    fn open(&mut self, date: NaiveDate, resume: bool) -> Result<&Session> {
        if date > self.today() {
            return Err(GameError::FutureDate(date));
        }
        if self.catalog.get(date).is_none() {
            self.session = None;
            return Err(GameError::NoEventForDate(date));
        }

        let session = match storage::load_snapshot(&self.store, date)? {
            Some(saved) if saved.is_completed() => {
                debug!(%date, outcome = ?saved.outcome(), "restored finished game");
                saved
            }
            Some(saved) if resume => {
                debug!(%date, attempts = saved.attempts().len(), "resumed unfinished game");
                saved
            }
            _ => Session::new(date, Mode::default()),
        };

        Ok(&*self.session.insert(session))
    }

    /// Score a guess for the open session
    ///
    /// Invalid input and guesses on a finished session are ignored. An
    /// accepted guess is saved immediately; a winning guess or the last
    /// allowed attempt finishes the game and, for today's date only, updates
    /// the statistics.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoActiveSession`] if no date is open
    /// - [`GameError::Storage`] if saving fails
    pub fn submit_guess(&mut self, raw: &str) -> Result<Submission> {
        let session = self.session.as_mut().ok_or(GameError::NoActiveSession)?;
        if session.is_completed() {
            return Ok(Submission::Ignored(Rejection::Completed));
        }

        let date = session.date();
        let target = self
            .catalog
            .get(date)
            .ok_or(GameError::NoEventForDate(date))?;

        let guess = match session.mode() {
            Mode::Year => match parse_year(raw) {
                Some(year) => Guess::Year(evaluate_year_guess(target.year, year)),
                None => {
                    debug!(input = raw, "ignoring invalid year");
                    return Ok(Submission::Ignored(Rejection::InvalidYear));
                }
            },
            Mode::Name => match evaluate_name_guess(&target.event, raw) {
                Some(name) => Guess::Name(name),
                None => {
                    debug!("ignoring empty name guess");
                    return Ok(Submission::Ignored(Rejection::EmptyName));
                }
            },
        };

        session.push(guess.clone());
        storage::save_snapshot(&mut self.store, session)?;

        let outcome = if guess.is_win() {
            Outcome::Won
        } else if session.attempts().len() >= MAX_ATTEMPTS {
            Outcome::Lost
        } else {
            return Ok(Submission::Accepted(guess));
        };

        session.finish(outcome);
        info!(%date, ?outcome, attempts = session.attempts().len(), "game finished");

        if date == self.clock.today()
            && self.stats.record(date, outcome, session.attempts().len())
        {
            storage::save_statistics(&mut self.store, &self.stats)?;
        }
        storage::save_snapshot(&mut self.store, session)?;

        Ok(Submission::Finished { guess, outcome })
    }

    /// Change what the player is guessing
    ///
    /// Switching discards all attempts, so once any exist `confirm` is asked
    /// first; declining leaves the session untouched.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoActiveSession`] if no date is open
    /// - [`GameError::SessionCompleted`] if the game is finished
    /// - [`GameError::Storage`] if saving the reset session fails
    pub fn switch_mode(
        &mut self,
        mode: Mode,
        confirm: impl FnOnce() -> bool,
    ) -> Result<ModeSwitch> {
        let session = self.session.as_mut().ok_or(GameError::NoActiveSession)?;
        if session.is_completed() {
            return Err(GameError::SessionCompleted(session.date()));
        }
        if session.mode() == mode {
            return Ok(ModeSwitch::Unchanged);
        }
        if !session.attempts().is_empty() && !confirm() {
            return Ok(ModeSwitch::Declined);
        }

        *session = Session::new(session.date(), mode);
        storage::save_snapshot(&mut self.store, session)?;
        info!(date = %session.date(), %mode, "switched mode");
        Ok(ModeSwitch::Switched)
    }

    /// Status of the last `days` calendar days, newest first
    ///
    /// Days without a catalog event are skipped. Answers are only revealed
    /// for finished games.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Storage`] if the store fails.
    pub fn history(&self, days: u64) -> Result<Vec<HistoryEntry>> {
        let today = self.today();
        let mut entries = Vec::new();

        for offset in 0..days {
            let Some(date) = today.checked_sub_days(Days::new(offset)) else {
                break;
            };
            let Some(event) = self.catalog.get(date) else {
                continue;
            };

            let saved = storage::load_snapshot(&self.store, date)?;
            let finished = saved.as_ref().filter(|s| s.is_completed());

            let status = match finished.map(Session::outcome) {
                Some(Outcome::Won) => DayStatus::Won,
                Some(_) => DayStatus::Lost,
                None if offset == 0 => DayStatus::Today,
                None => DayStatus::Unplayed,
            };

            entries.push(HistoryEntry {
                date,
                status,
                attempts: finished.map_or(0, |s| s.attempts().len()),
                revealed: finished.map(|_| Reveal {
                    year: event.year,
                    event: event.event.clone(),
                }),
            });
        }

        Ok(entries)
    }

    /// Pick a random catalog date before today, for practice replays
    pub fn random_past_date<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<NaiveDate> {
        self.catalog
            .before(self.today())
            .choose(rng)
            .map(|e| e.date)
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Event behind the open session
    #[must_use]
    pub fn target(&self) -> Option<&Event> {
        self.session
            .as_ref()
            .and_then(|s| self.catalog.get(s.date()))
    }

    /// Whether the open session counts towards statistics
    #[must_use]
    pub fn is_today(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.date() == self.today())
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Keyboard hints for the open session
    #[must_use]
    pub fn letter_hints(&self) -> LetterHints {
        self.session
            .as_ref()
            .map(Session::letter_hints)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
