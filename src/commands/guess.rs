//! One-shot guess command
//!
//! Submits a single guess and exits. Unfinished games are picked up from the
//! store, so a day can be played one invocation at a time.

use crate::error::{GameError, Result};
use crate::game::{Clock, Controller, Mode, ModeSwitch, Rejection, Submission};
use crate::output::{print_attempts, print_event_header, print_letter_hints, print_result};
use crate::storage::KeyValueStore;
use chrono::NaiveDate;
use colored::Colorize;

/// Configuration for a single guess
pub struct GuessConfig {
    pub input: String,
    pub date: Option<NaiveDate>,
    pub mode: Option<Mode>,
    /// Discard earlier attempts when `mode` differs from the saved game's
    pub confirm_switch: bool,
}

impl GuessConfig {
    #[must_use]
    pub const fn new(input: String) -> Self {
        Self {
            input,
            date: None,
            mode: None,
            confirm_switch: false,
        }
    }
}

/// What happened to the guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResult {
    /// A mode change was needed but not confirmed; nothing was submitted
    SwitchDeclined { mode: Mode, attempts: usize },
    Submitted(Submission),
}

/// Open the requested day and submit one guess
///
/// # Errors
///
/// Returns [`GameError::FutureDate`] or [`GameError::NoEventForDate`] if the
/// day can't be played, or [`GameError::Storage`] if the store fails.
pub fn play_guess<S: KeyValueStore, C: Clock>(
    config: &GuessConfig,
    game: &mut Controller<S, C>,
) -> Result<GuessResult> {
    match config.date {
        Some(date) => game.resume_date(date).map(|_| ())?,
        None => game.resume_today().map(|_| ())?,
    }

    if let Some(mode) = config.mode {
        match game.switch_mode(mode, || config.confirm_switch) {
            Ok(ModeSwitch::Declined) => {
                let attempts = game.session().map_or(0, |s| s.attempts().len());
                return Ok(GuessResult::SwitchDeclined { mode, attempts });
            }
            // A finished game reports itself on submit
            Ok(_) | Err(GameError::SessionCompleted(_)) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(GuessResult::Submitted(game.submit_guess(&config.input)?))
}

/// Run [`play_guess`] and print the game as it now stands
///
/// # Errors
///
/// Returns an error message if the guess could not be played.
pub fn run_guess<S: KeyValueStore, C: Clock>(
    config: &GuessConfig,
    game: &mut Controller<S, C>,
) -> std::result::Result<(), String> {
    let result = play_guess(config, game).map_err(|e| e.to_string())?;

    let (Some(session), Some(event)) = (game.session(), game.target()) else {
        return Ok(());
    };
    print_event_header(event, game.is_today());

    match result {
        GuessResult::SwitchDeclined { mode, attempts } => {
            println!(
                "{}\n",
                format!(
                    "Switching to {mode} mode discards {attempts} attempt(s); pass --yes to confirm"
                )
                .yellow()
            );
            print_attempts(session);
        }
        GuessResult::Submitted(Submission::Ignored(Rejection::InvalidYear)) => {
            return Err(format!("Not a year: {:?}", config.input));
        }
        GuessResult::Submitted(Submission::Ignored(Rejection::EmptyName)) => {
            return Err("Name guess is empty".to_string());
        }
        GuessResult::Submitted(Submission::Ignored(Rejection::Completed)) => {
            println!("{}", "This game is already finished".yellow());
            print_attempts(session);
            print_result(session, event);
        }
        GuessResult::Submitted(Submission::Accepted(_)) => {
            print_attempts(session);
            print_letter_hints(&session.letter_hints());
            println!("{} attempt(s) left\n", session.remaining());
        }
        GuessResult::Submitted(Submission::Finished { .. }) => {
            print_attempts(session);
            print_result(session, event);
        }
    }
    Ok(())
}
