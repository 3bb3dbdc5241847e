//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{
    Clock, Controller, DEFAULT_HISTORY_DAYS, Mode, ModeSwitch, Rejection, Submission,
};
use crate::output::{
    print_attempts, print_event_header, print_guess, print_history, print_letter_hints,
    print_result, print_statistics,
};
use crate::storage::KeyValueStore;
use chrono::NaiveDate;
use colored::Colorize;
use std::io::{self, Write};

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    Help,
    Stats,
    History,
    Today,
    Open(NaiveDate),
    SwitchMode(Mode),
    Guess(String),
}

impl LineCommand {
    /// Interpret one line; anything that isn't a command is a guess
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let head = parts.next().unwrap_or_default().to_lowercase();
        let rest = parts.next().map(str::trim);

        match (head.as_str(), rest) {
            (":quit" | ":q" | ":exit", None) => Self::Quit,
            (":help" | ":h", None) => Self::Help,
            (":stats", None) => Self::Stats,
            (":history", None) => Self::History,
            (":today", None) => Self::Today,
            (":open", Some(arg)) => arg
                .parse()
                .map_or_else(|_| Self::Guess(trimmed.to_string()), Self::Open),
            (":mode", Some(arg)) => arg
                .parse()
                .map_or_else(|_| Self::Guess(trimmed.to_string()), Self::SwitchMode),
            _ => Self::Guess(trimmed.to_string()),
        }
    }
}

fn print_help() {
    println!("Type a year (year mode) or the event's name (name mode) and press Enter.");
    println!("Commands:");
    println!("  :mode year|name   switch mode (discards attempts)");
    println!("  :open YYYY-MM-DD  replay a past day");
    println!("  :today            back to today's event");
    println!("  :stats            show statistics");
    println!("  :history          show recent days");
    println!("  :quit             exit\n");
}

/// Open `date`, or today when `None`, and print its header
fn open<S: KeyValueStore, C: Clock>(
    game: &mut Controller<S, C>,
    date: Option<NaiveDate>,
) -> Result<(), String> {
    let opened = match date {
        Some(date) => game.open_date(date).map(|_| ()),
        None => game.open_today().map(|_| ()),
    };

    match opened {
        Ok(()) => {
            show_current(game);
            Ok(())
        }
        Err(crate::GameError::NoEventForDate(date)) => {
            println!("\n{}\n", format!("No event for {date}").yellow());
            Ok(())
        }
        Err(crate::GameError::FutureDate(date)) => {
            println!("\n{}\n", format!("No peeking: {date} is still to come").yellow());
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

fn show_current<S: KeyValueStore, C: Clock>(game: &Controller<S, C>) {
    let (Some(session), Some(event)) = (game.session(), game.target()) else {
        return;
    };

    print_event_header(event, game.is_today());
    println!("Mode: {}", session.mode().to_string().bright_yellow());
    if !session.attempts().is_empty() {
        print_attempts(session);
    }
    if session.is_completed() {
        print_result(session, event);
    }
}

/// Run the simple interactive CLI mode
///
/// Starts on `date` when given (a replay), otherwise on today's event.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the store
/// fails.
pub fn run_simple<S: KeyValueStore, C: Clock>(
    game: &mut Controller<S, C>,
    date: Option<NaiveDate>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Histodle - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    open(game, date)?;

    loop {
        let Some(line) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match LineCommand::parse(&line) {
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::Help => print_help(),
            LineCommand::Stats => print_statistics(game.statistics()),
            LineCommand::History => {
                let entries = game
                    .history(DEFAULT_HISTORY_DAYS)
                    .map_err(|e| e.to_string())?;
                print_history(&entries);
            }
            LineCommand::Today => open(game, None)?,
            LineCommand::Open(date) => open(game, Some(date))?,
            LineCommand::SwitchMode(mode) => switch_mode(game, mode)?,
            LineCommand::Guess(input) => submit(game, &input)?,
        }
    }
}

fn switch_mode<S: KeyValueStore, C: Clock>(
    game: &mut Controller<S, C>,
    mode: Mode,
) -> Result<(), String> {
    let mut prompt_error = None;
    let result = game.switch_mode(mode, || {
        match get_user_input("Switching mode discards your attempts. Continue? (yes/no)") {
            Ok(answer) => matches!(answer.as_deref(), Some("yes" | "y")),
            Err(e) => {
                prompt_error = Some(e);
                false
            }
        }
    });
    if let Some(e) = prompt_error {
        return Err(e);
    }

    match result {
        Ok(ModeSwitch::Switched) => println!("✓ Now guessing the {mode}\n"),
        Ok(ModeSwitch::Unchanged) => println!("Already guessing the {mode}\n"),
        Ok(ModeSwitch::Declined) => println!("Mode unchanged\n"),
        Err(crate::GameError::SessionCompleted(_) | crate::GameError::NoActiveSession) => {
            println!("{}\n", "This game can't change mode now".yellow());
        }
        Err(e) => return Err(e.to_string()),
    }
    Ok(())
}

fn submit<S: KeyValueStore, C: Clock>(
    game: &mut Controller<S, C>,
    input: &str,
) -> Result<(), String> {
    let submission = match game.submit_guess(input) {
        Ok(submission) => submission,
        Err(crate::GameError::NoActiveSession) => {
            println!("{}\n", "No game open. Try :today".yellow());
            return Ok(());
        }
        Err(e) => return Err(e.to_string()),
    };

    let Some(session) = game.session() else {
        return Ok(());
    };
    let turn = session.attempts().len();

    match submission {
        Submission::Ignored(Rejection::Completed) => {
            println!("{}\n", "This game is finished. Try :history or :open".yellow());
        }
        Submission::Ignored(Rejection::InvalidYear | Rejection::EmptyName) => {}
        Submission::Accepted(guess) => {
            print_guess(turn, &guess);
            print_letter_hints(&session.letter_hints());
            println!("{} attempt(s) left\n", session.remaining());
        }
        Submission::Finished { guess, .. } => {
            print_guess(turn, &guess);
            if let Some(event) = game.target() {
                print_result(session, event);
            }
        }
    }
    Ok(())
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(LineCommand::parse(":q"), LineCommand::Quit);
        assert_eq!(LineCommand::parse(" :stats "), LineCommand::Stats);
        assert_eq!(
            LineCommand::parse(":mode name"),
            LineCommand::SwitchMode(Mode::Name)
        );
        assert_eq!(
            LineCommand::parse(":open 2024-07-20"),
            LineCommand::Open("2024-07-20".parse().unwrap())
        );
    }

    #[test]
    fn everything_else_is_a_guess() {
        assert_eq!(
            LineCommand::parse("1969"),
            LineCommand::Guess("1969".to_string())
        );
        assert_eq!(
            LineCommand::parse("Apollo 11"),
            LineCommand::Guess("Apollo 11".to_string())
        );
        assert_eq!(
            LineCommand::parse(":mode decade"),
            LineCommand::Guess(":mode decade".to_string())
        );
    }
}
