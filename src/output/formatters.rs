//! Formatting utilities for terminal output

use crate::core::{Band, Direction, LetterState, YearGuess};
use crate::game::{Guess, MAX_ATTEMPTS, Outcome, Session};

/// Emoji square for a year band
#[must_use]
pub const fn band_square(band: Band) -> char {
    match band {
        Band::Exact => '🟩',
        Band::Close => '🟨',
        Band::Far => '⬛',
    }
}

/// Emoji square for a letter state
#[must_use]
pub const fn letter_square(state: LetterState) -> char {
    match state {
        LetterState::Correct => '🟩',
        LetterState::Present => '🟨',
        LetterState::Absent => '⬛',
    }
}

/// Squares for one attempt: a single square in year mode, one per letter in
/// name mode
#[must_use]
pub fn guess_to_emoji(guess: &Guess) -> String {
    match guess {
        Guess::Year(g) => band_square(g.band).to_string(),
        Guess::Name(g) => g.letters.iter().map(|l| letter_square(l.state)).collect(),
    }
}

/// Short text hint for a year guess, e.g. "close, later"
#[must_use]
pub fn year_hint(guess: &YearGuess) -> String {
    let band = match guess.band {
        Band::Exact => return "correct".to_string(),
        Band::Close => "close",
        Band::Far => "far",
    };
    match guess.direction() {
        Some(Direction::Later) => format!("{band}, later ⬆"),
        Some(Direction::Earlier) => format!("{band}, earlier ⬇"),
        None => band.to_string(),
    }
}

/// Spoiler-free summary of a finished session for sharing
///
/// # Examples
/// ```
/// use histodle::core::evaluate_year_guess;
/// use histodle::output::formatters::share_text;
/// use histodle::game::{Controller, FixedClock};
/// use histodle::storage::MemoryStore;
/// use histodle::catalog::loader::from_json_str;
///
/// let catalog = from_json_str(
///     r#"[{"date": "2024-07-20", "year": 1969, "event": "Apollo 11", "clue": "Moon"}]"#,
/// )
/// .unwrap();
/// let clock = FixedClock("2024-07-20".parse().unwrap());
/// let mut game = Controller::new(catalog, MemoryStore::new(), clock).unwrap();
/// game.open_today().unwrap();
/// game.submit_guess("1950").unwrap();
/// game.submit_guess("1969").unwrap();
///
/// let text = share_text(game.session().unwrap());
/// assert_eq!(text, "Histodle 2024-07-20 (year) 2/5\n🟨\n🟩");
/// ```
#[must_use]
pub fn share_text(session: &Session) -> String {
    let score = match session.outcome() {
        Outcome::Won => session.attempts().len().to_string(),
        Outcome::Lost | Outcome::Unset => "X".to_string(),
    };

    let mut text = format!(
        "Histodle {} ({}) {score}/{MAX_ATTEMPTS}",
        session.date(),
        session.mode()
    );
    for guess in session.attempts() {
        text.push('\n');
        text.push_str(&guess_to_emoji(guess));
    }
    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{evaluate_name_guess, evaluate_year_guess};

    #[test]
    fn year_emoji_by_band() {
        assert_eq!(
            guess_to_emoji(&Guess::Year(evaluate_year_guess(1969, 1969))),
            "🟩"
        );
        assert_eq!(
            guess_to_emoji(&Guess::Year(evaluate_year_guess(1969, 1950))),
            "🟨"
        );
        assert_eq!(
            guess_to_emoji(&Guess::Year(evaluate_year_guess(1969, 1800))),
            "⬛"
        );
    }

    #[test]
    fn name_emoji_per_letter() {
        let guess = Guess::Name(evaluate_name_guess("ROME", "MORX").unwrap());
        assert_eq!(guess_to_emoji(&guess), "🟨🟩🟨⬛");
    }

    #[test]
    fn year_hints() {
        assert_eq!(year_hint(&evaluate_year_guess(1969, 1969)), "correct");
        assert_eq!(year_hint(&evaluate_year_guess(1969, 1900)), "far, later ⬆");
        assert_eq!(
            year_hint(&evaluate_year_guess(1969, 2000)),
            "close, earlier ⬇"
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
