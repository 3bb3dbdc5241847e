//! Guess evaluation
//!
//! Pure scoring functions for both game modes. Nothing in here touches
//! storage or the terminal.

mod hints;
mod name;
mod year;

pub use hints::LetterHints;
pub use name::{LetterFeedback, LetterState, NameGuess, evaluate_name_guess, normalize};
pub use year::{Band, CLOSE_THRESHOLD, Direction, YearGuess, evaluate_year_guess, parse_year};
