//! Command implementations

pub mod guess;
pub mod practice;
pub mod simple;

pub use guess::{GuessConfig, GuessResult, play_guess, run_guess};
pub use practice::run_practice;
pub use simple::{LineCommand, run_simple};
