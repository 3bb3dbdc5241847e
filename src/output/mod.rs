//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_attempts, print_event_header, print_guess, print_history, print_letter_hints,
    print_result, print_statistics,
};
