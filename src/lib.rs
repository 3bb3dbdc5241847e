//! Histodle
//!
//! A daily history guessing game: find the year of today's event, or its
//! name, in five attempts.
//!
//! # Quick Start
//!
//! ```rust
//! use histodle::catalog::loader::load_embedded;
//! use histodle::game::{Controller, FixedClock, Submission};
//! use histodle::storage::MemoryStore;
//!
//! let catalog = load_embedded().unwrap();
//! let today = "2026-10-19".parse().unwrap();
//! let mut game = Controller::new(catalog, MemoryStore::new(), FixedClock(today)).unwrap();
//!
//! game.open_today().unwrap();
//! let result = game.submit_guess("1969").unwrap();
//! assert!(!matches!(result, Submission::Ignored(_)));
//! ```

// Guess evaluation
pub mod core;

// Daily events
pub mod catalog;

// Sessions, statistics, controller
pub mod game;

// Key-value persistence
pub mod storage;

// Runtime configuration
pub mod config;

mod error;
pub use error::{GameError, Result};

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
