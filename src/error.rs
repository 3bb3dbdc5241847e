//! Library error type

use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced by the catalog, the store and the session controller
///
/// Invalid guesses are not errors; see [`crate::game::Submission::Ignored`].
#[derive(Debug, Error)]
pub enum GameError {
    #[error("no event for {0}")]
    NoEventForDate(NaiveDate),

    #[error("the event for {0} isn't out yet")]
    FutureDate(NaiveDate),

    #[error("could not load event catalog: {0}")]
    CatalogLoad(String),

    #[error("no game is open")]
    NoActiveSession,

    #[error("game for {0} is already finished")]
    SessionCompleted(NaiveDate),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
