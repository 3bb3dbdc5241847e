//! Durable key-value persistence
//!
//! The game only needs a string-keyed, string-valued store with synchronous
//! get/set. One key holds the aggregate statistics; every played date gets
//! its own snapshot key.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::{GameError, Result};
use crate::game::{Session, Snapshot, Statistics};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Key holding the aggregate statistics record
pub const STATS_KEY: &str = "histodle-stats";

/// Synchronous string key-value store
pub trait KeyValueStore {
    /// Read a value
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Storage`] if the backing medium fails.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Storage`] if the backing medium fails.
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// Snapshot key for a date
#[must_use]
pub fn snapshot_key(date: NaiveDate) -> String {
    format!("histodle-game-{date}")
}

/// Persist `session` under its date (last write wins)
///
/// # Errors
///
/// Returns [`GameError::Storage`] if serialization or the store fails.
pub fn save_snapshot<S: KeyValueStore + ?Sized>(store: &mut S, session: &Session) -> Result<()> {
    let json = serde_json::to_string(&session.snapshot())
        .map_err(|e| GameError::Storage(e.to_string()))?;
    store.set(&snapshot_key(session.date()), json)?;
    debug!(date = %session.date(), attempts = session.attempts().len(), "saved snapshot");
    Ok(())
}

/// Load the session persisted for `date`
///
/// A snapshot that fails to parse is logged and treated as never played.
///
/// # Errors
///
/// Returns [`GameError::Storage`] if the store itself fails.
pub fn load_snapshot<S: KeyValueStore + ?Sized>(
    store: &S,
    date: NaiveDate,
) -> Result<Option<Session>> {
    let Some(json) = store.get(&snapshot_key(date))? else {
        return Ok(None);
    };

    match serde_json::from_str::<Snapshot>(&json) {
        Ok(snapshot) => Ok(Some(Session::from_snapshot(date, snapshot))),
        Err(e) => {
            warn!(%date, error = %e, "discarding unreadable snapshot");
            Ok(None)
        }
    }
}

/// Load aggregate statistics, defaulting when absent or unreadable
///
/// # Errors
///
/// Returns [`GameError::Storage`] if the store itself fails.
pub fn load_statistics<S: KeyValueStore + ?Sized>(store: &S) -> Result<Statistics> {
    let Some(json) = store.get(STATS_KEY)? else {
        return Ok(Statistics::default());
    };

    Ok(serde_json::from_str(&json).unwrap_or_else(|e| {
        warn!(error = %e, "statistics unreadable, starting fresh");
        Statistics::default()
    }))
}

/// Persist aggregate statistics
///
/// # Errors
///
/// Returns [`GameError::Storage`] if serialization or the store fails.
pub fn save_statistics<S: KeyValueStore + ?Sized>(store: &mut S, stats: &Statistics) -> Result<()> {
    let json = serde_json::to_string(stats).map_err(|e| GameError::Storage(e.to_string()))?;
    store.set(STATS_KEY, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate_year_guess;
    use crate::game::{Guess, Mode, Outcome};

    fn date() -> NaiveDate {
        "2024-07-20".parse().unwrap()
    }

    #[test]
    fn snapshot_key_format() {
        assert_eq!(snapshot_key(date()), "histodle-game-2024-07-20");
    }

    #[test]
    fn missing_snapshot_is_none() {
        let store = MemoryStore::new();
        assert!(load_snapshot(&store, date()).unwrap().is_none());
    }

    #[test]
    fn snapshot_restores_structured_attempts() {
        let mut store = MemoryStore::new();
        let mut session = Session::new(date(), Mode::Year);
        session.push(Guess::Year(evaluate_year_guess(1969, 1900)));
        session.push(Guess::Year(evaluate_year_guess(1969, 1969)));
        session.finish(Outcome::Won);

        save_snapshot(&mut store, &session).unwrap();
        let restored = load_snapshot(&store, date()).unwrap().unwrap();

        assert_eq!(restored, session);
        assert!(restored.is_completed());
    }

    #[test]
    fn unreadable_snapshot_is_none() {
        let mut store = MemoryStore::new();
        store
            .set(&snapshot_key(date()), "<div class=\"correct\">".to_string())
            .unwrap();
        assert!(load_snapshot(&store, date()).unwrap().is_none());
    }

    #[test]
    fn statistics_default_when_absent_or_corrupt() {
        let mut store = MemoryStore::new();
        assert_eq!(load_statistics(&store).unwrap(), Statistics::default());

        store.set(STATS_KEY, "{broken".to_string()).unwrap();
        assert_eq!(load_statistics(&store).unwrap(), Statistics::default());
    }

    #[test]
    fn statistics_persist() {
        let mut store = MemoryStore::new();
        let mut stats = Statistics::default();
        stats.record(date(), Outcome::Won, 3);

        save_statistics(&mut store, &stats).unwrap();
        assert_eq!(load_statistics(&store).unwrap(), stats);
    }
}
