//! Daily event catalog
//!
//! One historical event per calendar day, loaded once at start-up and
//! read-only afterwards.

mod embedded;
pub mod loader;

pub use embedded::EMBEDDED_CATALOG;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single day's event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub date: NaiveDate,
    pub year: i32,
    pub event: String,
    pub clue: String,
}

/// Events ordered by date, one per day
#[derive(Debug, Clone)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// Build from events already sorted by date with unique dates
    ///
    /// Only [`loader`] constructs catalogs; it validates both properties.
    pub(crate) const fn from_sorted(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Event scheduled for `date`
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&Event> {
        self.events
            .binary_search_by_key(&date, |e| e.date)
            .ok()
            .map(|i| &self.events[i])
    }

    /// Most recent event in the catalog
    #[must_use]
    pub fn latest(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Events strictly before `date`
    #[must_use]
    pub fn before(&self, date: NaiveDate) -> &[Event] {
        let end = self.events.partition_point(|e| e.date < date);
        &self.events[..end]
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn catalog() -> Catalog {
        let events = ["2024-01-01", "2024-01-02", "2024-01-04"]
            .iter()
            .enumerate()
            .map(|(i, d)| Event {
                date: date(d),
                year: 1900 + i as i32,
                event: format!("Event {i}"),
                clue: String::new(),
            })
            .collect();
        Catalog::from_sorted(events)
    }

    #[test]
    fn get_by_date() {
        let catalog = catalog();
        assert_eq!(catalog.get(date("2024-01-02")).unwrap().year, 1901);
        assert!(catalog.get(date("2024-01-03")).is_none());
    }

    #[test]
    fn latest_is_last_date() {
        assert_eq!(catalog().latest().unwrap().date, date("2024-01-04"));
    }

    #[test]
    fn before_is_exclusive() {
        let catalog = catalog();
        assert_eq!(catalog.before(date("2024-01-02")).len(), 1);
        assert_eq!(catalog.before(date("2024-01-03")).len(), 2);
        assert!(catalog.before(date("2023-12-31")).is_empty());
    }
}
