//! Source of "today"

use chrono::{NaiveDate, Utc};

/// Supplies the real current date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Current UTC date, matching how daily events are keyed
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
