//! Game state and orchestration
//!
//! Sessions, statistics and the controller that ties them to the catalog
//! and the store.

mod clock;
mod controller;
mod session;
mod stats;

pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::{
    Controller, DEFAULT_HISTORY_DAYS, DayStatus, HistoryEntry, ModeSwitch, Rejection, Reveal,
    Submission,
};
pub use session::{Guess, MAX_ATTEMPTS, Mode, Outcome, Session, Snapshot};
pub use stats::Statistics;
