//! Embedded event catalog
//!
//! Bundled into the binary so the game works without a catalog file.

/// Default catalog, JSON array of `{date, year, event, clue}` records
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/events.json");
