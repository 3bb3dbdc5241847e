//! Catalog loading utilities
//!
//! Parses the JSON event list from a file or from the embedded default.

use super::{Catalog, EMBEDDED_CATALOG, Event};
use crate::error::{GameError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Parse a catalog from JSON text
///
/// Events are sorted by date. An empty list, malformed JSON or two events
/// on the same day are all rejected.
///
/// # Errors
///
/// Returns [`GameError::CatalogLoad`] describing the first problem found.
///
/// # Examples
/// ```
/// use histodle::catalog::loader::from_json_str;
///
/// let catalog = from_json_str(
///     r#"[{"date": "1969-07-20", "year": 1969, "event": "Apollo 11", "clue": "Moon"}]"#,
/// )
/// .unwrap();
/// assert_eq!(catalog.len(), 1);
/// ```
pub fn from_json_str(json: &str) -> Result<Catalog> {
    let mut events: Vec<Event> =
        serde_json::from_str(json).map_err(|e| GameError::CatalogLoad(format!("invalid data: {e}")))?;

    if events.is_empty() {
        return Err(GameError::CatalogLoad("catalog is empty".to_string()));
    }

    events.sort_by_key(|e| e.date);

    if let Some(pair) = events.windows(2).find(|w| w[0].date == w[1].date) {
        return Err(GameError::CatalogLoad(format!(
            "more than one event on {}",
            pair[0].date
        )));
    }

    debug!(count = events.len(), "parsed event catalog");
    Ok(Catalog::from_sorted(events))
}

/// Load a catalog from a JSON file
///
/// # Errors
///
/// Returns [`GameError::CatalogLoad`] if the file cannot be read or its
/// contents are rejected by [`from_json_str`].
///
/// # Examples
/// ```no_run
/// use histodle::catalog::loader::load_from_file;
///
/// let catalog = load_from_file("data/events.json").unwrap();
/// println!("Loaded {} events", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| GameError::CatalogLoad(format!("{}: {e}", path.display())))?;

    let catalog = from_json_str(&content)?;
    info!(path = %path.display(), events = catalog.len(), "loaded event catalog");
    Ok(catalog)
}

/// Load the catalog compiled into the binary
///
/// # Errors
///
/// Returns [`GameError::CatalogLoad`] if the bundled data is invalid.
pub fn load_embedded() -> Result<Catalog> {
    from_json_str(EMBEDDED_CATALOG)
}
