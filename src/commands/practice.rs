//! Practice mode
//!
//! Replays a random past day. Replays never touch statistics.

use super::run_simple;
use crate::game::{Clock, Controller};
use crate::storage::KeyValueStore;
use rand::Rng;

/// Replay a random earlier event in the simple CLI loop
///
/// # Errors
///
/// Returns an error if the catalog has no event before today, or if the game
/// loop fails.
pub fn run_practice<S: KeyValueStore, C: Clock, R: Rng + ?Sized>(
    game: &mut Controller<S, C>,
    rng: &mut R,
) -> Result<(), String> {
    let date = game
        .random_past_date(rng)
        .ok_or("No past events to practice on")?;
    run_simple(game, Some(date))
}
