//! Keyboard hint aggregate
//!
//! Tracks the best state ever observed for each letter across a session's
//! name guesses.

use super::{LetterState, NameGuess};
use rustc_hash::FxHashMap;

/// Best-known state per letter, never downgraded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterHints {
    best: FxHashMap<char, LetterState>,
}

impl LetterHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build hints from a sequence of name guesses
    pub fn from_guesses<'a>(guesses: impl IntoIterator<Item = &'a NameGuess>) -> Self {
        let mut hints = Self::new();
        for guess in guesses {
            hints.absorb(guess);
        }
        hints
    }

    /// Merge one guess into the aggregate
    pub fn absorb(&mut self, guess: &NameGuess) {
        for feedback in &guess.letters {
            self.upgrade(feedback.letter, feedback.state);
        }
    }

    fn upgrade(&mut self, letter: char, state: LetterState) {
        self.best
            .entry(letter)
            .and_modify(|best| *best = (*best).max(state))
            .or_insert(state);
    }

    /// Best state seen for `letter`, if it was ever guessed
    ///
    /// Lookups are case-insensitive for letters with a single-char uppercase.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterState> {
        let mut upper = letter.to_uppercase();
        let key = match (upper.next(), upper.next()) {
            (Some(u), None) => u,
            _ => letter,
        };
        self.best.get(&key).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// All hinted letters in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<(char, LetterState)> {
        let mut entries: Vec<_> = self.best.iter().map(|(&c, &s)| (c, s)).collect();
        entries.sort_unstable_by_key(|&(c, _)| c);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate_name_guess;

    #[test]
    fn empty_hints() {
        let hints = LetterHints::new();
        assert!(hints.is_empty());
        assert_eq!(hints.get('A'), None);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut hints = LetterHints::new();

        // R correct at index 0
        hints.absorb(&evaluate_name_guess("ROME", "RXXX").unwrap());
        assert_eq!(hints.get('R'), Some(LetterState::Correct));

        // R now misplaced, and a second R absent
        hints.absorb(&evaluate_name_guess("ROME", "XRRX").unwrap());
        assert_eq!(hints.get('R'), Some(LetterState::Correct));
    }

    #[test]
    fn present_upgrades_to_correct() {
        let mut hints = LetterHints::new();

        hints.absorb(&evaluate_name_guess("ROME", "XXXR").unwrap());
        assert_eq!(hints.get('R'), Some(LetterState::Present));
        assert_eq!(hints.get('X'), Some(LetterState::Absent));

        hints.absorb(&evaluate_name_guess("ROME", "RXXX").unwrap());
        assert_eq!(hints.get('R'), Some(LetterState::Correct));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let hints = LetterHints::from_guesses([&evaluate_name_guess("ROME", "rome").unwrap()]);
        assert_eq!(hints.get('r'), Some(LetterState::Correct));
        assert_eq!(hints.get('M'), Some(LetterState::Correct));
    }

    #[test]
    fn sorted_is_alphabetical() {
        let hints = LetterHints::from_guesses([&evaluate_name_guess("ROME", "MORE").unwrap()]);
        let letters: Vec<char> = hints.sorted().into_iter().map(|(c, _)| c).collect();
        assert_eq!(letters, vec!['E', 'M', 'O', 'R']);
    }
}
