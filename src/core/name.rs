//! Name-mode feedback
//!
//! Wordle scoring applied to the whole event name. Both sides are normalized
//! (uppercased, whitespace removed) so scoring runs over the concatenated
//! letter sequence and spans word boundaries.

use serde::{Deserialize, Serialize};

/// Per-letter match state
///
/// Variants are ordered by priority, so `Ord` gives the aggregate hint rule
/// directly: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

/// One scored letter of a name guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterFeedback {
    pub letter: char,
    pub state: LetterState,
}

/// Feedback for a single name guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameGuess {
    pub normalized: String,
    pub letters: Vec<LetterFeedback>,
    win: bool,
}

impl NameGuess {
    /// True when the normalized guess equals the normalized answer
    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.win
    }

    /// Count letters in the correct position
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.letters
            .iter()
            .filter(|l| l.state == LetterState::Correct)
            .count()
    }

    /// Count letters present elsewhere in the answer
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.letters
            .iter()
            .filter(|l| l.state == LetterState::Present)
            .count()
    }
}

/// Uppercase and strip all whitespace
///
/// Idempotent: normalizing a normalized string returns it unchanged.
///
/// # Examples
/// ```
/// use histodle::core::normalize;
///
/// assert_eq!(normalize("Apollo 11"), "APOLLO11");
/// assert_eq!(normalize(&normalize(" fall of\trome ")), "FALLOFROME");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Score `raw_guess` against the event name `target`
///
/// Returns `None` when the guess is empty after normalization.
///
/// # Algorithm
/// 1. First pass: letters matching the answer at the same index are
///    `Correct` and consume that answer position
/// 2. Second pass: every other guess letter takes the first unconsumed
///    answer position holding the same letter (`Present`), or is `Absent`
///
/// Guess letters past the end of the answer can only be `Present` or
/// `Absent`.
///
/// # Examples
/// ```
/// use histodle::core::{LetterState, evaluate_name_guess};
///
/// let feedback = evaluate_name_guess("Apollo 11", "apollo 12").unwrap();
/// assert_eq!(feedback.letters[6].state, LetterState::Correct);
/// assert_eq!(feedback.letters[7].state, LetterState::Absent);
/// assert!(!feedback.is_win());
/// ```
#[must_use]
pub fn evaluate_name_guess(target: &str, raw_guess: &str) -> Option<NameGuess> {
    let normalized = normalize(raw_guess);
    if normalized.is_empty() {
        return None;
    }

    let answer: Vec<char> = normalize(target).chars().collect();
    let guess: Vec<char> = normalized.chars().collect();

    let mut states = vec![LetterState::Absent; guess.len()];
    let mut consumed = vec![false; answer.len()];

    // First pass: exact positions
    for (i, (g, a)) in guess.iter().zip(&answer).enumerate() {
        if g == a {
            states[i] = LetterState::Correct;
            consumed[i] = true;
        }
    }

    // Second pass: present elsewhere, first unconsumed match only
    for (i, g) in guess.iter().enumerate() {
        if states[i] == LetterState::Correct {
            continue;
        }
        let slot = answer
            .iter()
            .zip(consumed.iter())
            .position(|(a, &used)| !used && a == g);
        if let Some(j) = slot {
            consumed[j] = true;
            states[i] = LetterState::Present;
        }
    }

    let win = guess == answer;
    let letters = guess
        .into_iter()
        .zip(states)
        .map(|(letter, state)| LetterFeedback { letter, state })
        .collect();

    Some(NameGuess {
        normalized,
        letters,
        win,
    })
}
