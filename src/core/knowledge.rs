//! Cumulative letter knowledge
//!
//! Tracks the best status seen for every guessed letter over a game, which is
//! what a keyboard overlay colours its keys with.

use super::{GuessResult, LetterStatus, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Best known status per letter, upgraded monotonically
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterKnowledge {
    statuses: FxHashMap<u8, LetterStatus>,
}

impl LetterKnowledge {
    /// Create empty knowledge
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the knowledge
    ///
    /// Unseen letters are inserted; a known letter is replaced only by a
    /// strictly greater status, so `Exact` is never downgraded by a later guess
    /// that happens to score the same letter lower at another position.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessResult, LetterKnowledge, LetterStatus, Word};
    ///
    /// let secret = Word::new("alloy").unwrap();
    /// let guess = Word::new("lolly").unwrap();
    ///
    /// let mut knowledge = LetterKnowledge::new();
    /// knowledge.update(&GuessResult::evaluate(&secret, &guess), &guess);
    ///
    /// // L scored misplaced, exact and absent in the same guess
    /// assert_eq!(knowledge.status(b'l'), Some(LetterStatus::Exact));
    /// assert_eq!(knowledge.status(b'a'), None);
    /// ```
    pub fn update(&mut self, result: &GuessResult, guess: &Word) {
        for i in 0..WORD_LENGTH {
            self.record(guess.letter_at(i), result.status_at(i));
        }
    }

    fn record(&mut self, letter: u8, candidate: LetterStatus) {
        self.statuses
            .entry(letter)
            .and_modify(|known| {
                if candidate > *known {
                    *known = candidate;
                }
            })
            .or_insert(candidate);
    }

    /// Best known status for a letter, `None` if it has not been guessed
    ///
    /// Uppercase letters are looked up as lowercase.
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<LetterStatus> {
        self.statuses.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Snapshot of all known letters, sorted alphabetically
    #[must_use]
    pub fn snapshot(&self) -> Vec<(u8, LetterStatus)> {
        let mut entries: Vec<_> = self.statuses.iter().map(|(&l, &s)| (l, s)).collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }

    /// Number of letters guessed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Forget everything, for a new game
    pub fn clear(&mut self) {
        self.statuses.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Exact, Misplaced};
    use super::*;
    use crate::core::evaluate;
    use proptest::prelude::*;

    fn fold(knowledge: &mut LetterKnowledge, secret: &str, guess: &str) {
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        knowledge.update(&evaluate(&secret, &guess), &guess);
    }

    #[test]
    fn starts_empty() {
        let knowledge = LetterKnowledge::new();
        assert!(knowledge.is_empty());
        assert_eq!(knowledge.status(b'a'), None);
        assert!(knowledge.snapshot().is_empty());
    }

    #[test]
    fn misplaced_then_exact_upgrades() {
        let mut knowledge = LetterKnowledge::new();
        fold(&mut knowledge, "crane", "react"); // C misplaced
        assert_eq!(knowledge.status(b'c'), Some(Misplaced));

        fold(&mut knowledge, "crane", "cabin"); // C exact
        assert_eq!(knowledge.status(b'c'), Some(Exact));
    }

    #[test]
    fn exact_then_misplaced_keeps_exact() {
        let mut knowledge = LetterKnowledge::new();
        fold(&mut knowledge, "crane", "cabin"); // C exact
        fold(&mut knowledge, "crane", "react"); // C misplaced
        assert_eq!(knowledge.status(b'c'), Some(Exact));
    }

    #[test]
    fn absent_is_recorded_and_upgradable() {
        let mut knowledge = LetterKnowledge::new();
        fold(&mut knowledge, "alloy", "lolly");
        // Third L scored absent, but another L was exact in the same guess
        assert_eq!(knowledge.status(b'l'), Some(Exact));
        assert_eq!(knowledge.status(b'o'), Some(Misplaced));
        assert_eq!(knowledge.status(b'y'), Some(Exact));

        fold(&mut knowledge, "alloy", "stamp");
        assert_eq!(knowledge.status(b's'), Some(Absent));
        assert_eq!(knowledge.status(b'a'), Some(Misplaced));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut knowledge = LetterKnowledge::new();
        fold(&mut knowledge, "crane", "crane");
        assert_eq!(knowledge.status(b'C'), Some(Exact));
    }

    #[test]
    fn snapshot_is_sorted() {
        let mut knowledge = LetterKnowledge::new();
        fold(&mut knowledge, "crane", "slate");
        let letters: Vec<u8> = knowledge.snapshot().iter().map(|&(l, _)| l).collect();
        assert_eq!(letters, b"aelst".to_vec());
        assert_eq!(knowledge.len(), 5);

        knowledge.clear();
        assert!(knowledge.is_empty());
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        "[a-f]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn statuses_never_decrease(
            secret in word_strategy(),
            guesses in proptest::collection::vec(word_strategy(), 1..8),
        ) {
            let mut knowledge = LetterKnowledge::new();
            for guess in &guesses {
                let before = knowledge.clone();
                knowledge.update(&evaluate(&secret, guess), guess);
                for (letter, status) in before.snapshot() {
                    prop_assert!(knowledge.status(letter) >= Some(status));
                }
            }
        }
    }
}
