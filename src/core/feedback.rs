//! Guess scoring
//!
//! A [`GuessResult`] is the per-position feedback for one guess against the
//! secret word. Scoring is a pure function of the two words: it keeps no
//! memory of earlier guesses.

use super::{LetterStatus, WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a whole guess, positionally aligned with the guessed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult([LetterStatus; WORD_LENGTH]);

/// Score `guess` against `secret`
///
/// Shorthand for [`GuessResult::evaluate`].
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> GuessResult {
    GuessResult::evaluate(secret, guess)
}

impl GuessResult {
    /// Every letter in the right place
    pub const SOLVED: Self = Self([LetterStatus::Exact; WORD_LENGTH]);

    /// Build a result from explicit statuses
    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Duplicate letters are resolved with a remaining-count table built from
    /// the secret word:
    /// 1. First pass: mark exact matches and consume them from the table
    /// 2. Second pass, left to right: a letter with a remaining count is
    ///    misplaced and consumes one count; otherwise it is absent
    ///
    /// A guess can therefore never receive more non-absent marks for a letter
    /// than the secret contains, and earlier positions claim counts first.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessResult, LetterStatus::*, Word};
    ///
    /// let secret = Word::new("alloy").unwrap();
    /// let guess = Word::new("lolly").unwrap();
    ///
    /// let result = GuessResult::evaluate(&secret, &guess);
    /// assert_eq!(
    ///     result.statuses(),
    ///     &[Misplaced, Misplaced, Exact, Absent, Exact]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut remaining = secret.letter_counts();

        // Allow: Index needed to compare guess[i] with secret[i] and set statuses[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.letter_at(i);
            if letter == secret.letter_at(i) {
                statuses[i] = LetterStatus::Exact;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, status) in statuses.iter_mut().enumerate() {
            if *status == LetterStatus::Exact {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                *status = LetterStatus::Misplaced;
                *count -= 1;
            }
        }

        Self(statuses)
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check if every position is exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Exact)
    }

    /// Count the exact positions
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(LetterStatus::Exact)
    }

    /// Count the misplaced positions
    #[must_use]
    pub fn count_misplaced(&self) -> usize {
        self.count(LetterStatus::Misplaced)
    }

    fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Render as a code string: `*` exact, `+` misplaced, `-` absent
    ///
    /// ```
    /// use wordle_game::core::{GuessResult, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// assert_eq!(GuessResult::evaluate(&secret, &guess).to_code(), "--*-*");
    /// ```
    #[must_use]
    pub fn to_code(&self) -> String {
        self.0.iter().map(|s| s.code()).collect()
    }

    /// Render as coloured squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}

impl std::str::FromStr for GuessResult {
    type Err = String;

    /// Parse feedback such as "GY-GY", "*+-*+" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid feedback string: {s}"));
        }

        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        for (status, ch) in statuses.iter_mut().zip(chars) {
            *status =
                LetterStatus::from_char(ch).ok_or_else(|| format!("Invalid feedback string: {s}"))?;
        }

        Ok(Self(statuses))
    }
}
