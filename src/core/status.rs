//! Per-letter feedback status

use std::fmt;

/// Feedback for a single letter of a guess
///
/// Variants are declared in ascending order of information, so the derived
/// `Ord` gives `Absent < Misplaced < Exact`. Letter knowledge relies on this
/// ordering to upgrade a letter's status and never downgrade it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// No unmatched occurrence of the letter remains in the secret word
    Absent,
    /// The letter occurs in the secret word, but not at this position
    Misplaced,
    /// The letter occupies this position in the secret word
    Exact,
}

impl LetterStatus {
    /// All statuses in ascending order
    pub const ALL: [Self; 3] = [Self::Absent, Self::Misplaced, Self::Exact];

    /// Single-character code: `*` exact, `+` misplaced, `-` absent
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => '*',
            Self::Misplaced => '+',
            Self::Absent => '-',
        }
    }

    /// Coloured square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a status from one feedback character
    ///
    /// Accepts `G`/`g`/`*`/🟩, `Y`/`y`/`+`/🟨 and `-`/`_`/`.`/⬜ (also ⬛).
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '*' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '+' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exact => "exact",
            Self::Misplaced => "misplaced",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ordering() {
        assert!(LetterStatus::Absent < LetterStatus::Misplaced);
        assert!(LetterStatus::Misplaced < LetterStatus::Exact);
        assert_eq!(
            LetterStatus::Absent.max(LetterStatus::Exact),
            LetterStatus::Exact
        );
    }

    #[test]
    fn status_char_round_trip() {
        for status in LetterStatus::ALL {
            assert_eq!(LetterStatus::from_char(status.code()), Some(status));
            assert_eq!(LetterStatus::from_char(status.emoji()), Some(status));
        }
        assert_eq!(LetterStatus::from_char('x'), None);
    }
}
