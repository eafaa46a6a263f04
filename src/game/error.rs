//! Submission errors

use crate::core::WORD_LENGTH;
use std::fmt;

/// Why a guess was rejected
///
/// A rejected guess never changes the session, so every variant is
/// recoverable: the caller re-prompts and tries again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The guess does not have exactly `WORD_LENGTH` letters
    InvalidLength(usize),
    /// The guess contains something other than ASCII letters
    InvalidCharacters,
    /// The word source does not recognise the guess
    NotInDictionary(String),
    /// The game has already been won or lost
    GameAlreadyOver,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) if *len < WORD_LENGTH => write!(f, "Not enough letters"),
            Self::InvalidLength(_) => write!(f, "Too many letters"),
            Self::InvalidCharacters => write!(f, "Guess must contain only letters"),
            Self::NotInDictionary(word) => {
                write!(f, "'{}' is not in the word list", word.to_uppercase())
            }
            Self::GameAlreadyOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for SubmitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_describe_the_problem() {
        assert_eq!(SubmitError::InvalidLength(3).to_string(), "Not enough letters");
        assert_eq!(SubmitError::InvalidLength(7).to_string(), "Too many letters");
        assert_eq!(
            SubmitError::NotInDictionary("xyzzy".into()).to_string(),
            "'XYZZY' is not in the word list"
        );
    }
}
