//! Word lists
//!
//! Embedded secret and guess lists plus [`WordList`], the standard
//! [`WordSource`](crate::game::WordSource) implementation.

mod embedded;
pub mod loader;
mod word_list;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use word_list::{WordList, WordListError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTH;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
        assert!(ANSWERS_COUNT > 0);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), WORD_LENGTH, "Word '{word}' has the wrong length");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_are_sorted_and_unique() {
        assert!(ANSWERS.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
