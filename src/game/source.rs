//! Word source abstraction

use crate::core::Word;

/// Provider of secret words and guess validation
///
/// A session draws its secret once when it starts and asks
/// [`is_valid_guess`](WordSource::is_valid_guess) on every submission.
pub trait WordSource {
    /// Check whether `word` is accepted as a guess
    fn is_valid_guess(&self, word: &Word) -> bool;

    /// Pick the secret word for a new game
    fn draw_secret_word(&mut self) -> Word;
}
