//! Core game rules
//!
//! Pure domain types: words, per-letter statuses, guess scoring and the
//! cumulative letter knowledge that drives keyboard feedback. Nothing here
//! performs I/O or holds state across guesses except [`LetterKnowledge`].

mod feedback;
mod knowledge;
mod status;
mod word;

pub use feedback::{GuessResult, evaluate};
pub use knowledge::LetterKnowledge;
pub use status::LetterStatus;
pub use word::{WORD_LENGTH, Word, WordError};
