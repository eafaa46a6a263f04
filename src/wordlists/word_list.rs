//! In-memory word list with secret rotation

use super::loader::{load_from_file, words_from_slice};
use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use crate::game::WordSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::Path;
use tracing::debug;

/// Error type for word lists that cannot be used
#[derive(Debug)]
pub enum WordListError {
    /// The list has no possible secret words
    Empty,
    Io(io::Error),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no valid words"),
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for WordListError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Secret pool plus guess dictionary
///
/// Secrets are drawn at random without repetition: a word is not drawn again
/// until every answer has had its turn, after which the rotation restarts.
#[derive(Debug, Clone)]
pub struct WordList {
    answers: Vec<Word>,
    dictionary: FxHashSet<Word>,
    used: FxHashSet<usize>,
    rng: StdRng,
}

impl WordList {
    /// Build a word list from secret candidates and extra guessable words
    ///
    /// Every answer is also a valid guess.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Empty`] if `answers` is empty.
    pub fn new(answers: Vec<Word>, allowed: Vec<Word>) -> Result<Self, WordListError> {
        if answers.is_empty() {
            return Err(WordListError::Empty);
        }

        let mut dictionary: FxHashSet<Word> = allowed.into_iter().collect();
        dictionary.extend(answers.iter().cloned());

        Ok(Self {
            answers,
            dictionary,
            used: FxHashSet::default(),
            rng: StdRng::from_os_rng(),
        })
    }

    /// The lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Empty`] if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Load a custom list; every word in the file is both a secret and a guess
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let words = load_from_file(path)?;
        Self::new(words, Vec::new())
    }

    /// Use a deterministic random sequence
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Check whether `word` is in the dictionary
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.dictionary.contains(word)
    }

    /// Number of possible secret words
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of accepted guesses, answers included
    #[must_use]
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }
}

impl WordSource for WordList {
    fn is_valid_guess(&self, word: &Word) -> bool {
        self.contains(word)
    }

    fn draw_secret_word(&mut self) -> Word {
        if self.used.len() >= self.answers.len() {
            debug!(answers = self.answers.len(), "all secrets used, restarting rotation");
            self.used.clear();
        }

        let unused: Vec<usize> = (0..self.answers.len())
            .filter(|i| !self.used.contains(i))
            .collect();
        let index = unused[self.rng.random_range(0..unused.len())];
        self.used.insert(index);

        self.answers[index].clone()
    }
}
