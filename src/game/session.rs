//! Game session

use super::{GameConfig, SubmitError, WordSource};
use crate::core::{GuessResult, LetterKnowledge, Word, WordError, evaluate};
use tracing::{debug, info};

/// State of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    /// Check if the game has ended, either way
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One accepted guess and its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub result: GuessResult,
}

/// What an accepted guess produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub result: GuessResult,
    pub outcome: GameOutcome,
}

/// A single game against one secret word
///
/// The session only changes through [`submit`](GameSession::submit), which
/// either applies a guess completely or rejects it without touching any state.
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    max_attempts: usize,
    attempts: Vec<Attempt>,
    outcome: GameOutcome,
    knowledge: LetterKnowledge,
    win_streak: u32,
}

impl GameSession {
    /// Create a session for a known secret word
    ///
    /// `win_streak` is the streak carried in from earlier games (0 for none).
    #[must_use]
    pub fn new(secret: Word, config: &GameConfig, win_streak: u32) -> Self {
        Self {
            secret,
            max_attempts: config.max_attempts.max(1),
            attempts: Vec::new(),
            outcome: GameOutcome::InProgress,
            knowledge: LetterKnowledge::new(),
            win_streak,
        }
    }

    /// Start a session with a secret drawn from `source`
    pub fn start<S: WordSource + ?Sized>(
        source: &mut S,
        config: &GameConfig,
        win_streak: u32,
    ) -> Self {
        let secret = source.draw_secret_word();
        debug!(max_attempts = config.max_attempts, win_streak, "new game started");
        Self::new(secret, config, win_streak)
    }

    /// Start the following game, carrying over the attempt limit and streak
    pub fn next_game<S: WordSource + ?Sized>(&self, source: &mut S) -> Self {
        let config = GameConfig::new().with_max_attempts(self.max_attempts);
        Self::start(source, &config, self.win_streak)
    }

    /// Submit a guess
    ///
    /// Checks run in order: game over, length, characters, dictionary. The
    /// first failing check is returned and the session is left untouched.
    /// Otherwise the guess is scored, recorded, folded into the letter
    /// knowledge, and the outcome is updated.
    ///
    /// # Errors
    /// Returns [`SubmitError`] when the guess is rejected.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameConfig, GameOutcome, GameSession, SubmitError};
    /// use wordle_game::wordlists::WordList;
    ///
    /// let words = WordList::new(
    ///     vec![Word::new("crane").unwrap()],
    ///     vec![Word::new("slate").unwrap()],
    /// )
    /// .unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let mut session = GameSession::new(secret, &GameConfig::default(), 0);
    ///
    /// assert_eq!(session.submit("cran", &words), Err(SubmitError::InvalidLength(4)));
    ///
    /// let submission = session.submit("crane", &words).unwrap();
    /// assert!(submission.result.is_solved());
    /// assert_eq!(submission.outcome, GameOutcome::Won);
    /// assert_eq!(session.win_streak(), 1);
    /// ```
    pub fn submit<S: WordSource + ?Sized>(
        &mut self,
        guess: &str,
        source: &S,
    ) -> Result<Submission, SubmitError> {
        let guess = self.validate(guess, source).inspect_err(|error| {
            debug!(%error, "guess rejected");
        })?;

        let result = evaluate(&self.secret, &guess);
        self.knowledge.update(&result, &guess);
        debug!(
            guess = %guess,
            result = %result,
            attempt = self.attempts.len() + 1,
            "guess accepted"
        );
        self.attempts.push(Attempt { guess, result });

        if result.is_solved() {
            self.outcome = GameOutcome::Won;
            self.win_streak += 1;
        } else if self.attempts.len() >= self.max_attempts {
            self.outcome = GameOutcome::Lost;
            self.win_streak = 0;
        }

        if self.outcome.is_over() {
            info!(
                outcome = ?self.outcome,
                attempts = self.attempts.len(),
                win_streak = self.win_streak,
                "game over"
            );
        }

        Ok(Submission {
            result,
            outcome: self.outcome,
        })
    }

    /// Give up the current game
    ///
    /// An abandoned game counts as lost: the outcome becomes `Lost` and the
    /// win streak resets. The attempt index stays where it was. Returns
    /// `false` and changes nothing if the game is already over.
    pub fn forfeit(&mut self) -> bool {
        if self.outcome.is_over() {
            return false;
        }

        self.outcome = GameOutcome::Lost;
        self.win_streak = 0;
        info!(attempts = self.attempts.len(), "game forfeited");
        true
    }

    fn validate<S: WordSource + ?Sized>(&self, guess: &str, source: &S) -> Result<Word, SubmitError> {
        if self.outcome.is_over() {
            return Err(SubmitError::GameAlreadyOver);
        }

        let guess = Word::new(guess).map_err(|e| match e {
            WordError::InvalidLength(len) => SubmitError::InvalidLength(len),
            WordError::NonAscii | WordError::InvalidCharacters => SubmitError::InvalidCharacters,
        })?;

        if !source.is_valid_guess(&guess) {
            return Err(SubmitError::NotInDictionary(guess.text().to_string()));
        }

        Ok(guess)
    }

    /// The secret word, for revealing once the game is over
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Number of accepted guesses so far
    #[must_use]
    pub fn attempt_index(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Guesses left before the game is lost (0 once the game is over)
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        if self.is_over() {
            0
        } else {
            self.max_attempts - self.attempts.len()
        }
    }

    /// Accepted guesses with their scores, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Scores of the accepted guesses, oldest first
    pub fn history(&self) -> impl Iterator<Item = &GuessResult> {
        self.attempts.iter().map(|attempt| &attempt.result)
    }

    /// Best known status of every guessed letter
    #[must_use]
    pub const fn knowledge(&self) -> &LetterKnowledge {
        &self.knowledge
    }

    /// Consecutive wins including this game if it has been won
    #[must_use]
    pub const fn win_streak(&self) -> u32 {
        self.win_streak
    }
}
