//! Game configuration

/// Default number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Settings that stay fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Override the attempt limit; a limit of zero is raised to one
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = if max_attempts == 0 { 1 } else { max_attempts };
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
