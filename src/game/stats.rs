//! Per-process play statistics

use super::{GameOutcome, GameSession};
use std::collections::BTreeMap;

/// Running totals over the games played in this process
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Number of wins keyed by guesses used
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    /// Start from a streak loaded from persistent storage
    #[must_use]
    pub fn with_streak(streak: u32) -> Self {
        Self {
            current_streak: streak,
            max_streak: streak,
            ..Self::default()
        }
    }

    /// Record a finished game
    ///
    /// Returns `false` and records nothing if the game is still in progress.
    pub fn record(&mut self, session: &GameSession) -> bool {
        match session.outcome() {
            GameOutcome::InProgress => return false,
            GameOutcome::Won => {
                self.games_won += 1;
                *self
                    .guess_distribution
                    .entry(session.attempt_index())
                    .or_insert(0) += 1;
            }
            GameOutcome::Lost => {}
        }

        self.games_played += 1;
        self.current_streak = session.win_streak();
        self.max_streak = self.max_streak.max(self.current_streak);
        true
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameConfig;
    use crate::wordlists::WordList;

    fn words() -> WordList {
        let dictionary = ["crane", "slate"].iter().map(|w| Word::new(w).unwrap()).collect();
        WordList::new(vec![Word::new("crane").unwrap()], dictionary).unwrap()
    }

    #[test]
    fn in_progress_game_is_not_recorded() {
        let session = GameSession::new(Word::new("crane").unwrap(), &GameConfig::default(), 0);
        let mut stats = Statistics::default();
        assert!(!stats.record(&session));
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn wins_and_losses_are_tallied() {
        let words = words();
        let mut stats = Statistics::with_streak(2);

        let mut won = GameSession::new(Word::new("crane").unwrap(), &GameConfig::default(), 2);
        won.submit("slate", &words).unwrap();
        won.submit("crane", &words).unwrap();
        assert!(stats.record(&won));

        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.guess_distribution.get(&2), Some(&1));

        let config = GameConfig::new().with_max_attempts(1);
        let mut lost = GameSession::new(Word::new("crane").unwrap(), &config, 3);
        lost.submit("slate", &words).unwrap();
        assert!(stats.record(&lost));

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 3);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }
}
