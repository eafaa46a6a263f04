//! Game session state machine
//!
//! A [`GameSession`] owns one secret word and drives a game from the first
//! guess to a win or loss. Word lists and randomness stay behind the
//! [`WordSource`] trait so the session itself is deterministic.

mod config;
mod error;
mod session;
mod source;
pub mod stats;
pub mod streak;

pub use config::{GameConfig, MAX_ATTEMPTS};
pub use error::SubmitError;
pub use session::{Attempt, GameOutcome, GameSession, Submission};
pub use source::WordSource;
pub use stats::Statistics;
pub use streak::StreakStore;
