//! Wordle Game
//!
//! A Wordle-style word guessing game: guess scoring with correct duplicate
//! letter handling, a session state machine with win streaks, and cumulative
//! letter knowledge for keyboard feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{GuessResult, Word};
//! use wordle_game::game::{GameConfig, GameOutcome, GameSession};
//! use wordle_game::wordlists::WordList;
//!
//! let mut words = WordList::embedded().unwrap().with_seed(1);
//! let mut session = GameSession::start(&mut words, &GameConfig::default(), 0);
//!
//! let secret = session.secret().text().to_string();
//! let submission = session.submit(&secret, &words).unwrap();
//! assert_eq!(submission.result, GuessResult::SOLVED);
//! assert_eq!(submission.outcome, GameOutcome::Won);
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
