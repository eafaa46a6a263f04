//! Terminal output formatting
//!
//! Coloured rendering of boards, keyboards and results for the line-based modes.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_evaluation, print_game_over, print_keyboard};
