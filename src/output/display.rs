//! Display functions for CLI output

use super::formatters::{keyboard_layout, performance_label, share_text};
use crate::core::{GuessResult, LetterKnowledge, LetterStatus, Word};
use crate::game::{GameOutcome, GameSession, Statistics};
use colored::{ColoredString, Colorize};

fn tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        Some(LetterStatus::Exact) => text.black().on_green().bold(),
        Some(LetterStatus::Misplaced) => text.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

fn print_row(word: &Word, result: &GuessResult) {
    let row: Vec<String> = word
        .letters()
        .iter()
        .zip(result.statuses())
        .map(|(&letter, &status)| tile(char::from(letter), Some(status)).to_string())
        .collect();
    println!("   {}", row.join(" "));
}

/// Print every guess so far plus the empty rows still available
pub fn print_board(session: &GameSession) {
    println!();
    for attempt in session.attempts() {
        print_row(&attempt.guess, &attempt.result);
    }
    for _ in 0..session.remaining_attempts() {
        println!("   {}", vec![" _ "; crate::core::WORD_LENGTH].join(" ").bright_black());
    }
    println!();
}

/// Print the keyboard coloured by letter knowledge
pub fn print_keyboard(knowledge: &LetterKnowledge) {
    for (indent, row) in keyboard_layout(knowledge).iter().enumerate() {
        let keys: Vec<String> = row
            .iter()
            .map(|&(letter, status)| tile(letter, status).to_string())
            .collect();
        println!("   {}{}", "  ".repeat(indent), keys.join(""));
    }
    println!();
}

/// Print the end-of-game banner with the secret, streak and share text
pub fn print_game_over(session: &GameSession, stats: &Statistics) {
    println!("{}", "═".repeat(60).cyan());
    match session.outcome() {
        GameOutcome::Won => {
            println!(
                "  {} {}",
                performance_label(session.attempt_index()).bright_green().bold(),
                format!(
                    "Solved in {}/{}",
                    session.attempt_index(),
                    session.max_attempts()
                )
                .bright_white()
            );
        }
        GameOutcome::Lost => {
            println!(
                "  {} The word was {}",
                "❌ Out of guesses.".red().bold(),
                session.secret().text().to_uppercase().bright_yellow().bold()
            );
        }
        GameOutcome::InProgress => {}
    }
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n  Streak: {}   Best: {}   Played: {}   Won: {:.0}%",
        session.win_streak().to_string().bright_cyan().bold(),
        stats.max_streak,
        stats.games_played,
        stats.win_rate()
    );
    println!();
    for line in share_text(session).lines() {
        println!("  {line}");
    }
    println!();
}

/// Print a one-off evaluation of a guess against a secret
pub fn print_evaluation(secret: &Word, guess: &Word, result: &GuessResult) {
    println!(
        "\n  {} vs {}",
        guess.text().to_uppercase().bright_white().bold(),
        secret.text().to_uppercase().bright_black()
    );
    print_row(guess, result);
    println!(
        "\n  {}  {}  ({} exact, {} misplaced)\n",
        result.to_emoji(),
        result.to_code(),
        result.count_exact(),
        result.count_misplaced()
    );
}
