//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a guess, see the coloured board and
//! keyboard, repeat until the game ends.

use crate::game::{GameConfig, GameSession, Statistics, StreakStore, WordSource};
use crate::output::{print_board, print_game_over, print_keyboard};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple<S: WordSource>(
    words: &mut S,
    config: &GameConfig,
    streak_store: Option<&StreakStore>,
) -> Result<(), String> {
    let stdin = io::stdin();
    play(words, config, streak_store, &mut stdin.lock())
}

fn play<S: WordSource, R: BufRead>(
    words: &mut S,
    config: &GameConfig,
    streak_store: Option<&StreakStore>,
    input: &mut R,
) -> Result<(), String> {
    let streak = load_streak(streak_store);
    let mut stats = Statistics::with_streak(streak);
    let mut session = GameSession::start(&mut *words, config, streak);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries. Commands: 'quit' to exit, 'new' to give up (counts as a loss).",
        crate::core::WORD_LENGTH,
        session.max_attempts()
    );

    loop {
        print_board(&session);
        print_keyboard(session.knowledge());

        let Some(line) = read_line(input, &format!("Guess {}", session.attempt_index() + 1))? else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                // Giving up counts as a loss
                session.forfeit();
                stats.record(&session);
                save_streak(streak_store, session.win_streak());
                println!("\nThe word was {}. Streak reset.", session.secret().text().to_uppercase());
                session = session.next_game(&mut *words);
                println!("🔄 New game started!");
                continue;
            }
            guess => {
                if let Err(e) = session.submit(guess, &*words) {
                    println!("{}", format!("❌ {e}").red());
                    continue;
                }
            }
        }

        if session.is_over() {
            print_board(&session);
            stats.record(&session);
            save_streak(streak_store, session.win_streak());
            print_game_over(&session, &stats);

            let Some(answer) = read_line(input, "Play again? (yes/no)")? else {
                return Ok(());
            };
            if !matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            session = session.next_game(&mut *words);
            println!("\n🔄 New game started!");
        }
    }
}

fn load_streak(store: Option<&StreakStore>) -> u32 {
    store.map_or(0, |store| {
        store.load().unwrap_or_else(|e| {
            warn!("could not load streak: {e}");
            0
        })
    })
}

fn save_streak(store: Option<&StreakStore>, streak: u32) {
    if let Some(store) = store
        && let Err(e) = store.save(streak)
    {
        warn!("could not save streak: {e}");
    }
}

/// Prompt and read one trimmed line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordList;
    use std::io::Cursor;

    fn words() -> WordList {
        WordList::new(
            vec![Word::new("crane").unwrap()],
            vec![Word::new("slate").unwrap()],
        )
        .unwrap()
    }

    #[test]
    fn plays_until_input_ends() {
        let mut words = words();
        let mut input = Cursor::new("slate\nbogus\ncrane\nno\n");
        assert_eq!(play(&mut words, &GameConfig::default(), None, &mut input), Ok(()));
    }

    #[test]
    fn streak_is_persisted_after_win() {
        let path = std::env::temp_dir()
            .join(format!("wordle_game_simple_{}", std::process::id()))
            .join("streak.txt");
        let store = StreakStore::new(&path);
        store.save(4).unwrap();

        let mut words = words();
        let mut input = Cursor::new("crane\nyes\nquit\n");
        play(&mut words, &GameConfig::default(), Some(&store), &mut input).unwrap();

        assert_eq!(store.load().unwrap(), 5);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn giving_up_resets_streak() {
        let path = std::env::temp_dir()
            .join(format!("wordle_game_giveup_{}", std::process::id()))
            .join("streak.txt");
        let store = StreakStore::new(&path);
        store.save(4).unwrap();

        let mut words = words();
        let mut input = Cursor::new("slate\nnew\nslate\nnew\ncrane\nno\n");
        play(&mut words, &GameConfig::default(), Some(&store), &mut input).unwrap();

        assert_eq!(store.load().unwrap(), 1);
        let _ = std::fs::remove_file(&path);
    }
}
