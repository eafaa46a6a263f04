//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{GameConfig, GameOutcome, GameSession, Statistics, StreakStore, SubmitError};
use crate::output::formatters::performance_label;
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Maximum number of messages kept in the log panel
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App {
    pub words: WordList,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    streak_store: Option<StreakStore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app and start the first game
    ///
    /// The starting streak comes from `streak_store` when one is given.
    #[must_use]
    pub fn new(mut words: WordList, config: &GameConfig, streak_store: Option<StreakStore>) -> Self {
        let streak = streak_store.as_ref().map_or(0, |store| {
            store.load().unwrap_or_else(|e| {
                warn!("could not load streak: {e}");
                0
            })
        });
        let session = GameSession::start(&mut words, config, streak);

        let mut app = Self {
            words,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::with_streak(streak),
            should_quit: false,
            input_mode: InputMode::Guessing,
            streak_store,
        };
        app.add_message(
            &format!(
                "Guess the {WORD_LENGTH}-letter word in {} tries.",
                app.session.max_attempts()
            ),
            MessageStyle::Info,
        );
        app
    }

    /// Append a letter to the current guess, ignoring anything past the word length
    pub fn push_letter(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed guess to the session
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();
        match self.session.submit(&guess, &self.words) {
            Ok(submission) => {
                self.input_buffer.clear();
                match submission.outcome {
                    GameOutcome::InProgress => {
                        let left = self.session.remaining_attempts();
                        self.add_message(
                            &format!("{} {left} guesses left", submission.result.to_emoji()),
                            MessageStyle::Info,
                        );
                    }
                    GameOutcome::Won | GameOutcome::Lost => self.finish_game(),
                }
            }
            Err(e @ (SubmitError::InvalidLength(_) | SubmitError::NotInDictionary(_))) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
            Err(e) => {
                self.input_buffer.clear();
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self) {
        self.stats.record(&self.session);
        if let Some(store) = &self.streak_store
            && let Err(e) = store.save(self.session.win_streak())
        {
            warn!("could not save streak: {e}");
        }

        let text = if self.session.outcome() == GameOutcome::Won {
            self.add_message(
                performance_label(self.session.attempt_index()),
                MessageStyle::Success,
            );
            format!("Streak: {}", self.session.win_streak())
        } else {
            format!(
                "The word was {}. Streak reset.",
                self.session.secret().text().to_uppercase()
            )
        };
        self.add_message(&text, MessageStyle::Info);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        self.input_mode = InputMode::GameOver;
    }

    pub fn new_game(&mut self) {
        self.session = self.session.next_game(&mut self.words);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.push_letter(c),
                KeyCode::Backspace => self.pop_letter(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn app() -> App {
        let words = WordList::new(
            vec![Word::new("crane").unwrap()],
            vec![Word::new("slate").unwrap()],
        )
        .unwrap();
        App::new(words, &GameConfig::new().with_max_attempts(2), None)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_is_limited_to_word_length() {
        let mut app = app();
        for c in "slates1".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "slate");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "slat");
    }

    #[test]
    fn short_guess_keeps_buffer_and_reports_error() {
        let mut app = app();
        type_word(&mut app, "sla");
        assert_eq!(app.input_buffer, "sla");
        assert_eq!(app.session.attempt_index(), 0);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Not enough letters");
    }

    #[test]
    fn winning_switches_to_game_over() {
        let mut app = app();
        type_word(&mut app, "slate");
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.input_buffer.is_empty());

        type_word(&mut app, "CRANE");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.session.win_streak(), 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.session.attempt_index(), 0);
        assert_eq!(app.session.win_streak(), 1);
    }

    #[test]
    fn losing_resets_streak() {
        let mut app = app();
        type_word(&mut app, "slate");
        type_word(&mut app, "slate");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.session.outcome(), GameOutcome::Lost);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "q is a letter while guessing");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MESSAGE_LIMIT);
        assert_eq!(app.messages[0].text, "5");
    }
}
