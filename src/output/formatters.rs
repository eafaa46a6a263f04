//! Formatting utilities shared by the CLI and the TUI

use crate::core::{LetterKnowledge, LetterStatus};
use crate::game::GameSession;

/// Keyboard rows used by the letter overlay
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Pair every keyboard letter with its best known status, row by row
#[must_use]
pub fn keyboard_layout(knowledge: &LetterKnowledge) -> Vec<Vec<(char, Option<LetterStatus>)>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.bytes()
                .map(|letter| (char::from(letter), knowledge.status(letter)))
                .collect()
        })
        .collect()
}

/// Shareable summary: a score line followed by one emoji row per guess
///
/// The score is `X` for a lost or unfinished game.
#[must_use]
pub fn share_text(session: &GameSession) -> String {
    let score = if session.outcome() == crate::game::GameOutcome::Won {
        session.attempt_index().to_string()
    } else {
        "X".to_string()
    };

    let mut text = format!("Wordle {score}/{}", session.max_attempts());
    for result in session.history() {
        text.push('\n');
        text.push_str(&result.to_emoji());
    }
    text
}

/// Label for a finished game based on guesses used
#[must_use]
pub const fn performance_label(guesses: usize) -> &'static str {
    match guesses {
        1 => "🏆 Hole in one!",
        2 => "⭐ Magnificent!",
        3 => "💫 Splendid!",
        4 => "✨ Great!",
        5 => "👍 Nice!",
        _ => "😅 Phew!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameConfig;
    use crate::wordlists::WordList;

    #[test]
    fn keyboard_layout_marks_known_letters() {
        let secret = Word::new("crane").unwrap();
        let guess = Word::new("slate").unwrap();
        let mut knowledge = LetterKnowledge::new();
        knowledge.update(&crate::core::evaluate(&secret, &guess), &guess);

        let layout = keyboard_layout(&knowledge);
        assert_eq!(layout.len(), 3);
        assert_eq!(layout[0][0], ('q', None));
        assert_eq!(layout[0][2], ('e', Some(LetterStatus::Exact)));
        assert_eq!(layout[1][1], ('s', Some(LetterStatus::Absent)));
    }

    #[test]
    fn share_text_lists_rows() {
        let words = WordList::new(
            vec![Word::new("crane").unwrap()],
            vec![Word::new("slate").unwrap()],
        )
        .unwrap();
        let mut session = GameSession::new(Word::new("crane").unwrap(), &GameConfig::default(), 0);
        session.submit("slate", &words).unwrap();
        assert_eq!(share_text(&session), "Wordle X/6\n⬜⬜🟩⬜🟩");

        session.submit("crane", &words).unwrap();
        assert_eq!(share_text(&session), "Wordle 2/6\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩");
    }
}
