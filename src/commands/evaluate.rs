//! One-off guess evaluation
//!
//! Scores a guess against a given secret without starting a game.

use crate::core::{GuessResult, Word};

/// Result of evaluating one guess
#[derive(Debug)]
pub struct EvaluationResult {
    pub secret: Word,
    pub guess: Word,
    pub result: GuessResult,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not a valid word.
pub fn evaluate_words(secret: &str, guess: &str) -> Result<EvaluationResult, String> {
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let result = GuessResult::evaluate(&secret, &guess);

    Ok(EvaluationResult {
        secret,
        guess,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_valid_words() {
        let evaluation = evaluate_words("ALLOY", "lolly").unwrap();
        assert_eq!(evaluation.result.to_code(), "++*-*");
        assert_eq!(evaluation.secret.text(), "alloy");
    }

    #[test]
    fn rejects_invalid_words() {
        assert!(evaluate_words("all", "lolly").unwrap_err().starts_with("Invalid secret"));
        assert!(evaluate_words("alloy", "l0lly").unwrap_err().starts_with("Invalid guess"));
    }
}
