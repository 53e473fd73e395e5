//! Score a single guess against a known secret

use crate::core::{Feedback, Word};

/// Result of checking one guess
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, String> {
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    if secret.len() != guess.len() {
        return Err(format!(
            "Guess must be {} letters long, got {}",
            secret.len(),
            guess.len()
        ));
    }

    let feedback = Feedback::evaluate(&guess, &secret);
    Ok(CheckResult {
        secret,
        guess,
        feedback,
    })
}
