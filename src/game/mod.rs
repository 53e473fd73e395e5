//! Game sessions
//!
//! A `Session` is one player's puzzle: a secret drawn from a `WordPool`, the
//! guesses made so far and the remaining attempts. Sessions are plain owned
//! values; whoever holds the `&mut` drives them.

mod outcome;
mod pool;
mod session;

pub use outcome::{GuessOutcome, GuessRecord, OutcomeKind};
pub use pool::WordPool;
pub use session::Session;

use thiserror::Error;

/// Errors that prevent a session from being created
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("No words found with length {length}")]
    EmptyPool { length: usize },

    #[error("Secret word '{0}' is not a valid word of the requested length")]
    InvalidSecret(String),
}

/// Reasons a guess is rejected without consuming an attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("You already guessed '{0}'.")]
    Duplicate(String),

    #[error("Guess must be {expected} letters long.")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Not a valid word.")]
    NotInWordList(String),

    #[error("This game is already over.")]
    GameOver,
}

/// Create a session with a randomly drawn secret
///
/// # Errors
/// Returns `GameError::EmptyPool` if no candidate has `word_length` letters.
pub fn create_session<I, S>(words: I, word_length: usize) -> Result<Session, GameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Session::new(words, word_length)
}
