//! Single-player game session state machine

use super::{GameError, GuessError, GuessOutcome, GuessRecord, OutcomeKind, WordPool};
use crate::core::{Feedback, Word};
use rand::Rng;
use std::sync::Arc;

/// One player's puzzle
///
/// Invariant: `remaining_guesses + history.len() == max_guesses`.
#[derive(Debug, Clone)]
pub struct Session {
    pool: Arc<WordPool>,
    secret: Word,
    max_guesses: usize,
    remaining_guesses: usize,
    history: Vec<GuessRecord>,
    error_flag: bool,
}

impl Session {
    /// Create a session drawing the secret with the thread-local RNG
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if no candidate has `word_length` letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_chat::game::Session;
    ///
    /// let session = Session::new(["apple"], 5).unwrap();
    /// assert_eq!(session.secret_word().text(), "apple");
    /// assert_eq!(session.max_guesses(), 6);
    /// ```
    pub fn new<I, S>(words: I, word_length: usize) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(words, word_length, &mut rand::rng())
    }

    /// Create a session drawing the secret from `rng`
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if no candidate has `word_length` letters.
    pub fn with_rng<I, S, R>(words: I, word_length: usize, rng: &mut R) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let pool = WordPool::new(words, word_length)?;
        Self::from_pool(Arc::new(pool), rng)
    }

    /// Create a session from an already filtered, possibly shared, pool
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if the pool is empty.
    pub fn from_pool<R: Rng + ?Sized>(pool: Arc<WordPool>, rng: &mut R) -> Result<Self, GameError> {
        let secret = pool.choose(rng).cloned().ok_or(GameError::EmptyPool {
            length: pool.word_length(),
        })?;
        Ok(Self::start(pool, secret))
    }

    /// Create a session with a fixed secret
    ///
    /// A secret missing from the filtered pool is added to it, so guessing the
    /// secret is always accepted.
    ///
    /// # Errors
    /// Returns `GameError::InvalidSecret` if the secret is not `word_length`
    /// ASCII letters.
    pub fn with_secret<I, S>(words: I, word_length: usize, secret: &str) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let secret = Word::new(secret)
            .ok()
            .filter(|w| w.len() == word_length)
            .ok_or_else(|| GameError::InvalidSecret(secret.to_string()))?;

        let mut pool = match WordPool::new(words, word_length) {
            Ok(pool) => pool,
            Err(GameError::EmptyPool { .. }) => WordPool::new([secret.text()], word_length)?,
            Err(err) => return Err(err),
        };
        pool.insert(secret.clone());

        Ok(Self::start(Arc::new(pool), secret))
    }

    fn start(pool: Arc<WordPool>, secret: Word) -> Self {
        let max_guesses = pool.word_length() + 1;
        Self {
            pool,
            secret,
            max_guesses,
            remaining_guesses: max_guesses,
            history: Vec::with_capacity(max_guesses),
            error_flag: false,
        }
    }

    /// Submit a guess
    ///
    /// Rejections (duplicate, wrong length, unknown word, finished game) set
    /// the pending error flag and leave attempts and history untouched.
    ///
    /// # Examples
    /// ```
    /// use wordle_chat::game::{OutcomeKind, Session};
    ///
    /// let mut session = Session::with_secret(["apple", "paper"], 5, "apple").unwrap();
    ///
    /// let outcome = session.guess("PAPER");
    /// assert_eq!(outcome.kind, OutcomeKind::InProgress);
    /// assert_eq!(outcome.remaining_guesses, 5);
    ///
    /// let outcome = session.guess("apple");
    /// assert_eq!(outcome.kind, OutcomeKind::Solved);
    /// ```
    pub fn guess(&mut self, raw: &str) -> GuessOutcome {
        match self.validate(raw) {
            Ok(word) => self.accept(word),
            Err(err) => {
                self.error_flag = true;
                self.outcome(OutcomeKind::Rejected(err), None)
            }
        }
    }

    fn validate(&self, raw: &str) -> Result<Word, GuessError> {
        if self.is_finished() {
            return Err(GuessError::GameOver);
        }

        let normalized = raw.to_lowercase();

        if self.history.iter().any(|r| r.word.text() == normalized) {
            return Err(GuessError::Duplicate(normalized));
        }

        let actual = normalized.chars().count();
        if actual != self.word_length() {
            return Err(GuessError::LengthMismatch {
                expected: self.word_length(),
                actual,
            });
        }

        if !self.pool.contains(&normalized) {
            return Err(GuessError::NotInWordList(normalized));
        }

        Word::new(normalized.as_str()).map_err(|_| GuessError::NotInWordList(normalized))
    }

    fn accept(&mut self, word: Word) -> GuessOutcome {
        self.remaining_guesses -= 1;
        let feedback = Feedback::evaluate(&word, &self.secret);
        let solved = word == self.secret;
        self.history.push(GuessRecord {
            word,
            feedback: feedback.clone(),
        });

        let kind = if solved {
            OutcomeKind::Solved
        } else if self.remaining_guesses == 0 {
            OutcomeKind::Exhausted
        } else {
            OutcomeKind::InProgress
        };
        self.outcome(kind, Some(feedback))
    }

    fn outcome(&self, kind: OutcomeKind, feedback: Option<Feedback>) -> GuessOutcome {
        GuessOutcome {
            kind,
            feedback,
            remaining_guesses: self.remaining_guesses,
            history: self.history.clone(),
        }
    }

    /// True once the latest guess matched the secret
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(|r| r.word == self.secret)
    }

    /// True once all attempts are spent without solving
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining_guesses == 0 && !self.is_solved()
    }

    /// Solved or exhausted
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_solved() || self.remaining_guesses == 0
    }

    /// Whether the last guess was rejected and not yet acknowledged
    #[must_use]
    pub const fn has_pending_error(&self) -> bool {
        self.error_flag
    }

    pub fn clear_pending_error(&mut self) {
        self.error_flag = false;
    }

    /// The secret, for revealing after the game ends
    #[must_use]
    pub const fn secret_word(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.pool.word_length()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        self.remaining_guesses
    }

    /// Accepted guesses so far
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn pool(&self) -> &WordPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &["apple", "grape", "train", "plant", "beach", "paper"];

    fn session(secret: &str) -> Session {
        Session::with_secret(WORDS, 5, secret).unwrap()
    }

    #[test]
    fn new_session_initial_state() {
        let s = session("apple");
        assert_eq!(s.word_length(), 5);
        assert_eq!(s.max_guesses(), 6);
        assert_eq!(s.remaining_guesses(), 6);
        assert!(s.history().is_empty());
        assert!(!s.has_pending_error());
        assert!(!s.is_solved());
        assert!(!s.is_exhausted());
    }

    #[test]
    fn empty_pool_fails() {
        let err = Session::new(WORDS, 7).unwrap_err();
        assert_eq!(err, GameError::EmptyPool { length: 7 });
    }

    #[test]
    fn single_word_pool_is_deterministic() {
        for _ in 0..5 {
            let s = Session::new(["apple"], 5).unwrap();
            assert_eq!(s.secret_word().text(), "apple");
        }
    }

    #[test]
    fn seeded_rng_pins_secret() {
        let a = Session::with_rng(WORDS, 5, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Session::with_rng(WORDS, 5, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.secret_word(), b.secret_word());
        assert!(a.pool().contains(a.secret_word().text()));
    }

    #[test]
    fn secret_outside_pool_extends_pool() {
        let mut s = Session::with_secret(WORDS, 5, "Zebra").unwrap();
        assert_eq!(s.secret_word().text(), "zebra");
        assert!(s.pool().contains("zebra"));
        assert_eq!(s.guess("zebra").kind, OutcomeKind::Solved);
    }

    #[test]
    fn secret_with_empty_pool_creates_pool() {
        let s = Session::with_secret(["kiwi"], 5, "zebra").unwrap();
        assert_eq!(s.pool().len(), 1);
    }

    #[test]
    fn invalid_secret_rejected() {
        assert_eq!(
            Session::with_secret(WORDS, 5, "kiwi").unwrap_err(),
            GameError::InvalidSecret("kiwi".to_string())
        );
        assert!(Session::with_secret(WORDS, 5, "ab1de").is_err());
    }

    #[test]
    fn guessing_secret_solves() {
        let mut s = session("apple");
        let outcome = s.guess("apple");

        assert_eq!(outcome.kind, OutcomeKind::Solved);
        assert_eq!(outcome.feedback.unwrap().marks(), &[Mark::Exact; 5]);
        assert_eq!(outcome.remaining_guesses, 5);
        assert_eq!(outcome.history.len(), 1);
        assert!(s.is_solved());
        assert!(!s.is_exhausted());
    }

    #[test]
    fn in_progress_guess_records_feedback() {
        let mut s = session("apple");
        let outcome = s.guess("paper");

        assert_eq!(outcome.kind, OutcomeKind::InProgress);
        assert_eq!(
            outcome.feedback.as_ref().unwrap().marks(),
            &[Mark::Present, Mark::Present, Mark::Exact, Mark::Present, Mark::Absent]
        );
        assert_eq!(s.history()[0].word.text(), "paper");
        assert_eq!(s.guesses_used(), 1);
    }

    #[test]
    fn guess_is_case_insensitive() {
        let mut s = session("apple");
        assert_eq!(s.guess("APPLE").kind, OutcomeKind::Solved);
    }

    #[test]
    fn duplicate_guess_rejected_without_cost() {
        let mut s = session("apple");
        s.guess("train");
        let outcome = s.guess("TRAIN");

        assert_eq!(
            outcome.kind,
            OutcomeKind::Rejected(GuessError::Duplicate("train".to_string()))
        );
        assert!(outcome.feedback.is_none());
        assert_eq!(outcome.remaining_guesses, 5);
        assert_eq!(s.history().len(), 1);
        assert!(s.has_pending_error());
    }

    #[test]
    fn length_mismatch_rejected() {
        let mut s = session("train");
        let outcome = s.guess("zzzz");

        assert_eq!(
            outcome.kind,
            OutcomeKind::Rejected(GuessError::LengthMismatch {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(s.remaining_guesses(), 6);
    }

    #[test]
    fn unknown_word_rejected() {
        let mut s = session("train");
        let outcome = s.guess("zzzzz");

        assert_eq!(
            outcome.rejection(),
            Some(&GuessError::NotInWordList("zzzzz".to_string()))
        );
        assert_eq!(s.remaining_guesses(), 6);
        assert!(s.history().is_empty());
    }

    #[test]
    fn duplicate_check_precedes_length_check() {
        let mut s = session("train");
        s.guess("apple");
        s.clear_pending_error();

        assert!(matches!(
            s.guess("Apple").kind,
            OutcomeKind::Rejected(GuessError::Duplicate(_))
        ));
    }

    #[test]
    fn pending_error_can_be_cleared() {
        let mut s = session("apple");
        s.guess("nope");
        assert!(s.has_pending_error());

        s.clear_pending_error();
        assert!(!s.has_pending_error());
        assert_eq!(s.remaining_guesses(), 6);
    }

    #[test]
    fn running_out_of_guesses_exhausts() {
        let words = ["aaaaa", "bbbbb", "ccccc", "ddddd", "eeeee", "fffff", "ggggg"];
        let mut s = Session::with_secret(words, 5, "ggggg").unwrap();

        for (i, guess) in words.iter().take(5).enumerate() {
            let outcome = s.guess(guess);
            assert_eq!(outcome.kind, OutcomeKind::InProgress);
            assert_eq!(outcome.remaining_guesses, 5 - i);
        }

        let outcome = s.guess("fffff");
        assert_eq!(outcome.kind, OutcomeKind::Exhausted);
        assert_eq!(outcome.remaining_guesses, 0);
        assert_eq!(outcome.history.len(), 6);
        assert!(s.is_exhausted());
        assert!(!s.is_solved());
    }

    #[test]
    fn solving_on_last_guess_is_not_exhausted() {
        let words = ["aaaaa", "bbbbb", "ccccc", "ddddd", "eeeee", "ggggg"];
        let mut s = Session::with_secret(words, 5, "ggggg").unwrap();
        for guess in &words[..5] {
            s.guess(guess);
        }

        assert_eq!(s.guess("ggggg").kind, OutcomeKind::Solved);
        assert_eq!(s.remaining_guesses(), 0);
        assert!(s.is_solved());
        assert!(!s.is_exhausted());
    }

    #[test]
    fn guesses_after_finish_rejected() {
        let mut s = session("apple");
        s.guess("apple");

        let outcome = s.guess("grape");
        assert_eq!(outcome.kind, OutcomeKind::Rejected(GuessError::GameOver));
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn remaining_plus_history_is_max() {
        let mut s = session("beach");
        for guess in ["apple", "apple", "xx", "grape", "qqqqq", "train"] {
            s.guess(guess);
            assert_eq!(s.remaining_guesses() + s.history().len(), s.max_guesses());
        }
        assert_eq!(s.history().len(), 3);
    }

    #[test]
    fn longer_words_get_more_guesses() {
        let s = Session::new(["dinosaur", "elephant"], 8).unwrap();
        assert_eq!(s.max_guesses(), 9);
    }

    #[test]
    fn create_session_entry_point() {
        let s = crate::game::create_session(["Apple"], 5).unwrap();
        assert_eq!(s.secret_word().text(), "apple");
    }
}
