//! Word pool for one word length
//!
//! Holds the filtered candidate words a session draws its secret from and
//! validates guesses against.

use super::GameError;
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Candidate words of a single length
#[derive(Debug, Clone)]
pub struct WordPool {
    word_length: usize,
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordPool {
    /// Build a pool from raw candidates
    ///
    /// Keeps entries of exactly `word_length` ASCII letters, lower-cased.
    /// Duplicates collapse, first occurrence wins the draw order.
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if nothing survives the filter.
    ///
    /// # Examples
    /// ```
    /// use wordle_chat::game::WordPool;
    ///
    /// let pool = WordPool::new(["Apple", "grape", "kiwi", "c4ndy"], 5).unwrap();
    /// assert_eq!(pool.len(), 2);
    /// assert!(pool.contains("apple"));
    /// assert!(WordPool::new(["kiwi"], 5).is_err());
    /// ```
    pub fn new<I, S>(candidates: I, word_length: usize) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pool = Self {
            word_length,
            words: Vec::new(),
            index: FxHashSet::default(),
        };

        for candidate in candidates {
            let candidate = candidate.as_ref();
            if candidate.len() != word_length {
                continue;
            }
            if let Ok(word) = Word::new(candidate) {
                pool.insert(word);
            }
        }

        if pool.is_empty() {
            return Err(GameError::EmptyPool {
                length: word_length,
            });
        }

        Ok(pool)
    }

    /// Length shared by every word in the pool
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership check on an already lower-cased word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Words in draw order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Draw a word uniformly at random
    ///
    /// Returns `None` only for an empty pool, which `new` never produces.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    /// Add a word; returns false if it was already present
    ///
    /// Callers guarantee `word.len() == self.word_length()`.
    pub(crate) fn insert(&mut self, word: Word) -> bool {
        debug_assert_eq!(word.len(), self.word_length);
        if self.index.insert(word.text().to_string()) {
            self.words.push(word);
            true
        } else {
            false
        }
    }
}
