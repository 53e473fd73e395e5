//! Word sources
//!
//! Where a host gets candidate words for a requested length. The engine
//! only ever sees the resulting strings.

use crate::core::Word;
use crate::wordlists::WORDS;

/// Supplies candidate words for a game of a given length
pub trait WordSource {
    /// Candidates of (roughly) `length` letters; pools filter again
    fn candidates(&self, length: usize) -> Vec<String>;
}

/// The word list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWords;

impl WordSource for EmbeddedWords {
    fn candidates(&self, length: usize) -> Vec<String> {
        WORDS
            .iter()
            .filter(|w| w.len() == length)
            .map(|&w| w.to_string())
            .collect()
    }
}

/// An owned list, e.g. loaded from a file
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().filter_map(|s| Word::new(s.as_ref()).ok()).collect())
    }
}

impl WordSource for WordList {
    fn candidates(&self, length: usize) -> Vec<String> {
        self.words
            .iter()
            .filter(|w| w.len() == length)
            .map(|w| w.text().to_string())
            .collect()
    }
}
