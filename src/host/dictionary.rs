//! Definition lookup for revealed words

use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Looks up a human-readable meaning for a word
///
/// `None` means the word is unknown to the dictionary.
pub trait DefinitionLookup {
    fn define(&self, word: &str) -> Option<String>;
}

/// A dictionary that knows nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefinitions;

impl DefinitionLookup for NoDefinitions {
    fn define(&self, _word: &str) -> Option<String> {
        None
    }
}

/// In-memory word → meaning table
#[derive(Debug, Clone, Default)]
pub struct DefinitionTable {
    entries: FxHashMap<String, String>,
}

impl DefinitionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry; the word is stored lower-cased
    pub fn insert(&mut self, word: &str, meaning: impl Into<String>) {
        self.entries.insert(word.to_lowercase(), meaning.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse `word<TAB>meaning` lines; lines without a tab are skipped
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut table = Self::new();
        for line in content.lines() {
            if let Some((word, meaning)) = line.split_once('\t') {
                let (word, meaning) = (word.trim(), meaning.trim());
                if !word.is_empty() && !meaning.is_empty() {
                    table.insert(word, meaning);
                }
            }
        }
        table
    }

    /// Load a tab-separated definitions file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }
}

impl DefinitionLookup for DefinitionTable {
    fn define(&self, word: &str) -> Option<String> {
        self.entries.get(&word.to_lowercase()).cloned()
    }
}
