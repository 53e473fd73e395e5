//! Word lists
//!
//! Provides an embedded word list compiled into the binary and a loader for
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert!(
                (5..=10).contains(&word.len()),
                "Word '{word}' is not 5 to 10 letters"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn every_supported_length_has_words() {
        for length in 5..=10 {
            assert!(
                WORDS.iter().any(|w| w.len() == length),
                "No embedded words of length {length}"
            );
        }
    }

    #[test]
    fn sample_words_present() {
        for word in ["apple", "grape", "train", "plant", "beach"] {
            assert!(WORDS.contains(&word), "Missing '{word}'");
        }
    }
}
