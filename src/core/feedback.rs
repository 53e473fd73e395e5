//! Wordle feedback calculation and representation
//!
//! Feedback is one `Mark` per letter of the guess:
//! - `Exact` (🟩): letter in the correct position
//! - `Present` (🟨): letter in the word at another, not yet matched, position
//! - `Absent` (⬛): no unmatched occurrence of the letter remains

use super::Word;
use std::fmt;

/// Per-letter feedback symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

impl Mark {
    /// Emoji square used in chat replies
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    /// Single ASCII letter (`G`, `Y`, `-`)
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for one guess, position-aligned with the guessed word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    /// Evaluate `guess` against `secret`
    ///
    /// Implements Wordle's feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those secret positions
    /// 2. Second pass: for every other guess position, consume the leftmost
    ///    unconsumed secret position holding the same letter (present), or
    ///    mark the letter absent if none is left
    ///
    /// Both words must have the same length. Extra letters on either side are
    /// ignored in release builds.
    ///
    /// # Examples
    /// ```
    /// use wordle_chat::core::{Feedback, Mark, Word};
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let guess = Word::new("paper").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Present, Mark::Present, Mark::Exact, Mark::Present, Mark::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "words must be equal length");

        let guess = guess.chars();
        let secret = secret.chars();
        let mut marks: Vec<Option<Mark>> = vec![None; guess.len()];
        let mut consumed = vec![false; secret.len()];

        for (i, (g, s)) in guess.iter().zip(secret).enumerate() {
            if g == s {
                marks[i] = Some(Mark::Exact);
                consumed[i] = true;
            }
        }

        for (i, &letter) in guess.iter().enumerate() {
            if marks[i].is_some() {
                continue;
            }
            let unmatched = secret
                .iter()
                .enumerate()
                .position(|(j, &s)| s == letter && !consumed[j]);
            marks[i] = Some(match unmatched {
                Some(j) => {
                    consumed[j] = true;
                    Mark::Present
                }
                None => Mark::Absent,
            });
        }

        Self(marks.into_iter().map(|m| m.unwrap_or(Mark::Absent)).collect())
    }

    /// Feedback from explicit marks
    #[must_use]
    pub fn from_marks(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// The marks, one per letter
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of letters covered
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for the feedback of a zero-length word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Exact)
    }

    /// Count the exact (green) marks
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Exact).count()
    }

    /// Count the present (yellow) marks
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬛🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for exact
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬛/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_chat::core::Feedback;
    ///
    /// let f1 = Feedback::from_str("GY-GY").unwrap();
    /// let f2 = Feedback::from_str("🟩🟨⬛🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        s.chars().map(Mark::from_char).collect::<Option<Vec<_>>>().map(Self)
    }

    /// Convert feedback to an emoji string such as "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }

    /// Convert feedback to ASCII letters such as "GY-GY"
    #[must_use]
    pub fn to_letters(&self) -> String {
        self.0.iter().map(|m| m.letter()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Mark::{Absent, Exact, Present};

    fn eval(guess: &str, secret: &str) -> Vec<Mark> {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        Feedback::evaluate(&guess, &secret).marks().to_vec()
    }

    #[test]
    fn feedback_all_absent() {
        assert_eq!(eval("abcde", "fghij"), vec![Absent; 5]);
    }

    #[test]
    fn feedback_all_exact() {
        let word = Word::new("apple").unwrap();
        let feedback = Feedback::evaluate(&word, &word);

        assert!(feedback.is_perfect());
        assert_eq!(feedback.count_exact(), 5);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn feedback_paper_against_apple() {
        assert_eq!(
            eval("paper", "apple"),
            vec![Present, Present, Exact, Present, Absent]
        );
    }

    #[test]
    fn feedback_duplicate_letters_exact_takes_priority() {
        // SPEED vs ERASE: both E's present, ERASE has two E's
        assert_eq!(
            eval("speed", "erase"),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn feedback_duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O present, second O exact
        assert_eq!(
            eval("robot", "floor"),
            vec![Present, Present, Absent, Exact, Absent]
        );
    }

    #[test]
    fn feedback_excess_repeats_are_absent() {
        // Only one L in the secret; the leftmost unmatched L gets it
        assert_eq!(
            eval("llama", "plant"),
            vec![Absent, Exact, Exact, Absent, Absent]
        );
        assert_eq!(
            eval("lolly", "hello"),
            vec![Absent, Present, Exact, Exact, Absent]
        );
    }

    #[test]
    fn feedback_repeated_guess_letter_single_in_secret() {
        // EERIE vs THEME: two E's in THEME, leftmost guess E's claim them
        assert_eq!(
            eval("eerie", "theme"),
            vec![Present, Absent, Absent, Absent, Exact]
        );
    }

    #[test]
    fn feedback_longer_words() {
        let marks = eval("strength", "sunlight");
        assert_eq!(marks.len(), 8);
        assert_eq!(marks[0], Exact);
        assert_eq!(marks[5], Exact);
    }

    #[test]
    fn feedback_from_str_valid() {
        let f1 = Feedback::from_str("GYG--").unwrap();
        let f2 = Feedback::from_str("🟩🟨🟩⬛⬜").unwrap();
        let f3 = Feedback::from_str("gyg__").unwrap();

        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(f1.marks(), &[Exact, Present, Exact, Absent, Absent]);
    }

    #[test]
    fn feedback_from_str_invalid() {
        assert!(Feedback::from_str("GXGGY").is_none());
        assert!(Feedback::from_str("").is_none());
        assert!("abc".parse::<Feedback>().is_err());
    }

    #[test]
    fn feedback_renders_emoji_and_letters() {
        let feedback = Feedback::from_marks(vec![Exact, Present, Absent]);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬛");
        assert_eq!(feedback.to_letters(), "GY-");
        assert_eq!(feedback.to_string(), "🟩🟨⬛");
    }

    #[test]
    fn feedback_symmetry() {
        for word in ["crane", "slate", "aaaaa", "balloon", "strawberry"] {
            let w = Word::new(word).unwrap();
            assert!(Feedback::evaluate(&w, &w).is_perfect());
        }
    }
}
