//! Formatting utilities for chat and terminal output

use crate::game::GuessRecord;
use std::fmt::Write;
use std::time::Duration;

/// Render guesses as a fenced monospace block
///
/// Each line is the guess padded to `word_length`, a colon and the emoji
/// feedback, so the squares line up in chat clients.
#[must_use]
pub fn history_block(history: &[GuessRecord], word_length: usize) -> String {
    let mut block = String::from("```\n");
    for record in history {
        let _ = writeln!(
            block,
            "{:<width$}: {}",
            record.word.text(),
            record.feedback.to_emoji(),
            width = word_length
        );
    }
    block.push_str("```");
    block
}

/// Whole minutes and leftover seconds
#[must_use]
pub fn minutes_seconds(duration: Duration) -> (u64, u64) {
    let secs = duration.as_secs();
    (secs / 60, secs % 60)
}

/// Short human phrase for a duration: "1 minute", "90 seconds", ...
#[must_use]
pub fn describe_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let plural = |n: u64, unit: &str| {
        if n == 1 {
            format!("1 {unit}")
        } else {
            format!("{n} {unit}s")
        }
    };
    if secs >= 60 && secs % 60 == 0 {
        plural(secs / 60, "minute")
    } else {
        plural(secs, "second")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};

    fn record(word: &str, secret: &str) -> GuessRecord {
        let word = Word::new(word).unwrap();
        let secret = Word::new(secret).unwrap();
        let feedback = Feedback::evaluate(&word, &secret);
        GuessRecord { word, feedback }
    }

    #[test]
    fn history_block_lines_up_guesses() {
        let history = vec![record("paper", "apple"), record("apple", "apple")];
        assert_eq!(
            history_block(&history, 5),
            "```\npaper: 🟨🟨🟩🟨⬛\napple: 🟩🟩🟩🟩🟩\n```"
        );
    }

    #[test]
    fn history_block_empty() {
        assert_eq!(history_block(&[], 5), "```\n```");
    }

    #[test]
    fn minutes_seconds_splits() {
        assert_eq!(minutes_seconds(Duration::from_secs(0)), (0, 0));
        assert_eq!(minutes_seconds(Duration::from_millis(125_900)), (2, 5));
    }

    #[test]
    fn describe_duration_units() {
        assert_eq!(describe_duration(Duration::from_secs(60)), "1 minute");
        assert_eq!(describe_duration(Duration::from_secs(180)), "3 minutes");
        assert_eq!(describe_duration(Duration::from_secs(90)), "90 seconds");
        assert_eq!(describe_duration(Duration::from_secs(1)), "1 second");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 3), "░░░");
    }
}
