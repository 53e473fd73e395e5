//! Display functions for the terminal game

use super::formatters::{create_progress_bar, minutes_seconds};
use crate::core::{Feedback, Mark, Word};
use crate::game::{GuessOutcome, OutcomeKind, Session};
use crate::host::PlayerStats;
use colored::{ColoredString, Colorize};
use std::time::Duration;

/// Render a guess as colored letter tiles
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.marks())
        .map(|(ch, mark)| tile(ch, *mark).to_string())
        .collect()
}

fn tile(ch: char, mark: Mark) -> ColoredString {
    let text = format!(" {} ", ch.to_ascii_uppercase());
    match mark {
        Mark::Exact => text.black().on_green().bold(),
        Mark::Present => text.black().on_yellow().bold(),
        Mark::Absent => text.white().on_bright_black(),
    }
}

/// Print the board and status after a guess
pub fn print_outcome(outcome: &GuessOutcome, session: &Session, elapsed: Duration) {
    if let OutcomeKind::Rejected(err) = &outcome.kind {
        println!("{}", format!("✗ {err}").red());
        return;
    }

    println!();
    for record in &outcome.history {
        println!("  {}", colored_guess(&record.word, &record.feedback));
    }
    println!();

    let secret = session.secret_word().text().to_uppercase();
    match outcome.kind {
        OutcomeKind::Solved => {
            let (minutes, seconds) = minutes_seconds(elapsed);
            println!("{}", "═".repeat(50).bright_cyan());
            println!(
                "{}",
                format!("✅ Correct! The word was {secret}.").green().bold()
            );
            println!(
                "🎉 Solved in {} {} ({minutes}m {seconds}s)",
                outcome.history.len().to_string().bright_cyan().bold(),
                if outcome.history.len() == 1 {
                    "guess"
                } else {
                    "guesses"
                }
            );
            println!("{}", "═".repeat(50).bright_cyan());
        }
        OutcomeKind::Exhausted => {
            println!(
                "{}",
                format!("❌ Out of guesses! The word was {secret}.").red().bold()
            );
            println!("😢 Better luck next time!");
        }
        OutcomeKind::InProgress => {
            println!(
                "{} guesses left",
                outcome.remaining_guesses.to_string().bright_yellow()
            );
        }
        OutcomeKind::Rejected(_) => {}
    }
}

/// Print the feedback for a single guess/secret pair
pub fn print_check_result(guess: &Word, secret: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        secret.text().to_uppercase().bright_yellow().bold(),
        guess.text().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", colored_guess(guess, feedback));
    println!("  {}  ({})", feedback.to_emoji(), feedback.to_letters());
    println!(
        "\n  Exact: {}  Present: {}",
        feedback.count_exact().to_string().green(),
        feedback.count_present().to_string().yellow()
    );
}

/// Print session statistics
pub fn print_stats(stats: &PlayerStats) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "SESSION STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());
    println!("   Games played:    {}", stats.games_played);
    println!(
        "   Games won:       {} ({:.0}%)",
        stats.games_won,
        stats.win_rate() * 100.0
    );
    println!(
        "   Streak:          {} (best {})",
        stats.current_streak, stats.max_streak
    );

    if stats.guess_distribution.is_empty() {
        return;
    }
    let most = stats
        .guess_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(1);
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, &wins) in &stats.guess_distribution {
        let bar = create_progress_bar(f64::from(wins), f64::from(most), 30);
        println!("   {guesses:2}: {} {wins}", bar.green());
    }
}
