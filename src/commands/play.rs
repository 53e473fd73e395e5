//! Single-player terminal game
//!
//! Plays Wordle against the engine directly, one game after another, with
//! colored boards and running statistics.

use crate::game::{GameError, OutcomeKind, Session, WordPool};
use crate::host::StatsBook;
use crate::output::{print_outcome, print_stats};
use colored::Colorize;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Instant;

/// Options for a play session
pub struct PlayConfig {
    pub word_length: usize,
    /// Fixed seed for reproducible secrets
    pub seed: Option<u64>,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self {
            word_length,
            seed: None,
        }
    }
}

const LOCAL_PLAYER: u64 = 0;

/// Run interactive games reading guesses from `reader`
///
/// Commands: `quit` to exit, `new` to abandon the current game, `stats` for
/// the running totals.
///
/// # Errors
///
/// Returns an error if no words of the requested length exist or reading
/// input fails.
pub fn run_play<I, S, R>(words: I, config: &PlayConfig, mut reader: R) -> Result<(), String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: BufRead,
{
    let pool = Arc::new(
        WordPool::new(words, config.word_length).map_err(|e: GameError| e.to_string())?,
    );
    let mut rng = config
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    let mut stats = StatsBook::new();

    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                 Wordle - Play Mode               ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word. You get {} guesses.",
        config.word_length,
        config.word_length + 1
    );
    println!("Commands: 'quit' to exit, 'new' for a new word, 'stats' for statistics\n");

    'games: loop {
        let mut session = Session::from_pool(Arc::clone(&pool), &mut rng).map_err(|e| e.to_string())?;
        let started = Instant::now();
        stats.record_start(LOCAL_PLAYER, LOCAL_PLAYER);
        info!("new local game ({} candidate words)", pool.len());

        loop {
            let Some(input) = read_input(&mut reader, "Guess")? else {
                return Ok(());
            };

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!(
                        "\nThe word was {}. 👋 Thanks for playing!\n",
                        session.secret_word().text().to_uppercase().bright_yellow()
                    );
                    return Ok(());
                }
                "new" | "n" => {
                    stats.record_loss(LOCAL_PLAYER, LOCAL_PLAYER);
                    println!(
                        "\nThe word was {}. 🔄 New game started!\n",
                        session.secret_word().text().to_uppercase().bright_yellow()
                    );
                    continue 'games;
                }
                "stats" => {
                    print_stats(&stats.get(LOCAL_PLAYER, LOCAL_PLAYER));
                    continue;
                }
                _ => {}
            }

            let outcome = session.guess(&input);
            print_outcome(&outcome, &session, started.elapsed());
            session.clear_pending_error();

            match outcome.kind {
                OutcomeKind::Solved => {
                    stats.record_win(
                        LOCAL_PLAYER,
                        LOCAL_PLAYER,
                        session.guesses_used(),
                        started.elapsed(),
                    );
                    break;
                }
                OutcomeKind::Exhausted => {
                    stats.record_loss(LOCAL_PLAYER, LOCAL_PLAYER);
                    break;
                }
                OutcomeKind::InProgress | OutcomeKind::Rejected(_) => {}
            }
        }

        match read_input(&mut reader, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                println!("\n🔄 New game started!\n");
            }
            _ => {
                print_stats(&stats.get(LOCAL_PLAYER, LOCAL_PLAYER));
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_input<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = reader.read_line(&mut input).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
