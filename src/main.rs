//! Wordle Chat - CLI
//!
//! Play Wordle in the terminal, score guesses, or drive the chat bot from
//! stdin.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::time::Duration;
use wordle_chat::{
    commands::{PlayConfig, check_guess, run_chat, run_play},
    core::Word,
    host::{Bot, BotConfig, DefinitionLookup, DefinitionTable, NoDefinitions, WordList},
    output::print_check_result,
    wordlists::{WORDS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_chat",
    about = "Wordle game engine with a chat-bot host",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play {
        /// Word length
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Seed for a reproducible secret word
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the feedback a guess would get against a secret
    Check {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },

    /// Run the chat bot on stdin lines of the form `<player-id> /command [arg]`
    Chat {
        /// Tab-separated `word<TAB>meaning` file revealed after each game
        #[arg(short, long)]
        definitions: Option<String>,

        /// Server id used for statistics
        #[arg(long, default_value = "0")]
        server: u64,

        /// Shortest allowed word length
        #[arg(long, default_value = "5")]
        min_length: usize,

        /// Longest allowed word length
        #[arg(long, default_value = "10")]
        max_length: usize,

        /// Seconds before an unfinished game expires
        #[arg(long, default_value = "600")]
        time_limit: u64,

        /// Seconds before expiry to warn the player
        #[arg(long, default_value = "60")]
        warning_before: u64,
    },
}

/// Load the word list selected with -w
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => {
            load_from_file(path).with_context(|| format!("Failed to load word list from '{path}'"))
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        length: 5,
        seed: None,
    });

    match command {
        Commands::Play { length, seed } => {
            let words = load_words(&cli.wordlist)?;
            info!("loaded {} words", words.len());
            let config = PlayConfig {
                word_length: length,
                seed,
            };
            run_play(words, &config, io::stdin().lock()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { secret, guess } => {
            let result = check_guess(&secret, &guess).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result.guess, &result.secret, &result.feedback);
            Ok(())
        }
        Commands::Chat {
            definitions,
            server,
            min_length,
            max_length,
            time_limit,
            warning_before,
        } => {
            if min_length == 0 || min_length > max_length {
                bail!("Invalid length range {min_length}..={max_length}");
            }
            let config = BotConfig {
                min_length,
                max_length,
                default_length: 5_usize.clamp(min_length, max_length),
                time_limit: Duration::from_secs(time_limit),
                warning_before: Duration::from_secs(warning_before),
            };
            let source = WordList::new(load_words(&cli.wordlist)?);
            info!("loaded {} words", source.len());

            match definitions {
                Some(path) => {
                    let table = DefinitionTable::load(&path)
                        .with_context(|| format!("Failed to load definitions from '{path}'"))?;
                    info!("loaded {} definitions", table.len());
                    run_chat_command(Bot::new(config, source, table), server)
                }
                None => run_chat_command(Bot::new(config, source, NoDefinitions), server),
            }
        }
    }
}

fn run_chat_command<D: DefinitionLookup>(mut bot: Bot<WordList, D>, server: u64) -> Result<()> {
    run_chat(&mut bot, server, io::stdin().lock(), io::stdout().lock())
        .context("Chat loop failed")
}
