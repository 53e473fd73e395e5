//! Slash command parsing

use std::str::FromStr;
use thiserror::Error;

/// A command typed by a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// `/startwordle [length]`
    Start { length: Option<usize> },
    /// `/guessword <word>`
    Guess(String),
    /// `/helpwordle`
    Help,
    /// `/stats`
    Stats,
    /// `/leaderboard`
    Leaderboard,
}

/// Why a line could not be parsed as a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Commands start with '/'.")]
    NotACommand,

    #[error("Unknown command `{0}`. Try `/helpwordle`.")]
    UnknownCommand(String),

    #[error("`{0}` needs an argument.")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a word length.")]
    InvalidLength(String),
}

impl FromStr for ChatCommand {
    type Err = CommandError;

    /// Parse a line such as `/startwordle 6` or `/guessword crane`
    ///
    /// Command names are case-insensitive; extra arguments are ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or(CommandError::NotACommand)?;
        let name = name
            .strip_prefix('/')
            .ok_or(CommandError::NotACommand)?
            .to_lowercase();
        let arg = parts.next();

        match name.as_str() {
            "startwordle" => {
                let length = arg
                    .map(|a| {
                        a.parse::<usize>()
                            .map_err(|_| CommandError::InvalidLength(a.to_string()))
                    })
                    .transpose()?;
                Ok(Self::Start { length })
            }
            "guessword" => arg
                .map(|a| Self::Guess(a.to_string()))
                .ok_or(CommandError::MissingArgument("/guessword")),
            "helpwordle" => Ok(Self::Help),
            "stats" => Ok(Self::Stats),
            "leaderboard" => Ok(Self::Leaderboard),
            _ => Err(CommandError::UnknownCommand(format!("/{name}"))),
        }
    }
}
