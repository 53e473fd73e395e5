//! Chat-bot host
//!
//! Everything around the game engine that a chat integration needs: slash
//! command parsing, one active game per player, expiry timers, statistics
//! and the word/definition sources. Transport-free: callers feed commands in
//! and send the returned replies wherever they like.

pub mod bot;
pub mod command;
pub mod dictionary;
pub mod registry;
pub mod source;
pub mod stats;

pub use bot::{Bot, Notice, Reply};
pub use command::{ChatCommand, CommandError};
pub use dictionary::{DefinitionLookup, DefinitionTable, NoDefinitions};
pub use registry::{ActiveGame, GameRegistry, TimerEvent};
pub use source::{EmbeddedWords, WordList, WordSource};
pub use stats::{PlayerStats, Rankings, StatsBook};

use std::time::Duration;

/// Chat user identifier
pub type PlayerId = u64;

/// Chat server (guild) identifier; statistics are kept per server
pub type ServerId = u64;

/// Host tunables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// Shortest word length a player may request
    pub min_length: usize,
    /// Longest word length a player may request
    pub max_length: usize,
    /// Length used when `/startwordle` has no argument
    pub default_length: usize,
    /// Games older than this are ended by the sweep
    pub time_limit: Duration,
    /// How long before the limit the player is warned
    pub warning_before: Duration,
}

impl BotConfig {
    /// Age at which the one-time warning is sent
    #[must_use]
    pub fn warning_at(&self) -> Duration {
        self.time_limit.saturating_sub(self.warning_before)
    }

    /// Whether `length` is an allowed word length
    #[must_use]
    pub fn allows_length(&self, length: usize) -> bool {
        (self.min_length..=self.max_length).contains(&length)
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            min_length: 5,
            max_length: 10,
            default_length: 5,
            time_limit: Duration::from_secs(10 * 60),
            warning_before: Duration::from_secs(60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_bot_rules() {
        let config = BotConfig::default();
        assert!(config.allows_length(5));
        assert!(config.allows_length(10));
        assert!(!config.allows_length(4));
        assert!(!config.allows_length(11));
        assert_eq!(config.warning_at(), Duration::from_secs(9 * 60));
    }

    #[test]
    fn warning_never_underflows() {
        let config = BotConfig {
            time_limit: Duration::from_secs(30),
            warning_before: Duration::from_secs(60),
            ..BotConfig::default()
        };
        assert_eq!(config.warning_at(), Duration::ZERO);
    }
}
