//! Command dispatch and chat replies
//!
//! `Bot` is what a chat integration talks to: hand it a parsed command with
//! the player, server and current time, and send back the `Reply`. Call
//! `sweep` periodically to deliver expiry notices.

use super::dictionary::DefinitionLookup;
use super::registry::{ActiveGame, GameRegistry, TimerEvent};
use super::source::WordSource;
use super::stats::StatsBook;
use super::{BotConfig, ChatCommand, PlayerId, ServerId};
use crate::game::{GuessOutcome, OutcomeKind, Session};
use crate::output::formatters::{describe_duration, history_block, minutes_seconds};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt::Write;
use std::time::Instant;

/// Text to send back to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Only the requesting player should see it
    pub ephemeral: bool,
}

impl Reply {
    fn public(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ephemeral: false,
        }
    }

    fn private(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ephemeral: true,
        }
    }
}

/// Unprompted message produced by the expiry sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub player: PlayerId,
    pub text: String,
}

/// Wordle chat bot state
pub struct Bot<S, D> {
    config: BotConfig,
    source: S,
    definitions: D,
    registry: GameRegistry,
    stats: StatsBook,
    rng: StdRng,
}

impl<S: WordSource, D: DefinitionLookup> Bot<S, D> {
    /// Create a bot with an entropy-seeded RNG
    pub fn new(config: BotConfig, source: S, definitions: D) -> Self {
        Self::with_rng(config, source, definitions, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create a bot whose secret draws come from `rng`
    pub fn with_rng(config: BotConfig, source: S, definitions: D, rng: StdRng) -> Self {
        Self {
            config,
            source,
            definitions,
            registry: GameRegistry::new(),
            stats: StatsBook::new(),
            rng,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &BotConfig {
        &self.config
    }

    #[must_use]
    pub const fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn stats(&self) -> &StatsBook {
        &self.stats
    }

    /// Handle one command from `player` on `server`
    pub fn handle(
        &mut self,
        player: PlayerId,
        server: ServerId,
        command: ChatCommand,
        now: Instant,
    ) -> Reply {
        match command {
            ChatCommand::Start { length } => self.start(player, server, length, now),
            ChatCommand::Guess(word) => self.guess(player, &word, now),
            ChatCommand::Help => Reply::public(help_text(&self.config)),
            ChatCommand::Stats => Reply::public(self.stats_text(player, server)),
            ChatCommand::Leaderboard => Reply::public(self.leaderboard_text(player, server)),
        }
    }

    fn start(
        &mut self,
        player: PlayerId,
        server: ServerId,
        length: Option<usize>,
        now: Instant,
    ) -> Reply {
        let length = length.unwrap_or(self.config.default_length);
        if !self.config.allows_length(length) {
            return Reply::public(format!(
                "Please choose a word length between {} and {}.",
                self.config.min_length, self.config.max_length
            ));
        }

        let session = self
            .registry
            .pool_for(length, &self.source)
            .and_then(|pool| Session::from_pool(pool, &mut self.rng));
        let session = match session {
            Ok(session) => session,
            Err(err) => {
                debug!("player {player}: cannot start length {length}: {err}");
                return Reply::public(format!(
                    "No words found with length {length}. Try a different number."
                ));
            }
        };

        let max_guesses = session.max_guesses();
        if self
            .registry
            .start(player, ActiveGame::new(session, server, now))
            .is_some()
        {
            debug!("player {player}: previous game replaced");
        }
        self.stats.record_start(server, player);
        info!("player {player} on server {server} started a {length}-letter game");

        Reply::public(format!(
            "Wordle game started with {length}-letter words! You get {max_guesses} guesses. \
             Use `/guessword yourword` to make a guess."
        ))
    }

    fn guess(&mut self, player: PlayerId, word: &str, now: Instant) -> Reply {
        let Some(game) = self.registry.get_mut(player) else {
            return Reply::private(
                "You don't have an active game. Start one with `/startwordle`.",
            );
        };

        let outcome = game.session.guess(word.trim());
        let word_length = game.session.word_length();

        match &outcome.kind {
            OutcomeKind::Rejected(err) => {
                debug!("player {player}: guess '{word}' rejected: {err}");
                game.session.clear_pending_error();
                Reply::private(err.to_string())
            }
            OutcomeKind::InProgress => {
                let feedback = outcome
                    .feedback
                    .as_ref()
                    .map(|f| f.to_emoji())
                    .unwrap_or_default();
                Reply::public(format!(
                    "{feedback} ({} guesses left)\n\nYour guesses so far:\n{}",
                    outcome.remaining_guesses,
                    history_block(&outcome.history, word_length)
                ))
            }
            OutcomeKind::Solved | OutcomeKind::Exhausted => {
                match self.registry.remove(player) {
                    Some(game) => self.finish(player, &game, &outcome, now),
                    None => Reply::public(history_block(&outcome.history, word_length)),
                }
            }
        }
    }

    fn finish(
        &mut self,
        player: PlayerId,
        game: &ActiveGame,
        outcome: &GuessOutcome,
        now: Instant,
    ) -> Reply {
        let secret = game.session.secret_word().text();
        let history = history_block(&outcome.history, game.session.word_length());
        let mut text = if outcome.kind == OutcomeKind::Solved {
            let elapsed = game.elapsed(now);
            let guesses = game.session.guesses_used();
            self.stats.record_win(game.server, player, guesses, elapsed);
            info!("player {player} solved '{secret}' in {guesses} guesses ({elapsed:?})");

            let (minutes, seconds) = minutes_seconds(elapsed);
            format!(
                "✅ Correct! The word was **{secret}**.\n\nYour guesses:\n{history}\n\
                 🎉 Congratulations, you solved it in {minutes} minutes and {seconds} seconds!"
            )
        } else {
            self.stats.record_loss(game.server, player);
            info!("player {player} ran out of guesses on '{secret}'");

            format!(
                "❌ Out of guesses! The word was **{secret}**.\n\nYour guesses:\n{history}\n\
                 😢 Better luck next time!"
            )
        };

        if let Some(meaning) = self.definitions.define(secret) {
            let _ = write!(text, "\n\n📖 **{secret}**: {meaning}");
        }
        Reply::public(text)
    }

    /// Deliver expiry warnings and end games past the time limit
    pub fn sweep(&mut self, now: Instant) -> Vec<Notice> {
        let events = self
            .registry
            .sweep(now, self.config.warning_at(), self.config.time_limit);

        events
            .into_iter()
            .map(|event| match event {
                TimerEvent::Warning { player } => Notice {
                    player,
                    text: format!(
                        "<@{player}>, {} left to finish your Wordle game!",
                        describe_duration(self.config.warning_before)
                    ),
                },
                TimerEvent::Expired { player, game } => {
                    self.stats.record_loss(game.server, player);
                    let secret = game.session.secret_word();
                    debug!("player {player}: game on '{secret}' expired");
                    Notice {
                        player,
                        text: format!(
                            "<@{player}>, time's up! Your Wordle game has ended. \
                             The word was **{secret}**."
                        ),
                    }
                }
            })
            .collect()
    }

    fn stats_text(&self, player: PlayerId, server: ServerId) -> String {
        let stats = self.stats.get(server, player);
        let mut text = String::from("**Your Wordle statistics** 📊\n");
        let _ = writeln!(text, "Games played: {}", stats.games_played);
        let _ = writeln!(
            text,
            "Games won: {} ({:.0}%)",
            stats.games_won,
            stats.win_rate() * 100.0
        );
        let _ = writeln!(
            text,
            "Current streak: {} (best {})",
            stats.current_streak, stats.max_streak
        );
        if let Some(fastest) = stats.fastest_time {
            let (m, s) = minutes_seconds(fastest);
            let _ = writeln!(text, "Fastest win: {m}m {s}s");
        }
        if let Some(average) = stats.average_time() {
            let (m, s) = minutes_seconds(average);
            let _ = writeln!(text, "Average win: {m}m {s}s");
        }
        if !stats.guess_distribution.is_empty() {
            text.push_str("Guess distribution:\n");
            for (guesses, wins) in &stats.guess_distribution {
                let _ = writeln!(text, "  {guesses}: {wins}");
            }
        }
        text.trim_end().to_string()
    }

    fn leaderboard_text(&self, player: PlayerId, server: ServerId) -> String {
        match self.stats.rankings(server, player) {
            Some(r) => format!(
                "**Your server ranking** 🏆 (out of {})\n\
                 Win rate: #{}\nFastest time: #{}\nAverage time: #{}",
                r.players, r.win_rank, r.fastest_rank, r.average_rank
            ),
            None => "You haven't played any games on this server yet.".to_string(),
        }
    }
}

fn help_text(config: &BotConfig) -> String {
    format!(
        "**How to Play Wordle on Discord** 🧠\n\n\
         🎯 The goal is to guess a secret word within a limited number of tries.\n\n\
         **Commands:**\n\
         `/startwordle [length]` – Starts a new game. You can specify word length \
         ({}–{}, default is {}).\n\
         `/guessword yourword` – Submit a guess.\n\
         `/stats` – Shows your statistics.\n\
         `/leaderboard` – Shows your rank on this server.\n\
         `/helpwordle` – Shows this help message.\n\n\
         **Rules:**\n\
         🟩 = Correct letter in correct place\n\
         🟨 = Correct letter, wrong place\n\
         ⬛ = Letter not in the word\n\n\
         ✅ You win by guessing the word before running out of guesses!\n\
         ⛔ You lose if you run out of guesses or time ({}).\n\n\
         _Example:_\n\
         `guess: GRAPE`\n\
         `result: 🟨⬛⬛🟩🟩`",
        config.min_length,
        config.max_length,
        config.default_length,
        describe_duration(config.time_limit)
    )
}
