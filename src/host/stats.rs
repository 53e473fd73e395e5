//! Per-player statistics
//!
//! An in-memory accumulator keyed by (server, player). Games are counted when
//! they start; wins add to the guess distribution and timing figures; any
//! loss (including a timeout) breaks the streak.

use super::{PlayerId, ServerId};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::time::Duration;

/// Aggregate figures for one player on one server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub games_played: u32,
    pub games_won: u32,
    pub fastest_time: Option<Duration>,
    /// Sum of winning game durations, for the average
    pub total_win_time: Duration,
    /// Guesses used → number of wins
    pub guess_distribution: BTreeMap<usize, u32>,
    pub current_streak: u32,
    pub max_streak: u32,
}

impl PlayerStats {
    /// Fraction of played games that were won (0.0 with no games)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played)
        }
    }

    /// Mean duration of winning games
    #[must_use]
    pub fn average_time(&self) -> Option<Duration> {
        (self.games_won > 0).then(|| self.total_win_time / self.games_won)
    }

    fn record_win(&mut self, guesses: usize, elapsed: Duration) {
        self.games_won += 1;
        *self.guess_distribution.entry(guesses).or_insert(0) += 1;
        self.fastest_time = Some(self.fastest_time.map_or(elapsed, |t| t.min(elapsed)));
        self.total_win_time += elapsed;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
    }

    fn record_loss(&mut self) {
        self.current_streak = 0;
    }
}

/// A player's 1-based position in the server rankings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rankings {
    pub win_rank: usize,
    pub fastest_rank: usize,
    pub average_rank: usize,
    /// Number of ranked players on the server
    pub players: usize,
}

/// Statistics for every player the bot has seen
#[derive(Debug, Clone, Default)]
pub struct StatsBook {
    players: FxHashMap<(ServerId, PlayerId), PlayerStats>,
}

impl StatsBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a newly started game
    pub fn record_start(&mut self, server: ServerId, player: PlayerId) {
        self.entry(server, player).games_played += 1;
    }

    /// Record a solved game
    pub fn record_win(
        &mut self,
        server: ServerId,
        player: PlayerId,
        guesses: usize,
        elapsed: Duration,
    ) {
        self.entry(server, player).record_win(guesses, elapsed);
    }

    /// Record an exhausted or expired game
    pub fn record_loss(&mut self, server: ServerId, player: PlayerId) {
        self.entry(server, player).record_loss();
    }

    /// Statistics for a player, zeroed if never seen
    #[must_use]
    pub fn get(&self, server: ServerId, player: PlayerId) -> PlayerStats {
        self.players
            .get(&(server, player))
            .cloned()
            .unwrap_or_default()
    }

    /// Where a player stands among everyone who played on `server`
    ///
    /// Win rate ranks descending; fastest and average time ascending with
    /// players lacking a win ranked last. Ties keep player id order.
    /// Returns `None` if the player has no games on the server.
    #[must_use]
    pub fn rankings(&self, server: ServerId, player: PlayerId) -> Option<Rankings> {
        let mut ranked: Vec<(PlayerId, &PlayerStats)> = self
            .players
            .iter()
            .filter(|((s, _), stats)| *s == server && stats.games_played > 0)
            .map(|((_, p), stats)| (*p, stats))
            .collect();

        ranked.sort_by(|a, b| {
            b.1.win_rate()
                .partial_cmp(&a.1.win_rate())
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        let win_rank = rank_of(&ranked, player)?;

        ranked.sort_by(|a, b| time_order(a.1.fastest_time, b.1.fastest_time).then(a.0.cmp(&b.0)));
        let fastest_rank = rank_of(&ranked, player)?;

        ranked.sort_by(|a, b| {
            time_order(a.1.average_time(), b.1.average_time()).then(a.0.cmp(&b.0))
        });
        let average_rank = rank_of(&ranked, player)?;

        Some(Rankings {
            win_rank,
            fastest_rank,
            average_rank,
            players: ranked.len(),
        })
    }

    fn entry(&mut self, server: ServerId, player: PlayerId) -> &mut PlayerStats {
        self.players.entry((server, player)).or_default()
    }
}

fn rank_of(ranked: &[(PlayerId, &PlayerStats)], player: PlayerId) -> Option<usize> {
    ranked.iter().position(|(p, _)| *p == player).map(|i| i + 1)
}

/// Ascending, with missing times after every present one
fn time_order(a: Option<Duration>, b: Option<Duration>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
