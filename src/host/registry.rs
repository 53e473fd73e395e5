//! Active games, one per player
//!
//! The registry owns every running `Session` together with the bookkeeping
//! the host needs around it (server, start time, whether the expiry warning
//! went out). It also caches one filtered `WordPool` per word length so that
//! starting a game does not refilter the word source.

use super::source::WordSource;
use super::{PlayerId, ServerId};
use crate::game::{GameError, Session, WordPool};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A running game and its host-side bookkeeping
#[derive(Debug, Clone)]
pub struct ActiveGame {
    pub session: Session,
    pub server: ServerId,
    pub started_at: Instant,
    pub warned: bool,
}

impl ActiveGame {
    #[must_use]
    pub fn new(session: Session, server: ServerId, started_at: Instant) -> Self {
        Self {
            session,
            server,
            started_at,
            warned: false,
        }
    }

    /// Time since the game started
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }
}

/// Result of an expiry sweep for one player
#[derive(Debug, Clone)]
pub enum TimerEvent {
    /// The game passed the warning age; sent once per game
    Warning { player: PlayerId },
    /// The game passed the time limit and was removed
    Expired { player: PlayerId, game: ActiveGame },
}

/// Player → active game map plus per-length pool cache
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: FxHashMap<PlayerId, ActiveGame>,
    pools: FxHashMap<usize, Arc<WordPool>>,
}

impl GameRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filtered pool for `length`, built from `source` on first use
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if the source has no usable words of
    /// that length. Failures are not cached.
    pub fn pool_for<S: WordSource + ?Sized>(
        &mut self,
        length: usize,
        source: &S,
    ) -> Result<Arc<WordPool>, GameError> {
        if let Some(pool) = self.pools.get(&length) {
            return Ok(Arc::clone(pool));
        }
        let pool = Arc::new(WordPool::new(source.candidates(length), length)?);
        self.pools.insert(length, Arc::clone(&pool));
        Ok(pool)
    }

    /// Register a game, returning the one it replaced
    pub fn start(&mut self, player: PlayerId, game: ActiveGame) -> Option<ActiveGame> {
        self.games.insert(player, game)
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&ActiveGame> {
        self.games.get(&player)
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut ActiveGame> {
        self.games.get_mut(&player)
    }

    pub fn remove(&mut self, player: PlayerId) -> Option<ActiveGame> {
        self.games.remove(&player)
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.games.contains_key(&player)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Warn and expire games by age
    ///
    /// Games at least `limit` old are removed and returned as `Expired`.
    /// Younger games at least `warn_at` old get a single `Warning`.
    /// Events are ordered by player id.
    pub fn sweep(&mut self, now: Instant, warn_at: Duration, limit: Duration) -> Vec<TimerEvent> {
        let mut players: Vec<PlayerId> = self.games.keys().copied().collect();
        players.sort_unstable();

        let mut events = Vec::new();
        for player in players {
            let Some(game) = self.games.get_mut(&player) else {
                continue;
            };
            let age = game.elapsed(now);
            if age >= limit {
                if let Some(game) = self.games.remove(&player) {
                    events.push(TimerEvent::Expired { player, game });
                }
            } else if age >= warn_at && !game.warned {
                game.warned = true;
                events.push(TimerEvent::Warning { player });
            }
        }
        events
    }
}
