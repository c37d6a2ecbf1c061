//! Shared play session: who is playing, their scores and the winner.
//!
//! A `Session` is an ordinary value passed to whatever needs it. Round
//! logic reads the roster size to decide whether a round may start and
//! adjusts scores through the operations below.

mod error;
mod player;

pub use error::SessionError;
pub use player::{Player, PlayerId};

use crate::config::GameConfig;
use crate::games::GameKind;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    players: Vec<Player>,
    winner: Option<PlayerId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player by name. Names are trimmed and must be unique,
    /// ignoring case.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        if self
            .players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name))
        {
            return Err(SessionError::DuplicateName(name.to_string()));
        }

        let player = Player::new(name);
        let id = player.id;
        tracing::info!(player = %id, name, "player joined");
        self.players.push(player);
        Ok(id)
    }

    /// Remove a player. Clears the winner if it was them.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, SessionError> {
        let index = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(SessionError::UnknownPlayer(id))?;

        if self.winner == Some(id) {
            self.winner = None;
        }

        let player = self.players.remove(index);
        tracing::info!(player = %id, name = %player.name, "player left");
        Ok(player)
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, SessionError> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or(SessionError::UnknownPlayer(id))
    }

    /// Players in join order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Add `delta` (possibly negative) to a player's score and return the new score.
    pub fn adjust_score(&mut self, id: PlayerId, delta: i32) -> Result<i32, SessionError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(SessionError::UnknownPlayer(id))?;

        player.score = player.score.saturating_add(delta);
        tracing::debug!(player = %id, delta, score = player.score, "score adjusted");
        Ok(player.score)
    }

    pub fn set_winner(&mut self, id: PlayerId) -> Result<(), SessionError> {
        self.player(id)?;
        self.winner = Some(id);
        tracing::info!(player = %id, "winner set");
        Ok(())
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id).ok())
    }

    /// Players sharing the highest score. Empty when nobody is playing.
    pub fn leaders(&self) -> Vec<&Player> {
        let Some(best) = self.players.iter().map(|p| p.score).max() else {
            return Vec::new();
        };
        self.players.iter().filter(|p| p.score == best).collect()
    }

    /// Precondition for starting a round.
    pub fn ensure_enough_players(&self, required: usize) -> Result<(), SessionError> {
        let present = self.player_count();
        if present < required {
            return Err(SessionError::NotEnoughPlayers { required, present });
        }
        Ok(())
    }

    /// [`ensure_enough_players`](Self::ensure_enough_players) using the
    /// configured minimum for `game`.
    pub fn ensure_ready_for(&self, game: GameKind, config: &GameConfig) -> Result<(), SessionError> {
        self.ensure_enough_players(config.min_players(game))
    }

    /// Zero every score and clear the winner, keeping the roster.
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.score = 0;
        }
        self.winner = None;
    }

    /// Empty the session entirely.
    pub fn reset(&mut self) {
        tracing::info!(players = self.players.len(), "session reset");
        self.players.clear();
        self.winner = None;
    }
}
