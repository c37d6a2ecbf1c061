//! Runtime configuration.

use crate::content::DEFAULT_MODE;
use crate::games::GameKind;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Countdown must be at least one second")]
    ZeroCountdown,

    #[error("{game} needs at least one player")]
    ZeroPlayers { game: GameKind },
}

/// Settings shared by every game screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Mode served when a requested mode is unknown or empty. Pools built
    /// with `ContentPool::from_config` fall back to it.
    pub default_mode: String,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Overrides for the minimum roster size per game.
    pub min_players: BTreeMap<GameKind, usize>,
    /// Would You Rather countdown length.
    pub countdown_secs: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_mode: DEFAULT_MODE.to_string(),
            seed: None,
            min_players: BTreeMap::new(),
            countdown_secs: 10,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.countdown_secs == 0 {
            return Err(ConfigError::ZeroCountdown);
        }

        if let Some((game, _)) = self.min_players.iter().find(|(_, min)| **min == 0) {
            return Err(ConfigError::ZeroPlayers { game: *game });
        }

        Ok(())
    }

    pub fn countdown(&self) -> Duration {
        Duration::from_secs(self.countdown_secs)
    }

    /// Minimum players for `game`, falling back to the game's own default.
    pub fn min_players(&self, game: GameKind) -> usize {
        self.min_players
            .get(&game)
            .copied()
            .unwrap_or_else(|| game.default_min_players())
    }

    /// Random source for rotation and decks.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        }
    }
}
