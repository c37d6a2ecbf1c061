//! Session errors.

use super::player::PlayerId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Player name cannot be empty")]
    EmptyName,

    #[error("A player named '{0}' is already in the session")]
    DuplicateName(String),

    #[error("No player with id {0}")]
    UnknownPlayer(PlayerId),

    #[error("Need at least {required} players, have {present}")]
    NotEnoughPlayers { required: usize, present: usize },
}
