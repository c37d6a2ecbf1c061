//! Round machine errors.

use thiserror::Error;

/// Errors raised by round state machines.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoundError {
    /// The target phase is not a direct successor of the current one.
    ///
    /// Indicates that a caller offered an action that should have been
    /// disabled; not something to retry.
    #[error("{game}: no transition from '{from}' to '{to}'")]
    InvalidTransition {
        game: &'static str,
        from: String,
        to: String,
    },
}
