//! Core round state machine types and logic.
//!
//! This module contains the pure core of every game's round lifecycle:
//! - Phase definitions via the `State` and `Phase` traits
//! - Static transition tables
//! - The generic `RoundMachine` engine and its immutable history
//! - Phase-scoped timers that refuse to fire against a machine that moved on
//!
//! Nothing in here performs I/O; callers replace their owned machine with
//! the value a transition returns.

mod error;
mod history;
mod machine;
mod state;
mod table;
mod timer;

pub use error::RoundError;
pub use history::{StateHistory, StateTransition};
pub use machine::RoundMachine;
pub use state::{Phase, State};
pub use table::TransitionTable;
pub use timer::{PhaseTimer, TimerFire};
