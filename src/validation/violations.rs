//! Violations found by startup validation.

use thiserror::Error;

/// Structural defects in a transition table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableViolation {
    #[error("Phase '{phase}' has more than one table entry")]
    DuplicatePhase { phase: String },

    #[error("Phase '{to}' is reachable from '{from}' but has no table entry")]
    MissingPhase { from: String, to: String },

    #[error("Initial phase '{initial}' has no table entry")]
    MissingInitial { initial: String },

    #[error("Initial phase '{initial}' is re-entered from '{from}'")]
    InitialReentered { initial: String, from: String },

    #[error("No terminal phase is reachable from '{initial}'")]
    NoReachableTerminal { initial: String },

    #[error("Phase '{phase}' can never reach a terminal phase")]
    Livelock { phase: String },
}

/// Defects in a content pool.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PoolViolation {
    #[error("Default mode '{mode}' has no content")]
    EmptyDefaultPool { mode: String },

    #[error("Duplicate item id '{id}' in mode '{mode}'")]
    DuplicateId { mode: String, id: String },
}

/// A game whose table failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub game: &'static str,
    pub violations: Vec<TableViolation>,
}

/// Fatal configuration problems detected before any session starts.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("{} game table(s) failed validation: {}", .0.len(), summarize(.0))]
    InvalidTables(Vec<GameReport>),
}

fn summarize(reports: &[GameReport]) -> String {
    reports
        .iter()
        .map(|report| {
            let details: Vec<String> = report.violations.iter().map(ToString::to_string).collect();
            format!("{} ({})", report.game, details.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ")
}
