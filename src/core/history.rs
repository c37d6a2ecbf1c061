//! Transition history tracking.
//!
//! Every successful transition leaves a record behind. Histories are
//! immutable values: recording returns a new history and leaves the old
//! one as it was.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase transition.
///
/// # Example
///
/// ```rust
/// use party_rounds::core::StateTransition;
/// use party_rounds::games::NeverHaveIEverPhase;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: NeverHaveIEverPhase::Init,
///     to: NeverHaveIEverPhase::ShowStatement,
///     timestamp: Utc::now(),
///     round: 1,
/// };
/// assert_eq!(transition.round, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The phase being left
    pub from: S,
    /// The phase being entered
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Round counter after the transition
    pub round: u32,
}

/// Ordered, append-only history of transitions.
///
/// # Example
///
/// ```rust
/// use party_rounds::core::{StateHistory, StateTransition};
/// use party_rounds::games::NeverHaveIEverPhase as Nhie;
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: Nhie::Init,
///     to: Nhie::ShowStatement,
///     timestamp: Utc::now(),
///     round: 1,
/// });
///
/// assert_eq!(history.departed(), vec![Nhie::Init]);
/// assert_eq!(history.path(), vec![&Nhie::Init, &Nhie::ShowStatement]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is not touched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Phases that were left, oldest first.
    pub fn departed(&self) -> Vec<S> {
        self.transitions.iter().map(|t| t.from.clone()).collect()
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the first departed state,
    /// then the `to` state of each transition.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Get all transitions in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
