//! Generic table-driven round state machine.

use super::error::RoundError;
use super::history::{StateHistory, StateTransition};
use super::state::{Phase, State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One game's round state machine.
///
/// Instances are immutable snapshots: [`transition`](Self::transition)
/// returns a new machine and never edits the receiver, so a caller that
/// owns a machine simply replaces it with the returned value.
///
/// # Example
///
/// ```rust
/// use party_rounds::core::RoundMachine;
/// use party_rounds::games::NeverHaveIEverPhase as Nhie;
///
/// let machine = RoundMachine::<Nhie>::new();
/// let machine = machine.transition(Nhie::ShowStatement).unwrap();
///
/// assert_eq!(machine.current(), Nhie::ShowStatement);
/// assert_eq!(machine.previous(), Some(Nhie::Init));
/// assert!(machine.transition(Nhie::NextRound).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RoundMachine<P: Phase> {
    generation: Uuid,
    current: P,
    previous: Option<P>,
    round: u32,
    history: StateHistory<P>,
}

impl<P: Phase> Default for RoundMachine<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Phase> RoundMachine<P> {
    /// Create a machine in the game's initial phase with empty history.
    pub fn new() -> Self {
        Self {
            generation: Uuid::new_v4(),
            current: P::INITIAL,
            previous: None,
            round: 0,
            history: StateHistory::new(),
        }
    }

    /// Fresh machine in the initial phase; the receiver is left as is.
    pub fn reset(&self) -> Self {
        tracing::debug!(
            game = P::GAME,
            from = self.current.name(),
            "round machine reset"
        );
        Self::new()
    }

    /// Identity of this play-through. Fresh for every `new` or `reset` and
    /// carried unchanged through transitions.
    pub fn generation(&self) -> Uuid {
        self.generation
    }

    pub fn current(&self) -> P {
        self.current
    }

    pub fn previous(&self) -> Option<P> {
        self.previous
    }

    /// Number of times the game's round-start phase has been entered.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Timestamped transition records.
    pub fn history(&self) -> &StateHistory<P> {
        &self.history
    }

    /// Phases left so far, oldest first.
    pub fn transition_history(&self) -> Vec<P> {
        self.history.departed()
    }

    /// Phases the machine may move to next.
    pub fn available(&self) -> &'static [P] {
        self.current.successors()
    }

    pub fn can_transition(&self, target: P) -> bool {
        P::table().allows(self.current, target)
    }

    /// True once the machine sits in a terminal phase.
    pub fn is_finished(&self) -> bool {
        P::table().is_terminal(self.current)
    }

    /// Move to `target` if the table allows it.
    ///
    /// On success the new machine has `target` as its current phase, the
    /// old current phase as `previous`, and exactly one more history entry.
    pub fn transition(&self, target: P) -> Result<Self, RoundError> {
        if !self.can_transition(target) {
            tracing::warn!(
                game = P::GAME,
                from = self.current.name(),
                to = target.name(),
                "rejected phase transition"
            );
            return Err(RoundError::InvalidTransition {
                game: P::GAME,
                from: self.current.name().to_string(),
                to: target.name().to_string(),
            });
        }

        let round = if target == P::ROUND_START {
            self.round + 1
        } else {
            self.round
        };

        let history = self.history.record(StateTransition {
            from: self.current,
            to: target,
            timestamp: Utc::now(),
            round,
        });

        tracing::debug!(
            game = P::GAME,
            from = self.current.name(),
            to = target.name(),
            round,
            "phase transition"
        );

        Ok(Self {
            generation: self.generation,
            current: target,
            previous: Some(self.current),
            round,
            history,
        })
    }

    /// Follow a sequence of transitions, stopping at the first illegal one.
    pub fn transition_through<I>(&self, targets: I) -> Result<Self, RoundError>
    where
        I: IntoIterator<Item = P>,
    {
        targets
            .into_iter()
            .try_fold(self.clone(), |machine, target| machine.transition(target))
    }
}
