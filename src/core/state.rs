//! Phase traits for round state machines.
//!
//! Every game declares its own closed phase enumeration. The `State` trait
//! gives the pure inspection methods shared by all of them, and `Phase`
//! attaches the game's static transition table.

use super::table::TransitionTable;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe the current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States travel to the presentation layer as data
///
/// # Example
///
/// ```rust
/// use party_rounds::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum CardState {
///     Hidden,
///     Shown,
///     Dismissed,
/// }
///
/// impl State for CardState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Hidden => "HIDDEN",
///             Self::Shown => "SHOWN",
///             Self::Dismissed => "DISMISSED",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Dismissed)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// A phase of one game's round lifecycle.
///
/// The transition table is declared once per game as static data. Use the
/// [`round_phases!`](crate::round_phases) macro rather than implementing
/// this by hand.
pub trait Phase: State + Copy + Eq + Hash + 'static {
    /// Human readable game name, used in logs and validation reports.
    const GAME: &'static str;

    /// Phase every machine starts in. Never re-entered.
    const INITIAL: Self;

    /// Phase whose entry marks the start of a new round.
    const ROUND_START: Self;

    /// Adjacency list: each phase with the phases reachable directly from it.
    const EDGES: &'static [(Self, &'static [Self])];

    /// The game's transition table.
    fn table() -> TransitionTable<Self> {
        TransitionTable::new(Self::EDGES)
    }

    /// Phases reachable directly from this one.
    fn successors(&self) -> &'static [Self] {
        Self::table().successors(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestPhase {
        Start,
        Play,
        Done,
    }

    impl State for TestPhase {
        fn name(&self) -> &str {
            match self {
                Self::Start => "START",
                Self::Play => "PLAY",
                Self::Done => "DONE",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Done)
        }
    }

    impl Phase for TestPhase {
        const GAME: &'static str = "Test";
        const INITIAL: Self = Self::Start;
        const ROUND_START: Self = Self::Play;
        const EDGES: &'static [(Self, &'static [Self])] = &[
            (Self::Start, &[Self::Play]),
            (Self::Play, &[Self::Play, Self::Done]),
            (Self::Done, &[]),
        ];
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestPhase::Start.name(), "START");
        assert_eq!(TestPhase::Play.name(), "PLAY");
        assert_eq!(TestPhase::Done.name(), "DONE");
    }

    #[test]
    fn is_final_identifies_terminal_states() {
        assert!(!TestPhase::Start.is_final());
        assert!(!TestPhase::Play.is_final());
        assert!(TestPhase::Done.is_final());
    }

    #[test]
    fn successors_come_from_table() {
        assert_eq!(TestPhase::Start.successors(), &[TestPhase::Play]);
        assert_eq!(
            TestPhase::Play.successors(),
            &[TestPhase::Play, TestPhase::Done]
        );
        assert!(TestPhase::Done.successors().is_empty());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestPhase::Play;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestPhase = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
