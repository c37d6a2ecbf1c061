//! Phase-scoped timers.
//!
//! A countdown or auto-advance is armed for one specific occurrence of a
//! phase. When it fires, the transition only happens if the machine is
//! still sitting in that same occurrence; otherwise the timer is stale and
//! firing it does nothing. Cancelling is dropping the timer.

use super::error::RoundError;
use super::machine::RoundMachine;
use super::state::{Phase, State};
use std::time::Duration;
use uuid::Uuid;

/// Outcome of firing a [`PhaseTimer`].
#[derive(Clone, Debug, PartialEq)]
pub enum TimerFire<P: Phase> {
    /// The machine advanced to the timer's target.
    Advanced(RoundMachine<P>),
    /// The machine moved on since the timer was armed.
    Stale,
}

/// A pending auto-advance bound to one phase occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseTimer<P: Phase> {
    generation: Uuid,
    armed_for: P,
    epoch: usize,
    target: P,
    delay: Duration,
}

impl<P: Phase> PhaseTimer<P> {
    /// Arm a timer that moves `machine` to `target` after `delay`.
    ///
    /// Fails right away if `target` is not reachable from the current
    /// phase, so a timer can never hold an illegal edge.
    pub fn arm(machine: &RoundMachine<P>, target: P, delay: Duration) -> Result<Self, RoundError> {
        if !machine.can_transition(target) {
            return Err(RoundError::InvalidTransition {
                game: P::GAME,
                from: machine.current().name().to_string(),
                to: target.name().to_string(),
            });
        }

        Ok(Self {
            generation: machine.generation(),
            armed_for: machine.current(),
            epoch: machine.history().len(),
            target,
            delay,
        })
    }

    pub fn armed_for(&self) -> P {
        self.armed_for
    }

    pub fn target(&self) -> P {
        self.target
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether `machine` is still in the phase occurrence this timer was armed for.
    ///
    /// The occurrence is pinned by the machine's generation and history
    /// length, so a reset followed by a replay to the same phase is stale.
    pub fn is_current(&self, machine: &RoundMachine<P>) -> bool {
        machine.generation() == self.generation
            && machine.current() == self.armed_for
            && machine.history().len() == self.epoch
    }

    /// Apply the timer's transition to `machine` unless the timer is stale.
    pub fn fire(&self, machine: &RoundMachine<P>) -> Result<TimerFire<P>, RoundError> {
        if !self.is_current(machine) {
            tracing::debug!(
                game = P::GAME,
                armed_for = self.armed_for.name(),
                current = machine.current().name(),
                "ignoring stale phase timer"
            );
            return Ok(TimerFire::Stale);
        }

        machine.transition(self.target).map(TimerFire::Advanced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::WouldYouRatherPhase as Wyr;

    fn in_countdown() -> RoundMachine<Wyr> {
        RoundMachine::new()
            .transition_through([Wyr::ShowDilemma, Wyr::Countdown])
            .unwrap()
    }

    #[test]
    fn fire_advances_when_phase_unchanged() {
        let machine = in_countdown();
        let timer = PhaseTimer::arm(&machine, Wyr::Voting, Duration::from_secs(10)).unwrap();

        match timer.fire(&machine).unwrap() {
            TimerFire::Advanced(next) => assert_eq!(next.current(), Wyr::Voting),
            TimerFire::Stale => panic!("timer should have fired"),
        }
    }

    #[test]
    fn fire_is_stale_after_machine_moved_on() {
        let machine = in_countdown();
        let timer = PhaseTimer::arm(&machine, Wyr::Voting, Duration::from_secs(10)).unwrap();
        let moved = machine.transition(Wyr::Voting).unwrap();

        assert_eq!(timer.fire(&moved).unwrap(), TimerFire::Stale);
    }

    #[test]
    fn fire_is_stale_when_same_phase_reentered() {
        let first = RoundMachine::<Wyr>::new()
            .transition(Wyr::ShowDilemma)
            .unwrap();
        let timer = PhaseTimer::arm(&first, Wyr::Countdown, Duration::from_secs(3)).unwrap();

        let later = first
            .transition_through([
                Wyr::Countdown,
                Wyr::Voting,
                Wyr::RevealResults,
                Wyr::NextRound,
                Wyr::ShowDilemma,
            ])
            .unwrap();

        assert_eq!(later.current(), timer.armed_for());
        assert!(!timer.is_current(&later));
        assert_eq!(timer.fire(&later).unwrap(), TimerFire::Stale);
    }

    #[test]
    fn fire_is_stale_after_reset_and_replay() {
        let machine = in_countdown();
        let timer = PhaseTimer::arm(&machine, Wyr::Voting, Duration::from_secs(10)).unwrap();

        let replay = machine
            .transition(Wyr::Exit)
            .unwrap()
            .reset()
            .transition_through([Wyr::ShowDilemma, Wyr::Countdown])
            .unwrap();

        assert_eq!(replay.history().len(), machine.history().len());
        assert_eq!(timer.fire(&replay).unwrap(), TimerFire::Stale);
    }

    #[test]
    fn arm_rejects_illegal_target() {
        let machine = in_countdown();
        assert!(PhaseTimer::arm(&machine, Wyr::Penalty, Duration::from_secs(1)).is_err());
    }
}
