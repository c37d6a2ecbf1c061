//! Would You Rather.
//!
//! A dilemma is shown, a countdown runs, everyone votes, and the reveal
//! decides whether somebody pays a penalty, has to defend their pick, or
//! the group simply moves on.

use crate::config::GameConfig;
use crate::content::{ContentItem, Intensity};
use crate::core::{PhaseTimer, RoundError, RoundMachine};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::round_phases! {
    game: "Would You Rather",
    pub enum WouldYouRatherPhase {
        Init = "INIT" => [ShowDilemma, Exit],
        ShowDilemma = "SHOW_DILEMMA" => [Countdown, Exit],
        Countdown = "COUNTDOWN" => [Voting, Exit],
        Voting = "VOTING" => [RevealResults, Exit],
        RevealResults = "REVEAL_RESULTS" => [Penalty, Defense, NextRound, Exit],
        Penalty = "PENALTY" => [NextRound, Exit],
        Defense = "DEFENSE" => [NextRound, Exit],
        NextRound = "NEXT_ROUND" => [ShowDilemma, Exit],
        Exit = "EXIT" => [],
    }
    initial: Init,
    round_start: ShowDilemma,
}

pub type WouldYouRather = RoundMachine<WouldYouRatherPhase>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dilemma {
    pub id: String,
    pub option_a: String,
    pub option_b: String,
    #[serde(default)]
    pub intensity: Intensity,
}

impl Dilemma {
    pub fn new(
        id: impl Into<String>,
        option_a: impl Into<String>,
        option_b: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            option_a: option_a.into(),
            option_b: option_b.into(),
            intensity: Intensity::default(),
        }
    }

    pub fn option(&self, choice: Choice) -> &str {
        match choice {
            Choice::A => &self.option_a,
            Choice::B => &self.option_b,
        }
    }
}

impl ContentItem for Dilemma {
    fn id(&self) -> &str {
        &self.id
    }

    fn intensity(&self) -> Intensity {
        self.intensity
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
}

/// How the vote went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    NoVotes,
    Unanimous(Choice),
    Tie,
    /// The named side lost the vote.
    Minority(Choice),
}

impl VoteOutcome {
    /// Phase that follows `REVEAL_RESULTS`.
    ///
    /// The minority pays the penalty, a split room defends their picks and
    /// a unanimous (or empty) vote moves straight on.
    pub fn consequence(self) -> WouldYouRatherPhase {
        match self {
            Self::Minority(_) => WouldYouRatherPhase::Penalty,
            Self::Tie => WouldYouRatherPhase::Defense,
            Self::NoVotes | Self::Unanimous(_) => WouldYouRatherPhase::NextRound,
        }
    }
}

/// Running vote count for one dilemma.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    a: u32,
    b: u32,
}

impl VoteTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(mut self, choice: Choice) -> Self {
        match choice {
            Choice::A => self.a += 1,
            Choice::B => self.b += 1,
        }
        self
    }

    pub fn votes(&self, choice: Choice) -> u32 {
        match choice {
            Choice::A => self.a,
            Choice::B => self.b,
        }
    }

    pub fn total(&self) -> u32 {
        self.a + self.b
    }

    pub fn outcome(&self) -> VoteOutcome {
        match (self.a, self.b) {
            (0, 0) => VoteOutcome::NoVotes,
            (_, 0) => VoteOutcome::Unanimous(Choice::A),
            (0, _) => VoteOutcome::Unanimous(Choice::B),
            (a, b) => match a.cmp(&b) {
                Ordering::Equal => VoteOutcome::Tie,
                Ordering::Greater => VoteOutcome::Minority(Choice::B),
                Ordering::Less => VoteOutcome::Minority(Choice::A),
            },
        }
    }
}

impl FromIterator<Choice> for VoteTally {
    fn from_iter<I: IntoIterator<Item = Choice>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::record)
    }
}

/// Arm the countdown that moves `COUNTDOWN` on to `VOTING`.
pub fn arm_countdown(
    machine: &WouldYouRather,
    config: &GameConfig,
) -> Result<PhaseTimer<WouldYouRatherPhase>, RoundError> {
    PhaseTimer::arm(machine, WouldYouRatherPhase::Voting, config.countdown())
}
