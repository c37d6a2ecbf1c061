//! Fuck Marry Kill.
//!
//! Swipe-card game: each card shows three candidates and the player hands
//! out each verdict exactly once.

use crate::content::{ContentItem, Intensity};
use crate::core::RoundMachine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

crate::round_phases! {
    game: "Fuck Marry Kill",
    pub enum FuckMarryKillPhase {
        Init = "INIT" => [ShowCandidates, Exit],
        ShowCandidates = "SHOW_CANDIDATES" => [Assigning, Exit],
        Assigning = "ASSIGNING" => [Reveal, Exit],
        Reveal = "REVEAL" => [NextRound, Exit],
        NextRound = "NEXT_ROUND" => [ShowCandidates, GameOver, Exit],
        GameOver = "GAME_OVER" => [],
        Exit = "EXIT" => [],
    }
    initial: Init,
    round_start: ShowCandidates,
}

pub type FuckMarryKill = RoundMachine<FuckMarryKillPhase>;

/// Three candidates shown on one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trio {
    pub id: String,
    pub candidates: [String; 3],
    #[serde(default)]
    pub intensity: Intensity,
}

impl Trio {
    pub fn new(id: impl Into<String>, candidates: [&str; 3]) -> Self {
        Self {
            id: id.into(),
            candidates: candidates.map(str::to_string),
            intensity: Intensity::default(),
        }
    }
}

impl ContentItem for Trio {
    fn id(&self) -> &str {
        &self.id
    }

    fn intensity(&self) -> Intensity {
        self.intensity
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Fuck,
    Marry,
    Kill,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("Verdict {0:?} was given to more than one candidate")]
    RepeatedVerdict(Verdict),
}

/// One verdict per candidate, each verdict used exactly once.
///
/// Serialized as a bare array of three verdicts; deserialization goes
/// through [`Assignment::new`], so a repeated verdict is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[Verdict; 3]", into = "[Verdict; 3]")]
pub struct Assignment {
    verdicts: [Verdict; 3],
}

impl Assignment {
    /// `verdicts[i]` goes to the trio's `i`-th candidate.
    pub fn new(verdicts: [Verdict; 3]) -> Result<Self, AssignmentError> {
        for (i, verdict) in verdicts.iter().enumerate() {
            if verdicts[i + 1..].contains(verdict) {
                return Err(AssignmentError::RepeatedVerdict(*verdict));
            }
        }
        Ok(Self { verdicts })
    }

    pub fn verdicts(&self) -> [Verdict; 3] {
        self.verdicts
    }

    /// Candidate that received `verdict`. Every verdict is held by exactly
    /// one candidate.
    pub fn candidate<'t>(&self, trio: &'t Trio, verdict: Verdict) -> &'t str {
        let index = self
            .verdicts
            .iter()
            .position(|v| *v == verdict)
            .unwrap_or_default();
        &trio.candidates[index]
    }

    /// Candidates paired with their verdicts, in card order.
    pub fn pairs<'t>(&self, trio: &'t Trio) -> [(&'t str, Verdict); 3] {
        [0, 1, 2].map(|i| (trio.candidates[i].as_str(), self.verdicts[i]))
    }
}

impl TryFrom<[Verdict; 3]> for Assignment {
    type Error = AssignmentError;

    fn try_from(verdicts: [Verdict; 3]) -> Result<Self, Self::Error> {
        Self::new(verdicts)
    }
}

impl From<Assignment> for [Verdict; 3] {
    fn from(assignment: Assignment) -> Self {
        assignment.verdicts
    }
}
