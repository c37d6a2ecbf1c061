//! Truth or Dare.

use crate::content::{ContentItem, Intensity, Rotation};
use crate::core::RoundMachine;
use crate::session::{Player, PlayerId, Session, SessionError};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

crate::round_phases! {
    game: "Truth or Dare",
    pub enum TruthOrDarePhase {
        Init = "INIT" => [PickPlayer, Exit],
        PickPlayer = "PICK_PLAYER" => [Choose, Exit],
        Choose = "CHOOSE" => [Truth, Dare, Exit],
        Truth = "TRUTH" => [Completed, Forfeit, Exit],
        Dare = "DARE" => [Completed, Forfeit, Exit],
        Completed = "COMPLETED" => [NextRound, Exit],
        Forfeit = "FORFEIT" => [NextRound, Exit],
        NextRound = "NEXT_ROUND" => [PickPlayer, Exit],
        Exit = "EXIT" => [],
    }
    initial: Init,
    round_start: PickPlayer,
}

pub type TruthOrDare = RoundMachine<TruthOrDarePhase>;

/// Points for carrying out a truth or a dare.
pub const COMPLETION_POINTS: i32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    Truth,
    Dare,
}

impl PromptKind {
    /// Phase entered once the player picks this kind.
    pub fn phase(self) -> TruthOrDarePhase {
        match self {
            Self::Truth => TruthOrDarePhase::Truth,
            Self::Dare => TruthOrDarePhase::Dare,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub kind: PromptKind,
    pub text: String,
    #[serde(default)]
    pub intensity: Intensity,
}

impl Prompt {
    pub fn new(id: impl Into<String>, kind: PromptKind, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            text: text.into(),
            intensity: Intensity::default(),
        }
    }
}

impl ContentItem for Prompt {
    fn id(&self) -> &str {
        &self.id
    }

    fn intensity(&self) -> Intensity {
        self.intensity
    }
}

/// Next unseen prompt of `kind` from the rotation's mode.
pub fn next_prompt<'a, R: Rng>(
    rotation: &mut Rotation<'a, Prompt, R>,
    kind: PromptKind,
) -> Option<&'a Prompt> {
    rotation.next_where(|prompt| prompt.kind == kind)
}

/// Pick whose turn it is, uniformly among the roster.
pub fn pick_player<'s, R: Rng + ?Sized>(session: &'s Session, rng: &mut R) -> Option<&'s Player> {
    session.players().choose(rng)
}

/// Score a finished turn and return the phase that follows it.
pub fn finish_turn(
    session: &mut Session,
    player: PlayerId,
    completed: bool,
) -> Result<TruthOrDarePhase, SessionError> {
    if completed {
        session.adjust_score(player, COMPLETION_POINTS)?;
        Ok(TruthOrDarePhase::Completed)
    } else {
        session.player(player)?;
        Ok(TruthOrDarePhase::Forfeit)
    }
}
