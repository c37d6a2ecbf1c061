//! Never Have I Ever.
//!
//! A statement is shown, players react, and anyone who has done it either
//! tells the story or takes the penalty.

use crate::content::{ContentItem, Intensity};
use crate::core::RoundMachine;
use serde::{Deserialize, Serialize};

crate::round_phases! {
    game: "Never Have I Ever",
    pub enum NeverHaveIEverPhase {
        Init = "INIT" => [ShowStatement, Exit],
        ShowStatement = "SHOW_STATEMENT" => [PlayerReaction, Exit],
        PlayerReaction = "PLAYER_REACTION" => [StoryTime, Penalty, Exit],
        StoryTime = "STORY_TIME" => [NextRound, Exit],
        Penalty = "PENALTY" => [NextRound, Exit],
        NextRound = "NEXT_ROUND" => [ShowStatement, Exit],
        Exit = "EXIT" => [],
    }
    initial: Init,
    round_start: ShowStatement,
}

pub type NeverHaveIEver = RoundMachine<NeverHaveIEverPhase>;

/// A "Never have I ever..." prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub intensity: Intensity,
}

impl Statement {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            intensity: Intensity::default(),
        }
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }
}

impl ContentItem for Statement {
    fn id(&self) -> &str {
        &self.id
    }

    fn intensity(&self) -> Intensity {
        self.intensity
    }
}

/// What a player who has done it chooses to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    TellStory,
    TakePenalty,
}

impl Reaction {
    /// Phase that follows `PLAYER_REACTION` for this reaction.
    pub fn consequence(self) -> NeverHaveIEverPhase {
        match self {
            Self::TellStory => NeverHaveIEverPhase::StoryTime,
            Self::TakePenalty => NeverHaveIEverPhase::Penalty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoundError;

    #[test]
    fn round_loops_through_story_time() {
        let machine = NeverHaveIEver::new()
            .transition_through([
                NeverHaveIEverPhase::ShowStatement,
                NeverHaveIEverPhase::PlayerReaction,
                Reaction::TellStory.consequence(),
                NeverHaveIEverPhase::NextRound,
                NeverHaveIEverPhase::ShowStatement,
            ])
            .unwrap();

        assert_eq!(machine.current(), NeverHaveIEverPhase::ShowStatement);
        assert_eq!(machine.round(), 2);
    }

    #[test]
    fn statement_cannot_skip_to_next_round() {
        let machine = NeverHaveIEver::new()
            .transition(NeverHaveIEverPhase::ShowStatement)
            .unwrap();

        assert!(matches!(
            machine.transition(NeverHaveIEverPhase::NextRound),
            Err(RoundError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn reactions_map_to_consequences() {
        assert_eq!(Reaction::TellStory.consequence(), NeverHaveIEverPhase::StoryTime);
        assert_eq!(Reaction::TakePenalty.consequence(), NeverHaveIEverPhase::Penalty);
    }
}
