//! What If.

use crate::content::{ContentItem, Intensity};
use crate::core::RoundMachine;
use serde::{Deserialize, Serialize};

crate::round_phases! {
    game: "What If",
    pub enum WhatIfPhase {
        Init = "INIT" => [ShowScenario, Exit],
        ShowScenario = "SHOW_SCENARIO" => [Discussion, NextCard, Exit],
        Discussion = "DISCUSSION" => [NextCard, Exit],
        NextCard = "NEXT_CARD" => [ShowScenario, GameOver, Exit],
        GameOver = "GAME_OVER" => [],
        Exit = "EXIT" => [],
    }
    initial: Init,
    round_start: ShowScenario,
}

pub type WhatIf = RoundMachine<WhatIfPhase>;

/// A hypothetical to talk through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub intensity: Intensity,
}

impl Scenario {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            intensity: Intensity::default(),
        }
    }
}

impl ContentItem for Scenario {
    fn id(&self) -> &str {
        &self.id
    }

    fn intensity(&self) -> Intensity {
        self.intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_can_be_skipped_without_discussion() {
        let machine = WhatIf::new()
            .transition_through([
                WhatIfPhase::ShowScenario,
                WhatIfPhase::NextCard,
                WhatIfPhase::ShowScenario,
            ])
            .unwrap();
        assert_eq!(machine.round(), 2);
    }
}
