//! The game catalog.
//!
//! Each game declares its own phase enum and transition table; all of
//! them run on the same [`RoundMachine`] engine. Swipe-card games
//! additionally implement [`DeckPhase`] so a deck can drive them.

mod fuck_marry_kill;
mod never_have_i_ever;
mod true_false;
mod truth_or_dare;
mod what_if;
mod would_you_rather;

pub use fuck_marry_kill::{
    Assignment, AssignmentError, FuckMarryKill, FuckMarryKillPhase, Trio, Verdict,
};
pub use never_have_i_ever::{NeverHaveIEver, NeverHaveIEverPhase, Reaction, Statement};
pub use true_false::{score_answer, TriviaFact, TrueFalse, TrueFalsePhase, CORRECT_ANSWER_POINTS};
pub use truth_or_dare::{
    finish_turn, next_prompt, pick_player, Prompt, PromptKind, TruthOrDare, TruthOrDarePhase,
    COMPLETION_POINTS,
};
pub use what_if::{Scenario, WhatIf, WhatIfPhase};
pub use would_you_rather::{
    arm_countdown, Choice, Dilemma, VoteOutcome, VoteTally, WouldYouRather, WouldYouRatherPhase,
};

use crate::content::{ContentItem, Deck};
use crate::core::{Phase, RoundError, RoundMachine, State};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every game in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    NeverHaveIEver,
    WouldYouRather,
    TruthOrDare,
    FuckMarryKill,
    TrueFalse,
    WhatIf,
}

impl GameKind {
    pub const ALL: [GameKind; 6] = [
        Self::NeverHaveIEver,
        Self::WouldYouRather,
        Self::TruthOrDare,
        Self::FuckMarryKill,
        Self::TrueFalse,
        Self::WhatIf,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::NeverHaveIEver => NeverHaveIEverPhase::GAME,
            Self::WouldYouRather => WouldYouRatherPhase::GAME,
            Self::TruthOrDare => TruthOrDarePhase::GAME,
            Self::FuckMarryKill => FuckMarryKillPhase::GAME,
            Self::TrueFalse => TrueFalsePhase::GAME,
            Self::WhatIf => WhatIfPhase::GAME,
        }
    }

    /// Smallest roster a round can start with.
    pub fn default_min_players(self) -> usize {
        match self {
            Self::WouldYouRather => 3,
            Self::WhatIf => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Phases of a game driven by a shuffled deck.
pub trait DeckPhase: Phase {
    /// Phase that shows a freshly drawn card.
    const SHOW_CARD: Self;
    /// Terminal phase entered once the deck is empty.
    const GAME_OVER: Self;
}

impl DeckPhase for FuckMarryKillPhase {
    const SHOW_CARD: Self = Self::ShowCandidates;
    const GAME_OVER: Self = Self::GameOver;
}

impl DeckPhase for TrueFalsePhase {
    const SHOW_CARD: Self = Self::ShowStatement;
    const GAME_OVER: Self = Self::GameOver;
}

impl DeckPhase for WhatIfPhase {
    const SHOW_CARD: Self = Self::ShowScenario;
    const GAME_OVER: Self = Self::GameOver;
}

/// Result of dealing from a deck.
#[derive(Clone, Debug, PartialEq)]
pub enum Deal<P: Phase, T> {
    /// A card was drawn and the machine now shows it.
    Card(RoundMachine<P>, T),
    /// The deck was empty and the machine moved to game over.
    GameOver(RoundMachine<P>),
}

/// Draw the next card and advance `machine` to show it, or to game over
/// when the deck is exhausted.
///
/// No card is consumed if the machine cannot legally show one. Game over
/// is only reachable after at least one round, so dealing from an empty
/// deck at the initial phase is an `InvalidTransition`; build decks with
/// [`Deck::shuffled`], which never comes out empty for a valid pool.
pub fn deal_next<P, T>(machine: &RoundMachine<P>, deck: &mut Deck<T>) -> Result<Deal<P, T>, RoundError>
where
    P: DeckPhase,
    T: ContentItem,
{
    if deck.is_game_over() {
        tracing::info!(game = P::GAME, "deck exhausted");
        return machine.transition(P::GAME_OVER).map(Deal::GameOver);
    }

    let next = machine.transition(P::SHOW_CARD)?;
    match deck.draw() {
        Some(card) => {
            tracing::debug!(
                game = P::GAME,
                phase = next.current().name(),
                card = card.id(),
                remaining = deck.remaining(),
                "dealt card"
            );
            Ok(Deal::Card(next, card))
        }
        None => machine.transition(P::GAME_OVER).map(Deal::GameOver),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentPool;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::BTreeMap;

    fn deck(size: usize) -> Deck<Scenario> {
        let mut modes = BTreeMap::new();
        modes.insert(
            "original".to_string(),
            (0..size)
                .map(|i| Scenario::new(format!("s{i}"), format!("What if {i}?")))
                .collect(),
        );
        let pool = ContentPool::new(modes).unwrap();
        Deck::shuffled(&pool, &["original"], &mut ChaCha8Rng::seed_from_u64(8))
    }

    #[test]
    fn game_names_match_phase_tables() {
        assert_eq!(GameKind::NeverHaveIEver.to_string(), "Never Have I Ever");
        assert_eq!(GameKind::ALL.len(), 6);
    }

    #[test]
    fn deal_runs_until_game_over() {
        let mut deck = deck(2);
        let mut machine = WhatIf::new();
        let mut dealt = 0;

        loop {
            match deal_next(&machine, &mut deck).unwrap() {
                Deal::Card(next, _card) => {
                    dealt += 1;
                    machine = next.transition(WhatIfPhase::NextCard).unwrap();
                }
                Deal::GameOver(last) => {
                    machine = last;
                    break;
                }
            }
        }

        assert_eq!(dealt, 2);
        assert_eq!(machine.current(), WhatIfPhase::GameOver);
        assert!(machine.is_finished());
    }

    #[test]
    fn empty_deck_at_start_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut empty: Deck<Scenario> = Deck::from_items(Vec::new(), &mut rng);
        let machine = WhatIf::new();

        assert!(matches!(
            deal_next(&machine, &mut empty),
            Err(RoundError::InvalidTransition { .. })
        ));
        assert_eq!(machine.current(), WhatIfPhase::Init);
    }

    #[test]
    fn illegal_deal_keeps_the_card() {
        let mut deck = deck(1);
        let showing = WhatIf::new().transition(WhatIfPhase::ShowScenario).unwrap();

        assert!(deal_next(&showing, &mut deck).is_err());
        assert_eq!(deck.remaining(), 1);
    }
}
