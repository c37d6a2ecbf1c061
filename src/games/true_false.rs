//! True/False trivia.

use crate::content::{ContentItem, Intensity};
use crate::core::RoundMachine;
use crate::session::{PlayerId, Session, SessionError};
use serde::{Deserialize, Serialize};

crate::round_phases! {
    game: "True or False",
    pub enum TrueFalsePhase {
        Init = "INIT" => [ShowStatement, Exit],
        ShowStatement = "SHOW_STATEMENT" => [Answering, Exit],
        Answering = "ANSWERING" => [Correct, Wrong, Exit],
        Correct = "CORRECT" => [Explanation, NextRound, Exit],
        Wrong = "WRONG" => [Explanation, NextRound, Exit],
        Explanation = "EXPLANATION" => [NextRound, Exit],
        NextRound = "NEXT_ROUND" => [ShowStatement, GameOver, Exit],
        GameOver = "GAME_OVER" => [],
        Exit = "EXIT" => [],
    }
    initial: Init,
    round_start: ShowStatement,
}

pub type TrueFalse = RoundMachine<TrueFalsePhase>;

pub const CORRECT_ANSWER_POINTS: i32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaFact {
    pub id: String,
    pub statement: String,
    pub answer: bool,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub intensity: Intensity,
}

impl TriviaFact {
    pub fn new(id: impl Into<String>, statement: impl Into<String>, answer: bool) -> Self {
        Self {
            id: id.into(),
            statement: statement.into(),
            answer,
            explanation: String::new(),
            intensity: Intensity::default(),
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    pub fn is_correct(&self, guess: bool) -> bool {
        self.answer == guess
    }

    /// Phase that follows `ANSWERING` for `guess`.
    pub fn judge(&self, guess: bool) -> TrueFalsePhase {
        if self.is_correct(guess) {
            TrueFalsePhase::Correct
        } else {
            TrueFalsePhase::Wrong
        }
    }
}

impl ContentItem for TriviaFact {
    fn id(&self) -> &str {
        &self.id
    }

    fn intensity(&self) -> Intensity {
        self.intensity
    }
}

/// Judge `guess`, award points to `player` when right, and return the next phase.
pub fn score_answer(
    session: &mut Session,
    player: PlayerId,
    fact: &TriviaFact,
    guess: bool,
) -> Result<TrueFalsePhase, SessionError> {
    let phase = fact.judge(guess);
    if phase == TrueFalsePhase::Correct {
        session.adjust_score(player, CORRECT_ANSWER_POINTS)?;
    }
    Ok(phase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judge_compares_with_answer() {
        let fact = TriviaFact::new("t1", "Octopuses have three hearts", true)
            .with_explanation("Two pump blood to the gills.");

        assert_eq!(fact.judge(true), TrueFalsePhase::Correct);
        assert_eq!(fact.judge(false), TrueFalsePhase::Wrong);
    }

    #[test]
    fn correct_answers_score() {
        let mut session = Session::new();
        let id = session.add_player("Kai").unwrap();
        let fact = TriviaFact::new("t2", "The moon is made of cheese", false);

        assert_eq!(score_answer(&mut session, id, &fact, false), Ok(TrueFalsePhase::Correct));
        assert_eq!(score_answer(&mut session, id, &fact, true), Ok(TrueFalsePhase::Wrong));
        assert_eq!(session.player(id).unwrap().score, CORRECT_ANSWER_POINTS);
    }

    #[test]
    fn explanation_is_optional_in_json() {
        let fact: TriviaFact =
            serde_json::from_str(r#"{ "id": "t3", "statement": "Sky is blue", "answer": true }"#)
                .unwrap();
        assert!(fact.explanation.is_empty());
    }
}
