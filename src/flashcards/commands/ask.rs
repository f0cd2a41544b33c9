use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashcardError, Result};
use crate::model::QuizOutcome;
use crate::store::FlashcardStore;
use rand::Rng;

/// Asks one random card. `answer_for` receives the term and returns the user's answer.
pub fn run<R, F>(store: &mut FlashcardStore, rng: &mut R, answer_for: F) -> Result<CmdResult>
where
    R: Rng + ?Sized,
    F: FnOnce(&str) -> Result<String>,
{
    match store.quiz_one(rng, answer_for) {
        Ok(outcome) => {
            let message = outcome_message(&outcome);
            Ok(CmdResult::message(message).with_outcome(outcome))
        }
        Err(FlashcardError::EmptyStore) => Ok(CmdResult::message(CmdMessage::error(
            "There are no cards to ask about.",
        ))),
        Err(e) => Err(e),
    }
}

pub fn outcome_message(outcome: &QuizOutcome) -> CmdMessage {
    match outcome {
        QuizOutcome::Correct { .. } => CmdMessage::success("Correct!"),
        QuizOutcome::Wrong { correct, .. } => {
            CmdMessage::warning(format!("Wrong. The right answer is \"{}\".", correct))
        }
        QuizOutcome::WrongButMatchesOtherCard {
            correct,
            other_term,
            ..
        } => CmdMessage::warning(format!(
            "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
            correct, other_term
        )),
    }
}
