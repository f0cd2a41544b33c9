use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashcardError, Result};
use crate::store::{format, FlashcardStore};

pub fn run(store: &mut FlashcardStore, term: &str, definition: &str) -> Result<CmdResult> {
    match store.add(term, definition) {
        Ok(()) => Ok(CmdResult::message(CmdMessage::success(format!(
            "The pair (\"{}\":\"{}\") has been added.",
            term, definition
        )))
        .with_affected(1)),
        Err(e @ FlashcardError::DuplicateTerm(_))
        | Err(e @ FlashcardError::DuplicateDefinition(_))
        | Err(e @ FlashcardError::InvalidInput(_)) => {
            Ok(CmdResult::message(CmdMessage::error(e.to_string())))
        }
        Err(e) => Err(e),
    }
}

/// Early check used before asking for a definition.
pub fn check_term(store: &FlashcardStore, term: &str) -> CmdResult {
    if let Err(e) = format::check_term(term) {
        CmdResult::message(CmdMessage::error(e.to_string()))
    } else if store.contains_term(term) {
        CmdResult::message(CmdMessage::error(
            FlashcardError::DuplicateTerm(term.to_string()).to_string(),
        ))
    } else {
        CmdResult::default()
    }
}
