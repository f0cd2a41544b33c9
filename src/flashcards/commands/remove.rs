use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashcardError, Result};
use crate::store::FlashcardStore;

pub fn run(store: &mut FlashcardStore, term: &str) -> Result<CmdResult> {
    match store.remove(term) {
        Ok(_) => Ok(
            CmdResult::message(CmdMessage::success("The card has been removed.")).with_affected(1),
        ),
        Err(e @ FlashcardError::NotFound(_)) => {
            Ok(CmdResult::message(CmdMessage::error(e.to_string())))
        }
        Err(e) => Err(e),
    }
}
