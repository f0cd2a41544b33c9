use crate::commands::{CmdMessage, CmdResult};
use crate::store::FlashcardStore;

pub fn run(store: &mut FlashcardStore) -> CmdResult {
    store.reset_stats();
    CmdResult::message(CmdMessage::success("Card statistics have been reset."))
        .with_affected(store.len())
}
