use crate::commands::{CmdMessage, CmdResult};
use crate::model::Hardest;
use crate::store::FlashcardStore;

pub fn run(store: &FlashcardStore) -> CmdResult {
    let hardest = store.hardest();
    let message = match &hardest {
        Hardest::NoHardCards => CmdMessage::info("There are no cards with errors."),
        Hardest::Cards { terms, mistakes } => {
            let quoted = terms
                .iter()
                .map(|t| format!("\"{}\"", t))
                .collect::<Vec<_>>()
                .join(", ");
            if terms.len() == 1 {
                CmdMessage::info(format!(
                    "The hardest card is {}. You have {} errors answering it.",
                    quoted, mistakes
                ))
            } else {
                CmdMessage::info(format!(
                    "The hardest cards are {}. You have {} errors answering them.",
                    quoted, mistakes
                ))
            }
        }
    };
    CmdResult::message(message).with_hardest(hardest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Card;

    #[test]
    fn no_errors_yet() {
        let mut store = FlashcardStore::new();
        store.add("a", "1").unwrap();
        let result = run(&store);
        assert_eq!(result.hardest, Some(Hardest::NoHardCards));
        assert_eq!(result.messages[0].content, "There are no cards with errors.");
    }

    #[test]
    fn single_hardest_card() {
        let mut store = FlashcardStore::new();
        store.upsert("a", Card::with_mistakes("1", 2));
        store.upsert("b", Card::with_mistakes("2", 1));

        let result = run(&store);
        assert_eq!(
            result.messages[0].content,
            "The hardest card is \"a\". You have 2 errors answering it."
        );
    }

    #[test]
    fn several_hardest_cards_are_listed_sorted() {
        let mut store = FlashcardStore::new();
        store.upsert("C", Card::with_mistakes("c", 3));
        store.upsert("A", Card::with_mistakes("a", 3));
        store.upsert("B", Card::with_mistakes("b", 1));
        store.upsert("D", Card::with_mistakes("d", 0));

        let result = run(&store);
        assert_eq!(
            result.messages[0].content,
            "The hardest cards are \"A\", \"C\". You have 3 errors answering them."
        );
    }
}
