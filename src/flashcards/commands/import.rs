use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashcardError, Result};
use crate::store::FlashcardStore;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Merges a card set file into the store.
///
/// The file is closed before returning, whatever the outcome. Cards already in the
/// store but absent from the file are kept.
pub fn run(store: &mut FlashcardStore, path: &Path) -> Result<CmdResult> {
    let name = path.display().to_string();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::info!("cannot open {}: {}", name, e);
            return Ok(CmdResult::message(CmdMessage::error("File not found.")));
        }
    };

    match store.import_from(BufReader::new(file), &name) {
        Ok(report) => {
            log::info!("loaded {} cards from {}", report.imported, name);
            let mut result = CmdResult::default().with_affected(report.imported);
            for bad in &report.malformed {
                result.add_message(CmdMessage::warning(format!(
                    "Skipped line {}: {}",
                    bad.line, bad.reason
                )));
            }
            result.add_message(CmdMessage::success(format!(
                "{} cards have been loaded.",
                report.imported
            )));
            Ok(result.with_import(report))
        }
        Err(FlashcardError::SourceUnavailable { source, .. }) => {
            log::info!("failed reading {}: {}", name, source);
            Ok(CmdResult::message(CmdMessage::error(format!(
                "Error while reading \"{}\".",
                name
            ))))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Card;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_cards_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("capitals.txt");
        fs::write(&path, "France : Paris : 0\nJapan : Tokyo : 2\n").unwrap();

        let mut store = FlashcardStore::new();
        let result = run(&mut store, &path).unwrap();

        assert_eq!(result.affected, 2);
        assert_eq!(
            result.messages.last().unwrap().content,
            "2 cards have been loaded."
        );
        assert_eq!(store.get("Japan"), Some(Card::with_mistakes("Tokyo", 2)));
    }

    #[test]
    fn missing_file_imports_nothing() {
        let dir = TempDir::new().unwrap();
        let mut store = FlashcardStore::new();
        store.add("keep", "me").unwrap();

        let result = run(&mut store, &dir.path().join("missing.txt")).unwrap();

        assert!(result.has_errors());
        assert_eq!(result.messages[0].content, "File not found.");
        assert_eq!(result.affected, 0);
        assert_eq!(store.terms(), vec!["keep"]);
    }

    #[test]
    fn malformed_lines_are_skipped_with_a_warning() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mixed.txt");
        fs::write(&path, "a : 1 : 0\nb : 2\nc : 3 : 4\n").unwrap();

        let mut store = FlashcardStore::new();
        let result = run(&mut store, &path).unwrap();

        assert_eq!(result.affected, 2);
        assert_eq!(result.import.as_ref().unwrap().malformed.len(), 1);
        assert!(result.messages[0].content.starts_with("Skipped line 2"));
        assert_eq!(store.terms(), vec!["a", "c"]);
    }

    #[test]
    fn directory_is_not_a_readable_set() {
        let dir = TempDir::new().unwrap();
        let mut store = FlashcardStore::new();

        let result = run(&mut store, dir.path()).unwrap();
        assert!(result.has_errors());
        assert!(store.is_empty());
    }
}
