use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashcardError, Result};
use crate::store::FlashcardStore;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn run(store: &FlashcardStore, path: &Path) -> Result<CmdResult> {
    let name = path.display().to_string();

    let written = File::create(path)
        .map_err(|source| FlashcardError::SinkUnavailable {
            name: name.clone(),
            source,
        })
        .and_then(|file| store.export_to(BufWriter::new(file), &name));

    match written {
        Ok(count) => {
            log::info!("saved {} cards to {}", count, name);
            Ok(
                CmdResult::message(CmdMessage::success(format!(
                    "{} cards have been saved.",
                    count
                )))
                .with_affected(count),
            )
        }
        Err(FlashcardError::SinkUnavailable { source, .. }) => {
            log::info!("cannot write {}: {}", name, source);
            Ok(CmdResult::message(CmdMessage::error(format!(
                "Error while exporting to \"{}\".",
                name
            ))))
        }
        Err(e) => Err(e),
    }
}
