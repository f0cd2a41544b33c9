use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::transcript::Transcript;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn run(transcript: &Transcript, path: &Path) -> Result<CmdResult> {
    let written = File::create(path).and_then(|file| transcript.write_to(BufWriter::new(file)));

    match written {
        Ok(lines) => {
            log::info!("saved {} transcript lines to {}", lines, path.display());
            Ok(CmdResult::message(CmdMessage::success("The log has been saved."))
                .with_affected(lines))
        }
        Err(e) => {
            log::info!("cannot write log {}: {}", path.display(), e);
            Ok(CmdResult::message(CmdMessage::error(format!(
                "Error while saving the log to \"{}\".",
                path.display()
            ))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_transcript_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.log");
        let mut transcript = Transcript::new();
        transcript.record("Input the action");
        transcript.record("log");

        let result = run(&transcript, &path).unwrap();
        assert_eq!(result.messages[0].content, "The log has been saved.");
        assert_eq!(fs::read_to_string(&path).unwrap(), "Input the action\nlog\n");
    }

    #[test]
    fn bad_path_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("session.log");

        let result = run(&Transcript::new(), &path).unwrap();
        assert!(result.has_errors());
    }
}
