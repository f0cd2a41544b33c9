//! # Command Layer
//!
//! One module per driver command. Each `run` takes the store (and whatever plain
//! arguments it needs) and returns a [`CmdResult`]: structured data for callers that
//! want it, plus the user-facing messages.
//!
//! Store rejections such as a duplicate term or a missing file are not errors at this
//! level. They become [`CmdMessage`]s and the session carries on. Only failures
//! nobody can recover from (broken stdin, for instance) come back as `Err`.

use crate::model::{Hardest, ImportReport, QuizOutcome};

pub mod add;
pub mod ask;
pub mod export;
pub mod hardest;
pub mod import;
pub mod remove;
pub mod reset;
pub mod save_log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Cards added, removed, loaded or saved.
    pub affected: usize,
    pub outcome: Option<QuizOutcome>,
    pub hardest: Option<Hardest>,
    pub import: Option<ImportReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, affected: usize) -> Self {
        self.affected = affected;
        self
    }

    pub fn with_outcome(mut self, outcome: QuizOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_hardest(mut self, hardest: Hardest) -> Self {
        self.hardest = Some(hardest);
        self
    }

    pub fn with_import(mut self, report: ImportReport) -> Self {
        self.import = Some(report);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }

    pub(crate) fn message(message: CmdMessage) -> Self {
        let mut result = Self::default();
        result.add_message(message);
        result
    }
}
