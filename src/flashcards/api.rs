//! # API Facade
//!
//! [`FlashcardsApi`] is the single entry point UI clients use. It owns the
//! [`FlashcardStore`] and dispatches each call to the matching command module.
//!
//! The facade does no I/O of its own: file paths are handed to the commands that
//! open them, and the answer to a quiz question comes from a caller-supplied
//! closure. Tests here only check dispatch; behaviour is tested in `commands/`.

use crate::commands;
use crate::error::Result;
use crate::model::Card;
use crate::store::FlashcardStore;
use crate::transcript::Transcript;
use rand::Rng;
use std::path::Path;

#[derive(Debug, Default)]
pub struct FlashcardsApi {
    store: FlashcardStore,
}

impl FlashcardsApi {
    pub fn new(store: FlashcardStore) -> Self {
        Self { store }
    }

    pub fn add_card(&mut self, term: &str, definition: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, term, definition)
    }

    /// Lets a client reject a duplicate term before asking for its definition.
    pub fn check_term(&self, term: &str) -> CmdResult {
        commands::add::check_term(&self.store, term)
    }

    pub fn remove_card(&mut self, term: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, term)
    }

    pub fn import_cards(&mut self, path: &Path) -> Result<CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn export_cards(&self, path: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn ask<R, F>(&mut self, rng: &mut R, answer_for: F) -> Result<CmdResult>
    where
        R: Rng + ?Sized,
        F: FnOnce(&str) -> Result<String>,
    {
        commands::ask::run(&mut self.store, rng, answer_for)
    }

    pub fn hardest_card(&self) -> CmdResult {
        commands::hardest::run(&self.store)
    }

    pub fn reset_stats(&mut self) -> CmdResult {
        commands::reset::run(&mut self.store)
    }

    pub fn save_log(&self, transcript: &Transcript, path: &Path) -> Result<CmdResult> {
        commands::save_log::run(transcript, path)
    }

    pub fn cards(&self) -> Vec<(String, Card)> {
        self.store.cards()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
