//! # Card Store
//!
//! [`FlashcardStore`] owns every card of the session: a single map from term to
//! [`Card`], so a definition and its mistake counter can never drift apart.
//!
//! ## Invariants
//!
//! - Terms are unique (they are the map key).
//! - [`FlashcardStore::add`] rejects a definition already used by another card.
//!   This is an add-time guard only: [`FlashcardStore::import_from`] upserts
//!   unconditionally and may leave duplicate definitions behind.
//! - Mistake counters only grow, one per wrong answer, until
//!   [`FlashcardStore::reset_stats`] zeroes them all.
//!
//! ## No I/O
//!
//! The store reads from any `BufRead` and writes to any `Write`. Opening files,
//! prompting and printing are left to callers (see `commands::import` and
//! `commands::export`).
//!
//! Reads hand out owned snapshots sorted by term. Random selection indexes such a
//! snapshot, which keeps a seeded quiz reproducible regardless of hash order.

use crate::error::{FlashcardError, Result};
use crate::model::{Card, Hardest, ImportReport, QuizOutcome};
use rand::Rng;
use std::collections::HashMap;
use std::io::{BufRead, Write};

pub mod format;

#[derive(Debug, Default, Clone)]
pub struct FlashcardStore {
    cards: HashMap<String, Card>,
}

impl FlashcardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.cards.contains_key(term)
    }

    pub fn contains_definition(&self, definition: &str) -> bool {
        self.cards.values().any(|c| c.definition == definition)
    }

    pub fn get(&self, term: &str) -> Option<Card> {
        self.cards.get(term).cloned()
    }

    /// Sorted snapshot of all terms.
    pub fn terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = self.cards.keys().cloned().collect();
        terms.sort();
        terms
    }

    /// Sorted snapshot of all cards.
    pub fn cards(&self) -> Vec<(String, Card)> {
        let mut cards: Vec<(String, Card)> = self
            .cards
            .iter()
            .map(|(t, c)| (t.clone(), c.clone()))
            .collect();
        cards.sort_by(|a, b| a.0.cmp(&b.0));
        cards
    }

    pub fn add(&mut self, term: impl Into<String>, definition: impl Into<String>) -> Result<()> {
        let term = term.into();
        let definition = definition.into();

        format::check_term(&term)?;
        format::check_single_line(&definition)?;
        if self.contains_term(&term) {
            return Err(FlashcardError::DuplicateTerm(term));
        }
        if self.contains_definition(&definition) {
            return Err(FlashcardError::DuplicateDefinition(definition));
        }

        log::debug!("adding card {:?}", term);
        self.cards.insert(term, Card::new(definition));
        Ok(())
    }

    /// Inserts or overwrites without any uniqueness check.
    pub fn upsert(&mut self, term: impl Into<String>, card: Card) {
        let term = term.into();
        log::debug!("upserting card {:?}", term);
        self.cards.insert(term, card);
    }

    pub fn remove(&mut self, term: &str) -> Result<Card> {
        match self.cards.remove(term) {
            Some(card) => {
                log::debug!("removed card {:?}", term);
                Ok(card)
            }
            None => Err(FlashcardError::NotFound(term.to_string())),
        }
    }

    /// Merges every record of `reader` into the store, overwriting existing terms.
    ///
    /// Malformed lines are skipped and listed in the report. If the reader fails
    /// part-way, nothing is merged and `SourceUnavailable` is returned.
    pub fn import_from<R: BufRead>(&mut self, reader: R, name: &str) -> Result<ImportReport> {
        let parsed =
            format::read_records(reader).map_err(|source| FlashcardError::SourceUnavailable {
                name: name.to_string(),
                source,
            })?;

        for bad in &parsed.malformed {
            log::warn!("{}: skipping line {}: {}", name, bad.line, bad.reason);
        }

        let imported = parsed.records.len();
        for (term, card) in parsed.records {
            self.upsert(term, card);
        }

        Ok(ImportReport {
            imported,
            malformed: parsed.malformed,
        })
    }

    /// Writes every card, one line each, in term order. The store is left as is.
    pub fn export_to<W: Write>(&self, writer: W, name: &str) -> Result<usize> {
        let cards = self.cards();
        format::write_records(writer, cards.iter().map(|(t, c)| (t.as_str(), c))).map_err(
            |source| FlashcardError::SinkUnavailable {
                name: name.to_string(),
                source,
            },
        )
    }

    /// Picks one term uniformly at random.
    pub fn pick_term<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        let terms = self.terms();
        if terms.is_empty() {
            return Err(FlashcardError::EmptyStore);
        }
        let idx = rng.random_range(0..terms.len());
        Ok(terms[idx].clone())
    }

    /// Grades `answer` for `term`. Any wrong answer bumps the term's mistake count.
    ///
    /// When several other cards share the answered definition, which one is
    /// reported is not guaranteed.
    pub fn check_answer(&mut self, term: &str, answer: &str) -> Result<QuizOutcome> {
        let correct = match self.cards.get(term) {
            Some(card) => card.definition.clone(),
            None => return Err(FlashcardError::NotFound(term.to_string())),
        };

        if answer == correct {
            return Ok(QuizOutcome::Correct {
                term: term.to_string(),
            });
        }

        let other_term = self
            .cards
            .iter()
            .find(|(t, c)| t.as_str() != term && c.definition == answer)
            .map(|(t, _)| t.clone());

        if let Some(card) = self.cards.get_mut(term) {
            card.mistakes += 1;
            log::debug!("card {:?} now has {} mistakes", term, card.mistakes);
        }

        Ok(match other_term {
            Some(other_term) => QuizOutcome::WrongButMatchesOtherCard {
                term: term.to_string(),
                correct,
                answer: answer.to_string(),
                other_term,
            },
            None => QuizOutcome::Wrong {
                term: term.to_string(),
                correct,
            },
        })
    }

    /// Picks a random card, asks `answer_for` for the user's answer and grades it.
    pub fn quiz_one<R, F>(&mut self, rng: &mut R, answer_for: F) -> Result<QuizOutcome>
    where
        R: Rng + ?Sized,
        F: FnOnce(&str) -> Result<String>,
    {
        let term = self.pick_term(rng)?;
        let answer = answer_for(&term)?;
        self.check_answer(&term, &answer)
    }

    pub fn hardest(&self) -> Hardest {
        let max = self.cards.values().map(|c| c.mistakes).max().unwrap_or(0);
        if max == 0 {
            return Hardest::NoHardCards;
        }

        let mut terms: Vec<String> = self
            .cards
            .iter()
            .filter(|(_, c)| c.mistakes == max)
            .map(|(t, _)| t.clone())
            .collect();
        terms.sort();

        Hardest::Cards {
            terms,
            mistakes: max,
        }
    }

    pub fn reset_stats(&mut self) {
        for card in self.cards.values_mut() {
            card.mistakes = 0;
        }
        log::debug!("reset mistake counts for {} cards", self.cards.len());
    }
}
