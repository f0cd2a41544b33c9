//! Line codec for card set files.
//!
//! One card per line, three fields joined by [`DELIMITER`]:
//!
//! ```text
//! TERM : DEFINITION : MISTAKES
//! ```
//!
//! No header, no trailing metadata. The term ends at the first delimiter and the
//! mistake count starts after the last one; everything in between is the
//! definition. A term therefore cannot contain the delimiter nor end in `" :"`
//! (see [`check_term`]), while a definition may hold anything but line breaks.

use crate::error::{FlashcardError, Result};
use crate::model::{Card, MalformedLine};
use std::io::{self, BufRead, Write};

pub const DELIMITER: &str = " : ";

pub fn format_record(term: &str, card: &Card) -> String {
    format!(
        "{}{}{}{}{}",
        term, DELIMITER, card.definition, DELIMITER, card.mistakes
    )
}

/// Rejects terms that would not survive a write/read cycle.
pub fn check_term(term: &str) -> Result<()> {
    if term.contains(DELIMITER) || term.ends_with(" :") {
        return Err(FlashcardError::InvalidInput(format!(
            "the term \"{}\" cannot contain \"{}\" or end in \" :\"",
            term,
            DELIMITER.trim_end()
        )));
    }
    check_single_line(term)
}

pub fn check_single_line(field: &str) -> Result<()> {
    if field.contains(['\n', '\r']) {
        return Err(FlashcardError::InvalidInput(
            "a card cannot span several lines".to_string(),
        ));
    }
    Ok(())
}

pub fn parse_record(line: &str, line_no: usize) -> Result<(String, Card)> {
    let malformed = |reason: String| FlashcardError::MalformedRecord {
        line: line_no,
        reason,
    };

    let (term, rest) = line
        .split_once(DELIMITER)
        .ok_or_else(|| malformed("missing definition and mistake count".to_string()))?;
    let (definition, mistakes) = rest
        .rsplit_once(DELIMITER)
        .ok_or_else(|| malformed("missing mistake count".to_string()))?;

    let mistakes = mistakes
        .trim()
        .parse::<u32>()
        .map_err(|_| malformed(format!("invalid mistake count \"{}\"", mistakes)))?;

    Ok((term.to_string(), Card::with_mistakes(definition, mistakes)))
}

/// Everything read from one source, before it is merged into a store.
#[derive(Debug, Default)]
pub struct ParsedSet {
    pub records: Vec<(String, Card)>,
    pub malformed: Vec<MalformedLine>,
}

/// Reads the whole source. Malformed lines are collected, not fatal; blank lines are
/// ignored. Only a failing reader makes this return an error.
pub fn read_records<R: BufRead>(reader: R) -> io::Result<ParsedSet> {
    let mut parsed = ParsedSet::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.trim().is_empty() {
            continue;
        }

        match parse_record(line, idx + 1) {
            Ok(record) => parsed.records.push(record),
            Err(FlashcardError::MalformedRecord { line, reason }) => {
                parsed.malformed.push(MalformedLine { line, reason })
            }
            Err(other) => return Err(io::Error::new(io::ErrorKind::InvalidData, other)),
        }
    }

    Ok(parsed)
}

pub fn write_records<'a, W, I>(mut writer: W, cards: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a Card)>,
{
    let mut count = 0;
    for (term, card) in cards {
        writeln!(writer, "{}", format_record(term, card))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
