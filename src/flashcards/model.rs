/// A single card. The term is the key it is stored under and lives outside the struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub definition: String,
    pub mistakes: u32,
}

impl Card {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            mistakes: 0,
        }
    }

    pub fn with_mistakes(definition: impl Into<String>, mistakes: u32) -> Self {
        Self {
            definition: definition.into(),
            mistakes,
        }
    }
}

/// Result of checking one answer against the asked term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Correct {
        term: String,
    },
    Wrong {
        term: String,
        correct: String,
    },
    /// The answer is the definition of a different card.
    WrongButMatchesOtherCard {
        term: String,
        correct: String,
        answer: String,
        other_term: String,
    },
}

impl QuizOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, QuizOutcome::Correct { .. })
    }

    /// The term that was asked.
    pub fn term(&self) -> &str {
        match self {
            QuizOutcome::Correct { term }
            | QuizOutcome::Wrong { term, .. }
            | QuizOutcome::WrongButMatchesOtherCard { term, .. } => term,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hardest {
    NoHardCards,
    /// All terms sharing the highest mistake count, sorted.
    Cards { terms: Vec<String>, mistakes: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number in the source.
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub malformed: Vec<MalformedLine>,
}
