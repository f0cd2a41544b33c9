use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("The card \"{0}\" already exists.")]
    DuplicateTerm(String),

    #[error("The definition \"{0}\" already exists.")]
    DuplicateDefinition(String),

    #[error("Can't remove \"{0}\": there is no such card.")]
    NotFound(String),

    #[error("Cannot read {name}: {source}")]
    SourceUnavailable {
        name: String,
        source: std::io::Error,
    },

    #[error("Cannot write {name}: {source}")]
    SinkUnavailable {
        name: String,
        source: std::io::Error,
    },

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("There are no cards.")]
    EmptyStore,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FlashcardError>;
