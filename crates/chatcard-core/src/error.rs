use thiserror::Error;

/// All errors produced by chatcard.
///
/// The first group of variants are validation rejections; the parser and the
/// report-card generator collapse every one of them to `None` in their
/// `Option` API and only surface the reason through their `try_*` variants.
#[derive(Error, Debug)]
pub enum ChatcardError {
    /// The chat-line input was not a JSON string.
    #[error("Chat line is not text (got {0})")]
    NotText(&'static str),

    /// No `" - "` separates the date/time header from the sender.
    #[error("Chat line has no \" - \" header delimiter")]
    MissingHeaderDelimiter,

    /// No `": "` follows the header delimiter.
    #[error("Chat line has no \": \" sender delimiter after the header")]
    MissingSenderDelimiter,

    /// No `", "` separates the date from the time.
    #[error("Chat line has no \", \" between date and time")]
    MissingTimeDelimiter,

    /// The student value is not a record, or it has no `marks` record.
    #[error("Student is not a record")]
    NotARecord,

    /// The student record has no `marks` mapping.
    #[error("Student record has no marks mapping")]
    MissingMarks,

    /// The student's name is missing, not text, or empty.
    #[error("Student name must be non-empty text")]
    InvalidName,

    /// The marks mapping has no subjects.
    #[error("Marks mapping has no subjects")]
    EmptyMarks,

    /// A mark is non-numeric, NaN, infinite, or outside `0..=100`.
    #[error("Invalid mark for {subject}: {value}")]
    InvalidMark { subject: String, value: String },

    /// A JSON document could not be parsed or written.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Reading or writing the saved configuration failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChatcardError {
    /// Whether this error is a validation rejection of the input value, as
    /// opposed to an environment or decoding failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ChatcardError::NotText(_)
                | ChatcardError::MissingHeaderDelimiter
                | ChatcardError::MissingSenderDelimiter
                | ChatcardError::MissingTimeDelimiter
                | ChatcardError::NotARecord
                | ChatcardError::MissingMarks
                | ChatcardError::InvalidName
                | ChatcardError::EmptyMarks
                | ChatcardError::InvalidMark { .. }
        )
    }
}

/// Convenience alias used throughout the chatcard crates.
pub type Result<T> = std::result::Result<T, ChatcardError>;
