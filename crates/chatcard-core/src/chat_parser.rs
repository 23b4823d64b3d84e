//! Parser for single lines of an exported chat log.
//!
//! Lines have the shape `DD/MM/YYYY, HH:MM - Sender: message`. Parsing runs
//! in two phases:
//!
//! 1. **Boundary scan**: find the header delimiter `" - "`, then the sender
//!    delimiter `": "` at or after it. Either one missing rejects the line.
//! 2. **Slicing**: cut the fields out with named offsets. The date and time
//!    are positional and are never checked against a calendar.
//!
//! The sender is cut from the remainder after the first `"- "` (two
//! characters), not after `" - "`. For ordinary lines both land on the same
//! spot; a line with an earlier `"- "` shifts the sender start.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::{ChatcardError, Result};
use crate::models::ParsedMessage;
use crate::sentiment;

/// Separates the `date, time` header from `sender: message`.
pub const HEADER_DELIMITER: &str = " - ";
/// Separates the sender from the message body.
pub const SENDER_DELIMITER: &str = ": ";
/// Separates the date from the time.
pub const TIME_DELIMITER: &str = ", ";
/// The sender remainder starts after the first occurrence of this marker.
pub const SENDER_MARKER: &str = "- ";
/// Length of the positional `DD/MM/YYYY` prefix, in characters.
pub const DATE_LEN: usize = 10;
/// Length of the positional `HH:MM` token, in characters.
pub const TIME_LEN: usize = 5;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("regex is valid"));

// ── Configuration ─────────────────────────────────────────────────────────────

/// How [`ParsedMessage::word_count`] is computed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum WordCounting {
    /// Maximal runs of ASCII letters, digits and `_`. Punctuation-only and
    /// emoji-only tokens are not words.
    #[default]
    WordCharacters,
    /// Whitespace-separated tokens, whatever they contain.
    Whitespace,
}

impl WordCounting {
    pub fn count(&self, text: &str) -> usize {
        match self {
            WordCounting::WordCharacters => WORD_RE.find_iter(text).count(),
            WordCounting::Whitespace => text.split_whitespace().count(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WordCounting::WordCharacters => "word-characters",
            WordCounting::Whitespace => "whitespace",
        }
    }
}

/// Tunables for [`ChatLineParser`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub word_counting: WordCounting,
}

// ── Boundaries ────────────────────────────────────────────────────────────────

/// Byte offsets of the two delimiters that make a line well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Boundaries {
    /// Start of the first `" - "`.
    header: usize,
    /// Start of the first `": "` at or after `header`.
    sender: usize,
}

impl Boundaries {
    fn locate(line: &str) -> Result<Self> {
        let header = line
            .find(HEADER_DELIMITER)
            .ok_or(ChatcardError::MissingHeaderDelimiter)?;
        let sender = line[header..]
            .find(SENDER_DELIMITER)
            .map(|offset| header + offset)
            .ok_or(ChatcardError::MissingSenderDelimiter)?;
        Ok(Self { header, sender })
    }
}

// ── ChatLineParser ────────────────────────────────────────────────────────────

/// Stateless chat-line parser. Cheap to copy; safe to share between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatLineParser {
    config: ParserConfig,
}

impl ChatLineParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse an arbitrary JSON value. Anything but a string is rejected.
    pub fn parse(&self, value: &Value) -> Option<ParsedMessage> {
        self.try_parse(value)
            .inspect_err(|e| debug!(reason = %e, "rejected chat line"))
            .ok()
    }

    /// Like [`parse`](Self::parse), reporting why a value was rejected.
    pub fn try_parse(&self, value: &Value) -> Result<ParsedMessage> {
        match value {
            Value::String(line) => self.try_parse_line(line),
            other => Err(ChatcardError::NotText(json_type_name(other))),
        }
    }

    /// Parse a raw chat line.
    pub fn parse_line(&self, line: &str) -> Option<ParsedMessage> {
        self.try_parse_line(line)
            .inspect_err(|e| debug!(reason = %e, "rejected chat line"))
            .ok()
    }

    /// Like [`parse_line`](Self::parse_line), reporting why a line was rejected.
    pub fn try_parse_line(&self, line: &str) -> Result<ParsedMessage> {
        let bounds = Boundaries::locate(line)?;

        let date = take_chars(line, DATE_LEN);

        // The time segment runs from the first `", "` to the next one.
        let time_segment = line
            .split(TIME_DELIMITER)
            .nth(1)
            .ok_or(ChatcardError::MissingTimeDelimiter)?;
        let time = take_chars(time_segment, TIME_LEN);

        // `" - "` contains `"- "`, so the marker always exists once the
        // header was found, and it never starts after the header.
        let remainder = line
            .find(SENDER_MARKER)
            .map(|i| &line[i + SENDER_MARKER.len()..])
            .ok_or(ChatcardError::MissingHeaderDelimiter)?;
        let sender = remainder.split(':').next().unwrap_or_default();

        debug_assert!(bounds.sender >= bounds.header + HEADER_DELIMITER.len());
        let text = line[bounds.sender + SENDER_DELIMITER.len()..].trim();

        Ok(ParsedMessage {
            date: date.to_string(),
            time: time.to_string(),
            sender: sender.to_string(),
            text: text.to_string(),
            word_count: self.config.word_counting.count(text),
            sentiment: sentiment::classify(line),
        })
    }
}

/// Parse a JSON value with the default configuration.
pub fn parse(value: &Value) -> Option<ParsedMessage> {
    ChatLineParser::default().parse(value)
}

/// Parse a raw line with the default configuration.
pub fn parse_line(line: &str) -> Option<ParsedMessage> {
    ChatLineParser::default().parse_line(line)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// First `n` characters of `s`, or all of `s` when it is shorter.
fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
