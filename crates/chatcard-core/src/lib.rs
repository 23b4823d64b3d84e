//! Core library for chatcard.
//!
//! Two independent, pure transformations:
//!
//! - [`chat_parser`] splits one exported chat line
//!   (`DD/MM/YYYY, HH:MM - Sender: message`) into a [`ParsedMessage`] with a
//!   word count and a keyword [`Sentiment`].
//! - [`report_card`] validates a student record and computes a
//!   [`ReportCard`]: totals, percentage, grade, best/worst subject and the
//!   pass/fail split.
//!
//! Both reject bad input with `None`; the `try_*` variants return the
//! [`ChatcardError`] reason instead.
//!
//! ```
//! use chatcard_core::{chat_parser, report_card, Grade, Sentiment};
//! use serde_json::json;
//!
//! let msg = chat_parser::parse_line("01/12/2024, 09:15 - Priya: I love this song").unwrap();
//! assert_eq!(msg.sender, "Priya");
//! assert_eq!(msg.sentiment, Sentiment::Love);
//!
//! let card = report_card::generate(&json!({
//!     "name": "Priya",
//!     "marks": { "maths": 35, "science": 28 }
//! }))
//! .unwrap();
//! assert_eq!(card.grade, Grade::F);
//! ```

pub mod chat_parser;
pub mod error;
pub mod formatting;
pub mod grading;
pub mod models;
pub mod report_card;
pub mod sentiment;
pub mod settings;

pub use chat_parser::{ChatLineParser, ParserConfig, WordCounting};
pub use error::{ChatcardError, Result};
pub use models::{Grade, ParsedMessage, ReportCard, Sentiment};
pub use report_card::ReportCardGenerator;
