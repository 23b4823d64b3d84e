//! Keyword sentiment classification.
//!
//! A fixed, ordered table of `(label, keywords)` rules is scanned top to
//! bottom; the first rule with any keyword contained in the lowercased input
//! wins. Matching is plain substring search, so `"lovely"` counts as `love`
//! and `"hahaha"` as `funny`.

use crate::models::Sentiment;

/// Laughing face with tears of joy.
pub const LAUGHING_FACE: &str = "\u{1F602}";

/// Heavy black heart. Also matches the emoji presentation `❤️`, which starts
/// with the same code point.
pub const HEART: &str = "\u{2764}";

/// Priority-ordered classification rules. Earlier entries win.
pub const SENTIMENT_RULES: &[(Sentiment, &[&str])] = &[
    (Sentiment::Funny, &[LAUGHING_FACE, ":)", "haha"]),
    (Sentiment::Love, &[HEART, "love", "pyaar"]),
];

/// Classify `line` with [`SENTIMENT_RULES`], falling back to
/// [`Sentiment::Neutral`].
pub fn classify(line: &str) -> Sentiment {
    let lowered = line.to_lowercase();
    SENTIMENT_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(*kw)))
        .map(|(sentiment, _)| *sentiment)
        .unwrap_or(Sentiment::Neutral)
}
