use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ── Sentiment ─────────────────────────────────────────────────────────────────

/// Coarse, keyword-driven mood label attached to a chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Laughter markers such as `😂`, `:)` or `haha`.
    Funny,
    /// Affection markers such as `❤`, `love` or `pyaar`.
    Love,
    /// Nothing matched.
    Neutral,
}

impl Sentiment {
    /// The canonical lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Funny => "funny",
            Sentiment::Love => "love",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Grade ─────────────────────────────────────────────────────────────────────

/// Letter grade derived from an unrounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ParsedMessage ─────────────────────────────────────────────────────────────

/// One chat-export line split into its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMessage {
    /// Positional `DD/MM/YYYY` prefix, never checked against a calendar.
    pub date: String,
    /// Positional `HH:MM` token following the first `", "`.
    pub time: String,
    /// Author name between the header delimiter and the first `":"`.
    pub sender: String,
    /// Message body, trimmed.
    pub text: String,
    /// Number of words in `text`.
    pub word_count: usize,
    /// Keyword-derived mood of the whole line.
    pub sentiment: Sentiment,
}

impl ParsedMessage {
    /// Interpret `date` and `time` as a local timestamp, if they happen to be
    /// a real `DD/MM/YYYY HH:MM` pair.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let joined = format!("{} {}", self.date, self.time);
        NaiveDateTime::parse_from_str(&joined, "%d/%m/%Y %H:%M").ok()
    }
}

// ── ReportCard ────────────────────────────────────────────────────────────────

/// Academic summary computed from a mapping of subject to score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCard {
    pub name: String,
    /// Sum of every subject score.
    #[serde(serialize_with = "serialize_score")]
    pub total_marks: f64,
    /// Percentage rounded to two decimal places.
    #[serde(serialize_with = "serialize_score")]
    pub percentage: f64,
    /// Grade looked up from the unrounded percentage.
    pub grade: Grade,
    pub highest_subject: String,
    pub lowest_subject: String,
    /// Subjects scoring at least [`crate::grading::PASS_MARK`], in input order.
    pub passed_subjects: Vec<String>,
    /// Subjects scoring below [`crate::grading::PASS_MARK`], in input order.
    pub failed_subjects: Vec<String>,
    pub subject_count: usize,
}

/// Largest magnitude at which every integer is exactly representable in an `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Serialize whole-number scores as JSON integers (`85`) and everything else
/// as a float (`31.5`).
fn serialize_score<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn message(date: &str, time: &str) -> ParsedMessage {
        ParsedMessage {
            date: date.to_string(),
            time: time.to_string(),
            sender: "Rahul".to_string(),
            text: "hi".to_string(),
            word_count: 1,
            sentiment: Sentiment::Neutral,
        }
    }

    // ── Sentiment ──────────────────────────────────────────────────────────

    #[test]
    fn test_sentiment_serde_lowercase() {
        let json = serde_json::to_string(&Sentiment::Funny).unwrap();
        assert_eq!(json, r#""funny""#);
        let back: Sentiment = serde_json::from_str(r#""love""#).unwrap();
        assert_eq!(back, Sentiment::Love);
    }

    // ── Grade ──────────────────────────────────────────────────────────────

    #[test]
    fn test_grade_serde_a_plus() {
        let json = serde_json::to_string(&Grade::APlus).unwrap();
        assert_eq!(json, r#""A+""#);
        let back: Grade = serde_json::from_str(r#""A+""#).unwrap();
        assert_eq!(back, Grade::APlus);
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(Grade::APlus.to_string(), "A+");
        assert_eq!(Grade::F.to_string(), "F");
    }

    // ── ParsedMessage ──────────────────────────────────────────────────────

    #[test]
    fn test_parsed_message_json_shape() {
        let value = serde_json::to_value(message("25/01/2025", "14:30")).unwrap();
        assert_eq!(value["wordCount"], 1);
        assert_eq!(value["sentiment"], "neutral");
        assert!(value.get("word_count").is_none());
    }

    #[test]
    fn test_timestamp_valid() {
        let ts = message("25/01/2025", "14:30").timestamp().unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2025, 1, 25).unwrap());
        assert_eq!(ts.time(), NaiveTime::from_hms_opt(14, 30, 0).unwrap());
    }

    #[test]
    fn test_timestamp_not_a_calendar_date() {
        assert!(message("31/02/2025", "14:30").timestamp().is_none());
        assert!(message("2025-01-25", "14:30").timestamp().is_none());
    }

    // ── ReportCard serde ───────────────────────────────────────────────────

    #[test]
    fn test_report_card_scores_serialize_like_js_numbers() {
        let card = ReportCard {
            name: "Priya".to_string(),
            total_marks: 63.0,
            percentage: 31.5,
            grade: Grade::F,
            highest_subject: "maths".to_string(),
            lowest_subject: "science".to_string(),
            passed_subjects: vec![],
            failed_subjects: vec!["maths".to_string(), "science".to_string()],
            subject_count: 2,
        };
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains(r#""totalMarks":63,"#));
        assert!(json.contains(r#""percentage":31.5,"#));
        assert!(json.contains(r#""grade":"F""#));

        let back: ReportCard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
