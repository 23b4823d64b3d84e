use serde_json::Value;
use tracing::debug;

use crate::chat_parser::json_type_name;
use crate::error::{ChatcardError, Result};
use crate::formatting::{format_score, round_to};
use crate::grading::{is_pass, is_valid_mark, raw_percentage};
use crate::models::{Grade, ReportCard};

// ── ReportCardGenerator ───────────────────────────────────────────────────────

/// Stateless collection of report-card computations.
///
/// Input records look like `{"name": "Rahul", "marks": {"maths": 85, ...}}`.
/// Subject order is the order the keys appear in the record; it decides tie
/// breaks and the order of the pass/fail lists.
pub struct ReportCardGenerator;

impl ReportCardGenerator {
    /// Build a report card from an arbitrary JSON value.
    ///
    /// Returns `None` when the value is not a valid student record.
    pub fn generate(student: &Value) -> Option<ReportCard> {
        Self::try_generate(student)
            .inspect_err(|e| debug!(reason = %e, "rejected student record"))
            .ok()
    }

    /// Like [`generate`](Self::generate), reporting why a record was rejected.
    ///
    /// Checks run in this order and stop at the first failure:
    /// record shape, name, at least one subject, every mark.
    pub fn try_generate(student: &Value) -> Result<ReportCard> {
        let record = student.as_object().ok_or(ChatcardError::NotARecord)?;
        let Some(Value::Object(marks)) = record.get("marks") else {
            return Err(ChatcardError::MissingMarks);
        };
        let name = match record.get("name") {
            Some(Value::String(name)) if !name.is_empty() => name,
            _ => return Err(ChatcardError::InvalidName),
        };

        let scores = marks
            .iter()
            .map(|(subject, value)| {
                value
                    .as_f64()
                    .map(|mark| (subject.as_str(), mark))
                    .ok_or_else(|| ChatcardError::InvalidMark {
                        subject: subject.clone(),
                        value: format!("{} ({})", value, json_type_name(value)),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::try_generate_marks(name, scores)
    }

    /// Decode `record` as JSON and build a report card from it.
    ///
    /// Malformed JSON is a [`ChatcardError::JsonParse`], not a rejection.
    pub fn try_generate_str(record: &str) -> Result<ReportCard> {
        let student: Value = serde_json::from_str(record)?;
        Self::try_generate(&student)
    }

    /// Build a report card from already-typed `(subject, mark)` pairs.
    pub fn generate_marks<'a, I>(name: &str, marks: I) -> Option<ReportCard>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        Self::try_generate_marks(name, marks)
            .inspect_err(|e| debug!(reason = %e, "rejected student record"))
            .ok()
    }

    /// Like [`generate_marks`](Self::generate_marks), reporting why the input
    /// was rejected.
    pub fn try_generate_marks<'a, I>(name: &str, marks: I) -> Result<ReportCard>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        if name.is_empty() {
            return Err(ChatcardError::InvalidName);
        }

        let marks: Vec<(&str, f64)> = marks.into_iter().collect();
        let Some(&first) = marks.first() else {
            return Err(ChatcardError::EmptyMarks);
        };

        if let Some(&(subject, mark)) = marks.iter().find(|(_, mark)| !is_valid_mark(*mark)) {
            return Err(ChatcardError::InvalidMark {
                subject: subject.to_string(),
                value: format_score(mark),
            });
        }

        let subject_count = marks.len();
        let total_marks: f64 = marks.iter().map(|(_, mark)| *mark).sum();
        let raw = raw_percentage(total_marks, subject_count);

        // One pass, strict comparison: on ties the earlier subject stays.
        let (highest, lowest) =
            marks
                .iter()
                .skip(1)
                .fold((first, first), |(highest, lowest), &entry| {
                    let highest = if entry.1 > highest.1 { entry } else { highest };
                    let lowest = if entry.1 < lowest.1 { entry } else { lowest };
                    (highest, lowest)
                });

        let mut passed_subjects = Vec::new();
        let mut failed_subjects = Vec::new();
        for (subject, mark) in &marks {
            if is_pass(*mark) {
                passed_subjects.push(subject.to_string());
            } else {
                failed_subjects.push(subject.to_string());
            }
        }

        Ok(ReportCard {
            name: name.to_string(),
            total_marks,
            percentage: round_to(raw, 2),
            grade: Grade::from_percentage(raw),
            highest_subject: highest.0.to_string(),
            lowest_subject: lowest.0.to_string(),
            passed_subjects,
            failed_subjects,
            subject_count,
        })
    }
}

/// Build a report card from a JSON value.
pub fn generate(student: &Value) -> Option<ReportCard> {
    ReportCardGenerator::generate(student)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
