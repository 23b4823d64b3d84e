use unicode_width::UnicodeWidthStr;

use crate::models::{ParsedMessage, ReportCard};

/// Round `value` to `decimals` places.
///
/// The result is the nearest `decimals`-place decimal to the exact binary
/// value, so `0.114_999…` (what `0.115 / 100 * 100` evaluates to) gives
/// `0.11`. A value exactly halfway between two neighbours rounds up.
///
/// # Examples
///
/// ```
/// use chatcard_core::formatting::round_to;
///
/// assert_eq!(round_to(31.5, 2), 31.5);
/// assert_eq!(round_to(66.666_666, 2), 66.67);
/// assert_eq!(round_to(12.125, 2), 12.13);
/// assert_eq!(round_to(12.345_6, 0), 12.0);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if is_halfway(value, decimals) {
        let scale = 10_f64.powi(decimals as i32);
        return (value * scale).ceil() / scale;
    }
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Format a score the way a JSON reader would print it: whole numbers without
/// a fractional part, everything else in shortest form.
///
/// # Examples
///
/// ```
/// use chatcard_core::formatting::format_score;
///
/// assert_eq!(format_score(85.0), "85");
/// assert_eq!(format_score(31.5), "31.5");
/// assert_eq!(format_score(0.0), "0");
/// ```
pub fn format_score(value: f64) -> String {
    // `f64`'s Display already drops a zero fraction.
    format!("{}", value)
}

/// Right-pad `s` with spaces to `width` terminal columns.
///
/// Strings already at least `width` columns wide are returned unchanged.
pub fn pad_display(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + (width - current));
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width - current));
    out
}

/// Render `label: value` rows with the values aligned in one column.
pub fn render_fields(rows: &[(&str, String)]) -> String {
    let label_width = rows
        .iter()
        .map(|(label, _)| UnicodeWidthStr::width(*label) + 1)
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|(label, value)| {
            let key = format!("{label}:");
            format!("{} {}", pad_display(&key, label_width), value)
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human-readable block for a parsed chat line.
pub fn render_message(msg: &ParsedMessage) -> String {
    render_fields(&[
        ("Date", msg.date.clone()),
        ("Time", msg.time.clone()),
        (
            "Timestamp",
            msg.timestamp()
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Sender", msg.sender.clone()),
        ("Text", msg.text.clone()),
        ("Words", msg.word_count.to_string()),
        ("Sentiment", msg.sentiment.to_string()),
    ])
}

/// Human-readable block for a report card.
pub fn render_report_card(card: &ReportCard) -> String {
    render_fields(&[
        ("Name", card.name.clone()),
        ("Total marks", format_score(card.total_marks)),
        ("Percentage", format!("{}%", format_score(card.percentage))),
        ("Grade", card.grade.to_string()),
        ("Highest", card.highest_subject.clone()),
        ("Lowest", card.lowest_subject.clone()),
        ("Passed", join_or_dash(&card.passed_subjects)),
        ("Failed", join_or_dash(&card.failed_subjects)),
        ("Subjects", card.subject_count.to_string()),
    ])
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether `value` sits exactly halfway between two `decimals`-place
/// decimals. In binary that means an odd multiple of `2^-(decimals + 1)`.
fn is_halfway(value: f64, decimals: u32) -> bool {
    let units = value * 2_f64.powi(decimals as i32 + 1);
    units.is_finite() && units.fract() == 0.0 && units.rem_euclid(2.0) == 1.0
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Grade, Sentiment};

    // ── round_to ─────────────────────────────────────────────────────────────

    #[test]
    fn test_round_to_two_places() {
        assert_eq!(round_to(85.0, 2), 85.0);
        assert_eq!(round_to(33.333_333, 2), 33.33);
        assert_eq!(round_to(66.666_666, 2), 66.67);
    }

    #[test]
    fn test_round_to_uses_exact_binary_value() {
        // 0.115 / 100 * 100 is 0.11499999999999999; scaling by 100 first
        // would turn it into 11.5 and round the wrong way.
        assert_eq!(round_to(0.115 / 100.0 * 100.0, 2), 0.11);
        assert_eq!(round_to(1.005, 2), 1.0);
    }

    #[test]
    fn test_round_to_exact_halves_round_up() {
        assert_eq!(round_to(12.125, 2), 12.13);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_round_to_non_finite_passes_through() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }

    // ── format_score ─────────────────────────────────────────────────────────

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(255.0), "255");
        assert_eq!(format_score(85.25), "85.25");
    }

    // ── pad_display ──────────────────────────────────────────────────────────

    #[test]
    fn test_pad_display_ascii() {
        assert_eq!(pad_display("ab", 4), "ab  ");
        assert_eq!(pad_display("abcd", 2), "abcd");
    }

    #[test]
    fn test_pad_display_wide_characters() {
        // The emoji occupies two columns.
        assert_eq!(pad_display("😂", 4), "😂  ");
    }

    // ── renderers ────────────────────────────────────────────────────────────

    #[test]
    fn test_render_fields_aligns_values() {
        let out = render_fields(&[("A", "1".to_string()), ("Long", "2".to_string())]);
        assert_eq!(out, "A:    1\nLong: 2");
    }

    #[test]
    fn test_render_message() {
        let msg = ParsedMessage {
            date: "01/12/2024".to_string(),
            time: "09:15".to_string(),
            sender: "Priya".to_string(),
            text: "I love this song".to_string(),
            word_count: 4,
            sentiment: Sentiment::Love,
        };
        let out = render_message(&msg);
        assert!(out.contains("Timestamp: 2024-12-01 09:15"));
        assert!(out.contains("Sender:    Priya"));
        assert!(out.contains("Words:     4"));
        assert!(out.ends_with("Sentiment: love"));
    }

    #[test]
    fn test_render_message_without_calendar_date() {
        let msg = ParsedMessage {
            date: "99/99/9999".to_string(),
            time: "xx:yy".to_string(),
            sender: "Priya".to_string(),
            text: "hi".to_string(),
            word_count: 1,
            sentiment: Sentiment::Neutral,
        };
        let out = render_message(&msg);
        assert!(out.contains("Date:      99/99/9999"));
        assert!(out.contains("Timestamp: -"));
    }

    #[test]
    fn test_render_report_card() {
        let card = ReportCard {
            name: "Rahul".to_string(),
            total_marks: 255.0,
            percentage: 85.0,
            grade: Grade::A,
            highest_subject: "science".to_string(),
            lowest_subject: "english".to_string(),
            passed_subjects: vec![
                "maths".to_string(),
                "science".to_string(),
                "english".to_string(),
            ],
            failed_subjects: vec![],
            subject_count: 3,
        };
        let out = render_report_card(&card);
        assert!(out.contains("Total marks: 255"));
        assert!(out.contains("Percentage:  85%"));
        assert!(out.contains("Passed:      maths, science, english"));
        assert!(out.contains("Failed:      -"));
    }
}
