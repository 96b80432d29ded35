//! Fixed-width layout primitives
//!
//! Every report line is a text column followed by two score columns:
//!
//! ```text
//! <-------------------- 58 --------------------------->|<- 7 ->|<- 7 ->|
//! ```

use crate::text::{report_number, round2};

/// Width of the text column
pub const TEXT_WIDTH: usize = 58;
/// Width of each score column, excluding its `|` divider
pub const SCORE_WIDTH: usize = 7;
/// Full line width: text, two score columns and three dividers
pub const LINE_WIDTH: usize = TEXT_WIDTH + 2 * SCORE_WIDTH + 3;

pub const SECTION_INDENT: usize = 0;
pub const LABEL_INDENT: usize = 4;
pub const SUBSECTION_INDENT: usize = 8;
pub const ENTRY_INDENT: usize = 8;
pub const DETAIL_INDENT: usize = 12;
pub const TOTAL_INDENT: usize = 49;
pub const FINAL_GRADE_INDENT: usize = 46;

/// Greedy word wrap into the text column.
///
/// Words are appended while the line stays under [`TEXT_WIDTH`]; each
/// continuation line starts at the same `indent` as the first. Lines are
/// right-padded to the column width. A single word longer than the column
/// is kept whole.
pub fn wrap(text: &str, indent: usize) -> Vec<String> {
    let pad = " ".repeat(indent);
    let mut lines = Vec::new();
    let mut line = pad.clone();
    let mut line_len = indent;
    let mut has_words = false;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if !has_words {
            line.push_str(word);
            line_len += word_len;
            has_words = true;
        } else if line_len + 1 + word_len < TEXT_WIDTH {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        } else {
            lines.push(line);
            line = format!("{}{}", pad, word);
            line_len = indent + word_len;
        }
    }
    lines.push(line);

    lines.into_iter().map(|l| pad_text(&l)).collect()
}

/// Right-pad a line to the text column width
pub fn pad_text(text: &str) -> String {
    format!("{:<width$}", text, width = TEXT_WIDTH)
}

/// A single score column: `| ` plus the value right-justified, or `|`
/// directly followed by the value when it carries a sign, so the column is
/// [`SCORE_WIDTH`] wide either way.
pub fn field(value: &str) -> String {
    if value.starts_with('+') || value.starts_with('-') {
        format!("|{:>width$}", value, width = SCORE_WIDTH)
    } else {
        format!("| {:>width$}", value, width = SCORE_WIDTH - 1)
    }
}

/// Score and out-of columns closed by the final divider
pub fn columns(score: &str, out_of: &str) -> String {
    format!("{}{}|", field(score), field(out_of))
}

/// Unsigned score and out-of columns
pub fn number_columns(score: f64, out_of: f64) -> String {
    columns(&report_number(score), &report_number(out_of))
}

/// Both score columns left blank
pub fn blank_columns() -> String {
    columns("", "")
}

/// Score and out-of text with explicit signs, for additive values.
///
/// Positive scores put `+` on both values and negative ones keep their
/// minus sign. A zero score takes its sign from the out-of: a negative
/// out-of gives `-0.0` beside it, anything else leaves the score bare and
/// marks the out-of with `+`.
pub fn signed_pair(score: f64, out_of: f64) -> (String, String) {
    let score = round2(score);
    let out_of = round2(out_of);
    let score_text = report_number(score);
    let out_of_text = report_number(out_of);

    if score > 0.0 {
        (format!("+{}", score_text), format!("+{}", out_of_text))
    } else if score < 0.0 {
        (score_text, out_of_text)
    } else if out_of < 0.0 {
        (format!("-{}", score_text), out_of_text)
    } else {
        (score_text, format!("+{}", out_of_text))
    }
}

/// Signed score and out-of columns
pub fn signed_columns(score: f64, out_of: f64) -> String {
    let (score, out_of) = signed_pair(score, out_of);
    columns(&score, &out_of)
}

/// Full-width dash line
pub fn divider() -> String {
    "-".repeat(LINE_WIDTH)
}

/// Center `text` within the full line width
pub fn center(text: &str) -> String {
    let len = text.chars().count();
    let left = LINE_WIDTH.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(left), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inner(field: &str) -> &str {
        field.strip_prefix('|').unwrap()
    }

    #[test]
    fn test_line_width() {
        assert_eq!(LINE_WIDTH, 75);
        let line = format!("{}{}", pad_text("x"), number_columns(3.5, 10.0));
        assert_eq!(line.chars().count(), LINE_WIDTH);
        assert_eq!(divider().len(), LINE_WIDTH);
    }

    #[test]
    fn test_fields_are_seven_wide() {
        for value in ["3.5", "10.0", "+3.5", "-10.0", "100.25", "+100.25", "-999.99", "0.0", ""] {
            assert_eq!(inner(&field(value)).chars().count(), SCORE_WIDTH, "{:?}", value);
        }
        assert_eq!(field("3.5"), "|    3.5");
        assert_eq!(field("+3.5"), "|   +3.5");
    }

    #[test]
    fn test_signed_pair() {
        assert_eq!(signed_pair(5.0, 5.0), ("+5.0".into(), "+5.0".into()));
        assert_eq!(signed_pair(-6.0, -6.0), ("-6.0".into(), "-6.0".into()));
        assert_eq!(signed_pair(0.0, 0.0), ("0.0".into(), "+0.0".into()));
        assert_eq!(signed_pair(0.0, -2.0), ("-0.0".into(), "-2.0".into()));
    }

    #[test]
    fn test_report_numbers_round_decimal_halves_up() {
        assert_eq!(number_columns(1.005, 2.675), "|   1.01|   2.68|");
        assert_eq!(signed_pair(0.285, 0.285), ("+0.29".into(), "+0.29".into()));
    }

    #[test]
    fn test_wrap_short_text() {
        let lines = wrap("Tests pass", SUBSECTION_INDENT);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), TEXT_WIDTH);
        assert!(lines[0].starts_with("        Tests pass "));
    }

    #[test]
    fn test_wrap_reindents_continuation_lines() {
        let text = "The implementation handles every required case but the helper \
                    functions duplicate a great deal of logic that belongs together";
        let lines = wrap(text, ENTRY_INDENT);
        assert!(lines.len() > 1);
        for line in &lines {
            assert_eq!(line.chars().count(), TEXT_WIDTH);
            assert!(line.starts_with("        "));
            assert!(!line[ENTRY_INDENT..].starts_with(' '));
            assert!(line.trim_end().len() < TEXT_WIDTH);
        }
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        assert_eq!(rejoined.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_center() {
        let line = center("Lab3");
        assert_eq!(line.trim_start(), "Lab3");
        assert_eq!(line.len() - 4, (LINE_WIDTH - 4) / 2);
    }
}
