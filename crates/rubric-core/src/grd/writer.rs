use std::io::Write;

use serde::{Deserialize, Serialize};

use super::layout::*;
use crate::config::TimeConfig;
use crate::error::{Result, RubricError};
use crate::model::{LatePolicy, Rubric, Section, TimeStatus, EXTRA_CREDIT_NAME};
use crate::policy::{self, Adjustment, HandinStatus};
use crate::text::{number_text, round2};

/// Identity of the grader responsible for a handin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grader {
    pub name: String,
    pub login: String,
}

impl Grader {
    pub fn new(name: impl Into<String>, login: impl Into<String>) -> Self {
        Grader {
            name: name.into(),
            login: login.into(),
        }
    }
}

/// Everything a report needs besides the rubrics themselves
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub grader: &'a Grader,
    pub status: HandinStatus,
    pub time: &'a TimeConfig,
}

/// Render the report for the rubrics of one handin
#[tracing::instrument(skip_all, fields(rubrics = rubrics.len(), status = %ctx.status.status))]
pub fn render(rubrics: &[Rubric], ctx: &ReportContext<'_>) -> Result<String> {
    let Some(first) = rubrics.first() else {
        return Err(RubricError::Other(
            "cannot render a grade report without rubrics".to_string(),
        ));
    };

    let mut report = Report::default();
    report.header(first, ctx);

    for rubric in rubrics {
        for section in &rubric.sections {
            report.section(section, false);
        }
    }

    let section_score: f64 = rubrics
        .iter()
        .flat_map(|r| r.sections.iter())
        .map(Section::score)
        .sum();
    let section_out_of: f64 = rubrics
        .iter()
        .flat_map(|r| r.sections.iter())
        .map(Section::out_of)
        .sum();

    let extra_credit = merged_extra_credit(rubrics);
    let extra_credit_score = extra_credit.score();
    let earned = round2(section_score + extra_credit_score);

    let adjustment = policy::assess(rubrics, ctx.time, ctx.status).adjustment;
    let adjustment_amount = adjustment.amount(earned);
    if ctx.status.status != TimeStatus::OnTime {
        report.status_line(ctx, adjustment_amount);
    }

    if !extra_credit.is_empty() {
        report.section(&extra_credit, true);
    }

    let final_score = match adjustment {
        Adjustment::Forfeit => 0.0,
        Adjustment::Additive(amount) => round2(section_score + amount + extra_credit_score),
    };
    report.final_grade(final_score, section_out_of);

    Ok(report.finish())
}

/// Render the report into `out`, flushing and closing it afterwards
pub fn write_report<W: Write>(rubrics: &[Rubric], ctx: &ReportContext<'_>, out: W) -> Result<()> {
    let text = render(rubrics, ctx)?;
    let mut out = out;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn merged_extra_credit(rubrics: &[Rubric]) -> Section {
    let mut merged = Section::new(EXTRA_CREDIT_NAME);
    for rubric in rubrics {
        let ec = &rubric.extra_credit;
        merged.subsections.extend(ec.subsections.iter().cloned());
        merged.notes.extend(ec.notes.iter().cloned());
        merged.comments.extend(ec.comments.iter().cloned());
    }
    merged
}

fn status_message(ctx: &ReportContext<'_>) -> String {
    let status = ctx.status.status;
    let time = ctx.time;
    let suffix = time.units.suffix();
    let name = status.pretty_name();

    match (status, time.policy) {
        (TimeStatus::Early, LatePolicy::MultipleDeadlines) => {
            let value = time.early.value;
            let sign = if value >= 0.0 { "+" } else { "" };
            format!("{} Bonus ({}{}{})", name, sign, number_text(value), suffix)
        }
        (TimeStatus::Late, LatePolicy::DailyDeduction) => format!(
            "{} Penalty ({}{} per day)",
            name,
            number_text(time.ontime.value),
            suffix
        ),
        (TimeStatus::Late, LatePolicy::MultipleDeadlines) => format!(
            "{} Penalty ({}{})",
            name,
            number_text(time.late.value),
            suffix
        ),
        (TimeStatus::NcLate, _) => format!("{} Penalty (score forfeited)", name),
        _ => format!("{} (no adjustment)", name),
    }
}

#[derive(Default)]
struct Report {
    lines: Vec<String>,
}

impl Report {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Wrapped text; the last line carries `last_columns`, earlier ones blank columns
    fn text(&mut self, text: &str, indent: usize, last_columns: String) {
        let lines = wrap(text, indent);
        let last = lines.len().saturating_sub(1);
        let mut trailer = Some(last_columns);
        for (i, line) in lines.into_iter().enumerate() {
            let columns = if i == last {
                trailer.take().unwrap_or_else(blank_columns)
            } else {
                blank_columns()
            };
            self.push(format!("{}{}", line, columns));
        }
    }

    fn header(&mut self, rubric: &Rubric, ctx: &ReportContext<'_>) {
        self.push(center(&rubric.name));
        self.push("");

        let status = ctx.status;
        let mut status_line = format!("HANDIN STATUS: {}", status.status.pretty_name());
        if status.status == TimeStatus::Late && ctx.time.policy == LatePolicy::DailyDeduction {
            let unit = if status.days_late == 1 { "day" } else { "days" };
            status_line.push_str(&format!(" ({} {} late)", status.days_late, unit));
        }
        self.push(status_line);
        self.push(format!(
            "STUDENT: {} ({})",
            rubric.student.name, rubric.student.account
        ));
        self.push(format!("GRADER: {} ({})", ctx.grader.name, ctx.grader.login));
        self.push("");

        self.push(format!("{}{}", pad_text(""), columns("YOUR", "OUT")));
        self.push(format!("{}{}", pad_text("SECTION"), columns("SCORE", "OF")));
        self.push(divider());
    }

    fn section(&mut self, section: &Section, signed: bool) {
        let score_columns = |score: f64, out_of: f64| {
            if signed {
                signed_columns(score, out_of)
            } else {
                number_columns(score, out_of)
            }
        };

        self.text(&section.name, SECTION_INDENT, blank_columns());

        for subsection in &section.subsections {
            self.text(
                &subsection.name,
                SUBSECTION_INDENT,
                score_columns(subsection.score, subsection.out_of),
            );
            for detail in &subsection.details {
                let text = if detail.value != 0.0 {
                    format!("{} ({} points)", detail.name, number_text(detail.value))
                } else {
                    detail.name.clone()
                };
                self.text(&text, DETAIL_INDENT, blank_columns());
            }
        }

        self.entries("Notes:", &section.notes);
        self.entries("Comments:", &section.comments);

        self.text(
            "Total",
            TOTAL_INDENT,
            score_columns(section.score(), section.out_of()),
        );
        self.push(divider());
    }

    fn entries(&mut self, label: &str, entries: &[String]) {
        if entries.is_empty() {
            return;
        }
        self.text(label, LABEL_INDENT, blank_columns());
        for entry in entries {
            self.text(entry, ENTRY_INDENT, blank_columns());
        }
    }

    fn status_line(&mut self, ctx: &ReportContext<'_>, amount: f64) {
        self.text(
            &status_message(ctx),
            SECTION_INDENT,
            signed_columns(amount, amount),
        );
        self.push(divider());
    }

    fn final_grade(&mut self, score: f64, out_of: f64) {
        self.text("Final Grade", FINAL_GRADE_INDENT, number_columns(score, out_of));
        self.push(divider());
    }

    fn finish(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GradeUnits, Student, Subsection};

    fn lab3() -> Rubric {
        Rubric::new("Lab3", 3, Student::new("Ada Lovelace", "alovelac")).with_section(
            Section::new("Correctness").with_subsection(Subsection::new("Tests pass", 18.0, 20.0)),
        )
    }

    fn render_with(rubric: &Rubric, time: &TimeConfig) -> String {
        let grader = Grader::new("Grace Hopper", "ghopper");
        let ctx = ReportContext {
            grader: &grader,
            status: HandinStatus::of(rubric),
            time,
        };
        render(std::slice::from_ref(rubric), &ctx).unwrap()
    }

    fn line_with<'a>(report: &'a str, needle: &str) -> &'a str {
        report
            .lines()
            .find(|l| l.contains(needle))
            .unwrap_or_else(|| panic!("no line containing {:?} in\n{}", needle, report))
    }

    #[test]
    fn test_on_time_report() {
        let report = render_with(&lab3(), &TimeConfig::default());

        assert!(report.contains("HANDIN STATUS: On Time\n"));
        assert!(report.contains("STUDENT: Ada Lovelace (alovelac)\n"));
        assert!(report.contains("GRADER: Grace Hopper (ghopper)\n"));
        assert!(!report.contains("Penalty"));
        assert!(!report.contains("Bonus"));
        assert!(!report.contains(EXTRA_CREDIT_NAME));

        let final_line = line_with(&report, "Final Grade");
        assert!(final_line.ends_with("|   18.0|   20.0|"));
    }

    #[test]
    fn test_score_lines_are_full_width() {
        let report = render_with(&lab3(), &TimeConfig::default());
        for line in report.lines().filter(|l| l.ends_with('|')) {
            assert_eq!(line.chars().count(), LINE_WIDTH, "{:?}", line);
        }
        assert!(report.ends_with(&format!("{}\n", divider())));
    }

    #[test]
    fn test_daily_deduction_status_line() {
        let time = TimeConfig {
            policy: LatePolicy::DailyDeduction,
            units: GradeUnits::Points,
            ..TimeConfig::default()
        }
        .with_values(0.0, 2.0, 0.0);
        let rubric = lab3().with_status(TimeStatus::Late, 3);
        let report = render_with(&rubric, &time);

        assert!(report.contains("HANDIN STATUS: Late (3 days late)\n"));
        let status = line_with(&report, "Late Penalty (2.0 points per day)");
        assert!(status.ends_with("|   -6.0|   -6.0|"));
        assert!(line_with(&report, "Final Grade").ends_with("|   12.0|   20.0|"));
    }

    #[test]
    fn test_one_day_late_is_singular() {
        let time = TimeConfig {
            policy: LatePolicy::DailyDeduction,
            ..TimeConfig::default()
        };
        let report = render_with(&lab3().with_status(TimeStatus::Late, 1), &time);
        assert!(report.contains("(1 day late)"));
    }

    #[test]
    fn test_early_bonus_percentage() {
        let time = TimeConfig {
            policy: LatePolicy::MultipleDeadlines,
            units: GradeUnits::Percentage,
            ..TimeConfig::default()
        }
        .with_values(5.0, 0.0, -10.0);
        let report = render_with(&lab3().with_status(TimeStatus::Early, 0), &time);

        let status = line_with(&report, "Early Bonus (+5.0%)");
        assert!(status.ends_with("|   +1.0|   +1.0|"));
        assert!(line_with(&report, "Final Grade").ends_with("|   19.0|   20.0|"));
    }

    #[test]
    fn test_zero_adjustment_keeps_sign_quirk() {
        let time = TimeConfig {
            policy: LatePolicy::MultipleDeadlines,
            ..TimeConfig::default()
        };
        let report = render_with(&lab3().with_status(TimeStatus::Late, 0), &time);
        let status = line_with(&report, "Late Penalty (0.0 points)");
        assert!(status.ends_with("|    0.0|   +0.0|"));
    }

    #[test]
    fn test_nc_late_forfeits() {
        let report = render_with(
            &lab3().with_status(TimeStatus::NcLate, 0),
            &TimeConfig::default(),
        );
        let status = line_with(&report, "NC Late Penalty (score forfeited)");
        assert!(status.ends_with("|  -18.0|  -18.0|"));
        assert!(line_with(&report, "Final Grade").ends_with("|    0.0|   20.0|"));
    }

    #[test]
    fn test_extra_credit_is_signed_and_outside_denominator() {
        let rubric = lab3().with_extra_credit(Subsection::new("Animation", 3.0, 0.0));
        let report = render_with(&rubric, &TimeConfig::default());

        assert!(line_with(&report, "Animation").ends_with("|   +3.0|   +0.0|"));
        assert!(line_with(&report, "Final Grade").ends_with("|   21.0|   20.0|"));
    }

    #[test]
    fn test_details_notes_and_comments() {
        let mut rubric = lab3();
        let section = &mut rubric.sections[0];
        section.subsections[0] = Subsection::new("Tests pass", 18.0, 20.0)
            .with_detail("Fails on empty input", -2.0)
            .with_detail("See feedback", 0.0);
        section.notes.push("Graded against the public tests.".to_string());
        section.comments.push("Nice work.".to_string());

        let report = render_with(&rubric, &TimeConfig::default());
        let detail = line_with(&report, "Fails on empty input (-2.0 points)");
        assert!(detail.starts_with("            Fails"));
        assert!(detail.ends_with("|       |       |"));
        let plain = line_with(&report, "See feedback");
        assert!(plain.starts_with("            See feedback "));
        assert!(!plain.contains("points"));
        assert!(line_with(&report, "Notes:").starts_with("    Notes:"));
        assert!(line_with(&report, "Graded against").starts_with("        Graded"));
        assert!(line_with(&report, "Comments:").starts_with("    Comments:"));
    }

    #[test]
    fn test_wrapped_subsection_scores_on_last_line() {
        let name = "The implementation handles every required case including the tricky empty input";
        let rubric = Rubric::new("Lab3", 3, Student::new("Ada Lovelace", "alovelac")).with_section(
            Section::new("Correctness").with_subsection(Subsection::new(name, 18.0, 20.0)),
        );
        let report = render_with(&rubric, &TimeConfig::default());

        let lines: Vec<&str> = report.lines().collect();
        let first = lines
            .iter()
            .position(|l| l.starts_with("        The implementation"))
            .unwrap();
        assert!(lines[first].ends_with("|       |       |"));
        assert!(lines[first + 1].contains("empty input"));
        assert!(lines[first + 1].ends_with("|   18.0|   20.0|"));
    }

    #[test]
    fn test_render_requires_rubrics() {
        let grader = Grader::default();
        let time = TimeConfig::default();
        let ctx = ReportContext {
            grader: &grader,
            status: HandinStatus::default(),
            time: &time,
        };
        assert!(render(&[], &ctx).is_err());
    }
}
