use serde::{Deserialize, Serialize};

use super::types::TimeStatus;
use crate::config::TimeConfig;
use crate::policy::{self, Adjustment};
use crate::text::round2;

/// Name given to the extra-credit container
pub const EXTRA_CREDIT_NAME: &str = "Extra Credit";

/// Informational point breakdown shown under a subsection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detail {
    pub name: String,
    /// Display-only magnitude, e.g. `-2.0` for "(-2.0 points)"
    pub value: f64,
}

impl Detail {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Detail {
            name: name.into(),
            value,
        }
    }
}

/// The atomic gradable line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subsection {
    pub name: String,
    pub score: f64,
    pub out_of: f64,
    /// Name of the gradable part this score is mirrored from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Detail>,
}

impl Subsection {
    /// Create a locally graded subsection
    pub fn new(name: impl Into<String>, score: f64, out_of: f64) -> Self {
        Subsection {
            name: name.into(),
            score,
            out_of,
            source: None,
            details: Vec::new(),
        }
    }

    /// Mark this subsection as mirrored from another gradable part
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Add a detail line
    pub fn with_detail(mut self, name: impl Into<String>, value: f64) -> Self {
        self.details.push(Detail::new(name, value));
        self
    }

    /// Whether the score is mirrored from elsewhere rather than graded here
    pub fn is_sourced(&self) -> bool {
        self.source.is_some()
    }
}

/// A named group of subsections (also the shape of the extra-credit block)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub subsections: Vec<Subsection>,
    /// Staff notes; an empty list means the block is absent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    /// Grader comments; an empty list means the block is absent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            subsections: Vec::new(),
            notes: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Add a subsection
    pub fn with_subsection(mut self, subsection: Subsection) -> Self {
        self.subsections.push(subsection);
        self
    }

    /// Add a note entry
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a comment entry
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    /// Sum of subsection scores
    pub fn score(&self) -> f64 {
        self.subsections.iter().map(|s| s.score).sum()
    }

    /// Sum of subsection out-ofs
    pub fn out_of(&self) -> f64 {
        self.subsections.iter().map(|s| s.out_of).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.subsections.is_empty()
    }
}

/// Student or group the rubric belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub account: String,
}

impl Student {
    pub fn new(name: impl Into<String>, account: impl Into<String>) -> Self {
        Student {
            name: name.into(),
            account: account.into(),
        }
    }
}

/// Root of one gradable part of one handin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rubric {
    /// Assignment/part display name
    pub name: String,
    /// Assignment ordinal
    pub number: i64,
    pub student: Student,
    pub status: TimeStatus,
    /// Only meaningful under a daily-deduction late policy
    pub days_late: u32,
    pub sections: Vec<Section>,
    pub extra_credit: Section,
}

impl Rubric {
    pub fn new(name: impl Into<String>, number: i64, student: Student) -> Self {
        Rubric {
            name: name.into(),
            number,
            student,
            status: TimeStatus::OnTime,
            days_late: 0,
            sections: Vec::new(),
            extra_credit: Section::new(EXTRA_CREDIT_NAME),
        }
    }

    /// Add a section
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Add an extra-credit subsection
    pub fn with_extra_credit(mut self, subsection: Subsection) -> Self {
        self.extra_credit.subsections.push(subsection);
        self
    }

    /// Set the time status and days late
    pub fn with_status(mut self, status: TimeStatus, days_late: u32) -> Self {
        self.status = status;
        self.days_late = days_late;
        self
    }

    /// Every subsection, regular sections first, then extra credit
    pub fn subsections(&self) -> impl Iterator<Item = &Subsection> {
        self.sections
            .iter()
            .chain(std::iter::once(&self.extra_credit))
            .flat_map(|section| section.subsections.iter())
    }

    /// Subsections whose score is mirrored from another gradable part
    pub fn sourced_subsections(&self) -> impl Iterator<Item = &Subsection> {
        self.subsections().filter(|s| s.is_sourced())
    }

    /// Sum of every subsection score, extra credit included
    pub fn total_rubric_points(&self) -> f64 {
        round2(self.subsections().map(|s| s.score).sum())
    }

    /// Sum of every subsection out-of, extra credit included
    pub fn total_rubric_out_of(&self) -> f64 {
        round2(self.subsections().map(|s| s.out_of).sum())
    }

    /// Sum of locally graded subsection scores (sourced ones excluded)
    pub fn total_handin_points(&self) -> f64 {
        round2(
            self.subsections()
                .filter(|s| !s.is_sourced())
                .map(|s| s.score)
                .sum(),
        )
    }

    /// Sum of locally graded subsection out-ofs (sourced ones excluded)
    pub fn total_handin_out_of(&self) -> f64 {
        round2(
            self.subsections()
                .filter(|s| !s.is_sourced())
                .map(|s| s.out_of)
                .sum(),
        )
    }

    /// Status adjustment over the whole rubric's out-of
    pub fn rubric_adjustment(&self, time: &TimeConfig) -> Adjustment {
        self.adjustment(time, self.total_rubric_out_of())
    }

    /// Status adjustment over the locally graded out-of
    pub fn handin_adjustment(&self, time: &TimeConfig) -> Adjustment {
        self.adjustment(time, self.total_handin_out_of())
    }

    /// Total points with the time-status adjustment applied
    pub fn total_rubric_score(&self, time: &TimeConfig) -> f64 {
        self.rubric_adjustment(time)
            .apply(self.total_rubric_points())
    }

    /// Locally graded points with the time-status adjustment applied
    pub fn total_handin_score(&self, time: &TimeConfig) -> f64 {
        self.handin_adjustment(time)
            .apply(self.total_handin_points())
    }

    fn adjustment(&self, time: &TimeConfig, out_of_basis: f64) -> Adjustment {
        policy::deduction(
            self.status,
            time.policy,
            time.units,
            &time.information(),
            self.days_late,
            out_of_basis,
        )
    }

    /// Copy a template rubric for one student or group.
    ///
    /// Scores, notes and comments are kept as the template defines them;
    /// the time status starts over as on time.
    pub fn instantiate(&self, student: Student) -> Rubric {
        Rubric {
            student,
            status: TimeStatus::OnTime,
            days_late: 0,
            ..self.clone()
        }
    }

    /// Fill sourced subsection scores from `resolver`.
    ///
    /// Returns the number of references that resolved. Unresolved
    /// subsections keep their current score.
    pub fn resolve_sources<F>(&mut self, mut resolver: F) -> usize
    where
        F: FnMut(&str) -> Option<f64>,
    {
        let mut resolved = 0;
        for section in self
            .sections
            .iter_mut()
            .chain(std::iter::once(&mut self.extra_credit))
        {
            for subsection in &mut section.subsections {
                let Some(source) = subsection.source.as_deref() else {
                    continue;
                };
                match resolver(source) {
                    Some(score) => {
                        subsection.score = score;
                        resolved += 1;
                    }
                    None => {
                        tracing::warn!(
                            source,
                            subsection = %subsection.name,
                            "unresolved source reference"
                        );
                    }
                }
            }
        }
        resolved
    }
}
