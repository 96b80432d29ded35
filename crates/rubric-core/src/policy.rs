//! Time-status grade policy
//!
//! Computes the bonus or penalty a handin earns from when it arrived.
//! The adjustment depends on three axes: the handin's [`TimeStatus`], the
//! assignment's [`LatePolicy`] and its [`GradeUnits`]. Every combination is
//! spelled out in a single `match`, so a new status or policy fails to
//! compile until it is handled.
//!
//! A non-compliant late handin forfeits its whole score. That case is an
//! [`Adjustment::Forfeit`] rather than a large negative number, so callers
//! summing several parts never subtract the same points twice.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::TimeConfig;
use crate::model::{GradeUnits, LatePolicy, Rubric, Subsection, TimeStatus};
use crate::text::round2;

/// Early, on-time and late values configured for an assignment.
///
/// Under a daily-deduction policy `ontime_value` is the per-day amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeInformation {
    pub early_value: f64,
    pub ontime_value: f64,
    pub late_value: f64,
}

/// Result of applying a time policy to a score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "amount")]
pub enum Adjustment {
    /// Add this amount (negative for penalties)
    Additive(f64),
    /// The entire earned score is lost
    Forfeit,
}

impl Adjustment {
    /// No bonus and no penalty
    pub const NONE: Adjustment = Adjustment::Additive(0.0);

    pub fn is_forfeit(&self) -> bool {
        matches!(self, Adjustment::Forfeit)
    }

    /// Signed amount this adjustment adds to `points`
    pub fn amount(&self, points: f64) -> f64 {
        match self {
            Adjustment::Additive(value) => *value,
            Adjustment::Forfeit => -points,
        }
    }

    /// Apply the adjustment to `points`, rounded to two decimals
    pub fn apply(&self, points: f64) -> f64 {
        match self {
            Adjustment::Additive(value) => round2(points + value),
            Adjustment::Forfeit => 0.0,
        }
    }
}

/// Time status and days late of one handin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandinStatus {
    pub status: TimeStatus,
    pub days_late: u32,
}

impl HandinStatus {
    pub fn new(status: TimeStatus, days_late: u32) -> Self {
        HandinStatus { status, days_late }
    }

    /// The status recorded on a rubric
    pub fn of(rubric: &Rubric) -> Self {
        HandinStatus::new(rubric.status, rubric.days_late)
    }
}

/// Compute the time-status adjustment for a score out of `out_of_basis`.
///
/// On time never adjusts and non-compliant late always forfeits, whatever
/// the policy. Combinations a policy cannot produce (an early handin under
/// a daily deduction, anything but on time or non-compliant under no-late)
/// adjust by zero.
pub fn deduction(
    status: TimeStatus,
    policy: LatePolicy,
    units: GradeUnits,
    info: &TimeInformation,
    days_late: u32,
    out_of_basis: f64,
) -> Adjustment {
    let scaled = |value: f64| match units {
        GradeUnits::Percentage => out_of_basis * (value / 100.0),
        GradeUnits::Points => value,
    };

    match (status, policy) {
        (TimeStatus::OnTime, _) => Adjustment::NONE,
        (TimeStatus::NcLate, _) => Adjustment::Forfeit,
        (TimeStatus::Late, LatePolicy::DailyDeduction) => {
            let daily = scaled(info.ontime_value);
            Adjustment::Additive(-(daily * f64::from(days_late)))
        }
        (TimeStatus::Early, LatePolicy::MultipleDeadlines) => {
            Adjustment::Additive(scaled(info.early_value))
        }
        (TimeStatus::Late, LatePolicy::MultipleDeadlines) => {
            Adjustment::Additive(scaled(info.late_value))
        }
        (TimeStatus::Early, LatePolicy::DailyDeduction)
        | (TimeStatus::Early, LatePolicy::NoLate)
        | (TimeStatus::Late, LatePolicy::NoLate) => Adjustment::NONE,
    }
}

/// Classify a handin time against the configured deadlines.
///
/// Deadlines without a date are skipped. With no on-time date at all every
/// handin is on time.
pub fn classify(handin: DateTime<Utc>, time: &TimeConfig) -> HandinStatus {
    let Some(ontime) = time.ontime.date else {
        return HandinStatus::default();
    };
    let not_after = |deadline: Option<DateTime<Utc>>| deadline.is_some_and(|d| handin <= d);

    match time.policy {
        LatePolicy::NoLate => {
            if handin <= ontime {
                HandinStatus::new(TimeStatus::OnTime, 0)
            } else {
                HandinStatus::new(TimeStatus::NcLate, 0)
            }
        }
        LatePolicy::MultipleDeadlines => {
            if not_after(time.early.date) {
                HandinStatus::new(TimeStatus::Early, 0)
            } else if handin <= ontime {
                HandinStatus::new(TimeStatus::OnTime, 0)
            } else if not_after(time.late.date) {
                HandinStatus::new(TimeStatus::Late, 0)
            } else {
                HandinStatus::new(TimeStatus::NcLate, 0)
            }
        }
        LatePolicy::DailyDeduction => {
            if handin <= ontime {
                return HandinStatus::new(TimeStatus::OnTime, 0);
            }
            if time.late.date.is_some_and(|late| handin > late) {
                return HandinStatus::new(TimeStatus::NcLate, 0);
            }
            let late_by = (handin - ontime).num_seconds();
            let days = (late_by + 86_399) / 86_400;
            HandinStatus::new(TimeStatus::Late, u32::try_from(days).unwrap_or(u32::MAX))
        }
    }
}

/// Score of a whole handin across its gradable parts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Earned points before the time adjustment
    pub points: f64,
    /// Out-of basis the adjustment was computed on
    pub out_of: f64,
    pub adjustment: Adjustment,
    /// Points with the adjustment applied
    pub score: f64,
}

/// Map each source name to the first subsection carrying it, across parts.
///
/// A source stands for one underlying shared score (a design check graded
/// once and referenced by several rubrics), so it may only count once.
pub fn shared_sources(parts: &[Rubric]) -> BTreeMap<&str, &Subsection> {
    let mut shared = BTreeMap::new();
    for part in parts {
        for subsection in part.sourced_subsections() {
            if let Some(source) = subsection.source.as_deref() {
                shared.entry(source).or_insert(subsection);
            }
        }
    }
    shared
}

/// Assess a handin made of several gradable parts.
///
/// Only locally graded content counts unless the time policy affects the
/// whole assignment, in which case every shared source is added once.
pub fn assess(parts: &[Rubric], time: &TimeConfig, status: HandinStatus) -> Assessment {
    let mut points: f64 = parts.iter().map(Rubric::total_handin_points).sum();
    let mut out_of: f64 = parts.iter().map(Rubric::total_handin_out_of).sum();

    if time.affects_all {
        for subsection in shared_sources(parts).values() {
            points += subsection.score;
            out_of += subsection.out_of;
        }
    }

    let points = round2(points);
    let out_of = round2(out_of);
    let adjustment = deduction(
        status.status,
        time.policy,
        time.units,
        &time.information(),
        status.days_late,
        out_of,
    );

    tracing::debug!(
        points,
        out_of,
        status = %status.status,
        affects_all = time.affects_all,
        "assessed handin"
    );

    Assessment {
        points,
        out_of,
        adjustment,
        score: adjustment.apply(points),
    }
}
