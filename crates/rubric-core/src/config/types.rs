//! Configuration type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{GradeUnits, LatePolicy};
use crate::policy::TimeInformation;

/// Assignment configuration (`assignment.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentConfig {
    /// Assignment display name
    pub name: String,

    /// Assignment ordinal
    #[serde(default)]
    pub number: i64,

    /// Late policy and deadline values
    #[serde(default)]
    pub time: TimeConfig,
}

/// Late policy, units and deadlines for an assignment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeConfig {
    /// How late handins are treated
    #[serde(default)]
    pub policy: LatePolicy,

    /// Whether deadline values are points or percentages
    #[serde(default)]
    pub units: GradeUnits,

    /// Apply the adjustment to the whole assignment, shared sources included
    #[serde(default)]
    pub affects_all: bool,

    /// Early deadline (multiple-deadlines policy)
    #[serde(default)]
    pub early: Deadline,

    /// On-time deadline; its value is the per-day amount under daily deduction
    #[serde(default)]
    pub ontime: Deadline,

    /// Late deadline; handins after it are non-compliant
    #[serde(default)]
    pub late: Deadline,
}

/// A deadline and the value attached to meeting it
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Deadline {
    /// Deadline instant (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,

    /// Bonus, penalty or per-day amount
    #[serde(default)]
    pub value: f64,
}

impl TimeConfig {
    /// The early/on-time/late values consumed by the policy calculator
    pub fn information(&self) -> TimeInformation {
        TimeInformation {
            early_value: self.early.value,
            ontime_value: self.ontime.value,
            late_value: self.late.value,
        }
    }

    /// Set the early/on-time/late values, keeping deadline dates
    pub fn with_values(mut self, early: f64, ontime: f64, late: f64) -> Self {
        self.early.value = early;
        self.ontime.value = ontime;
        self.late.value = late;
        self
    }
}
