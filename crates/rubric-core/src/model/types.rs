use crate::error::{RubricError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// When a handin arrived relative to the assignment's deadlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeStatus {
    /// Before the early deadline
    Early,
    /// Before the on-time deadline
    #[default]
    OnTime,
    /// After the on-time deadline but still accepted
    Late,
    /// Non-compliant late: after every accepted deadline
    NcLate,
}

impl TimeStatus {
    /// All valid status tokens, as written in GML files
    pub const VALID_STATUSES: &'static [&'static str] = &["EARLY", "ON_TIME", "LATE", "NC_LATE"];

    /// Name used in grade reports
    pub fn pretty_name(&self) -> &'static str {
        match self {
            TimeStatus::Early => "Early",
            TimeStatus::OnTime => "On Time",
            TimeStatus::Late => "Late",
            TimeStatus::NcLate => "NC Late",
        }
    }
}

impl FromStr for TimeStatus {
    type Err = RubricError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "EARLY" => Ok(TimeStatus::Early),
            "ON_TIME" | "ONTIME" => Ok(TimeStatus::OnTime),
            "LATE" => Ok(TimeStatus::Late),
            "NC_LATE" | "NCLATE" => Ok(TimeStatus::NcLate),
            _ => Err(RubricError::unsupported(
                "time status",
                s,
                Self::VALID_STATUSES.join(", "),
            )),
        }
    }
}

impl fmt::Display for TimeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeStatus::Early => write!(f, "EARLY"),
            TimeStatus::OnTime => write!(f, "ON_TIME"),
            TimeStatus::Late => write!(f, "LATE"),
            TimeStatus::NcLate => write!(f, "NC_LATE"),
        }
    }
}

/// How an assignment treats handins after the on-time deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LatePolicy {
    /// Nothing is accepted late
    #[default]
    NoLate,
    /// A fixed amount is deducted per day late
    DailyDeduction,
    /// Early, on-time and late deadlines, each with its own value
    MultipleDeadlines,
}

impl LatePolicy {
    /// All valid late policy names
    pub const VALID_POLICIES: &'static [&'static str] =
        &["no-late", "daily-deduction", "multiple-deadlines"];
}

impl FromStr for LatePolicy {
    type Err = RubricError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "no-late" => Ok(LatePolicy::NoLate),
            "daily-deduction" => Ok(LatePolicy::DailyDeduction),
            "multiple-deadlines" => Ok(LatePolicy::MultipleDeadlines),
            _ => Err(RubricError::unsupported(
                "late policy",
                s,
                Self::VALID_POLICIES.join(", "),
            )),
        }
    }
}

impl fmt::Display for LatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatePolicy::NoLate => write!(f, "no-late"),
            LatePolicy::DailyDeduction => write!(f, "daily-deduction"),
            LatePolicy::MultipleDeadlines => write!(f, "multiple-deadlines"),
        }
    }
}

/// Unit of the early/on-time/late values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeUnits {
    /// Values are absolute points
    #[default]
    Points,
    /// Values are percentages of the out-of basis
    Percentage,
}

impl GradeUnits {
    /// Suffix used after a value in grade reports (`5%`, `5 points`)
    pub fn suffix(&self) -> &'static str {
        match self {
            GradeUnits::Points => " points",
            GradeUnits::Percentage => "%",
        }
    }
}

impl FromStr for GradeUnits {
    type Err = RubricError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "points" => Ok(GradeUnits::Points),
            "percentage" | "percent" => Ok(GradeUnits::Percentage),
            _ => Err(RubricError::unsupported(
                "grade units",
                s,
                "points, percentage",
            )),
        }
    }
}

impl fmt::Display for GradeUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeUnits::Points => write!(f, "points"),
            GradeUnits::Percentage => write!(f, "percentage"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_status_tokens() {
        for token in TimeStatus::VALID_STATUSES {
            let status: TimeStatus = token.parse().unwrap();
            assert_eq!(status.to_string(), *token);
        }
        assert_eq!("on-time".parse::<TimeStatus>().unwrap(), TimeStatus::OnTime);
        assert!("tardy".parse::<TimeStatus>().is_err());
    }

    #[test]
    fn test_late_policy_parse() {
        assert_eq!(
            "DAILY_DEDUCTION".parse::<LatePolicy>().unwrap(),
            LatePolicy::DailyDeduction
        );
        assert_eq!(
            "multiple-deadlines".parse::<LatePolicy>().unwrap(),
            LatePolicy::MultipleDeadlines
        );
        let err = "weekly".parse::<LatePolicy>().unwrap_err();
        assert!(err.to_string().contains("no-late"));
    }

    #[test]
    fn test_grade_units_suffix() {
        assert_eq!(GradeUnits::Points.suffix(), " points");
        assert_eq!(GradeUnits::Percentage.suffix(), "%");
        assert_eq!("Percentage".parse::<GradeUnits>().unwrap(), GradeUnits::Percentage);
    }
}
