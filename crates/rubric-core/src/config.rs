//! Assignment configuration
//!
//! The late policy, grade units and deadline values of an assignment live
//! in a TOML file next to its rubrics.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, RubricError};

pub use types::{AssignmentConfig, Deadline, TimeConfig};

/// Conventional configuration filename
pub const ASSIGNMENT_FILE: &str = "assignment.toml";

impl AssignmentConfig {
    /// Load configuration from a file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AssignmentConfig = content.parse()?;
        tracing::debug!(policy = %config.time.policy, units = %config.time.units, "loaded assignment config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RubricError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl std::str::FromStr for AssignmentConfig {
    type Err = RubricError;

    fn from_str(s: &str) -> Result<Self> {
        let config: AssignmentConfig = toml::from_str(s)?;
        if config.time.ontime.value < 0.0
            && config.time.policy == crate::model::LatePolicy::DailyDeduction
        {
            crate::bail_invalid!(
                "daily deduction amount (must not be negative)",
                config.time.ontime.value
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GradeUnits, LatePolicy};
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
name = "Lab 3"
number = 3

[time]
policy = "multiple-deadlines"
units = "percentage"
affects_all = true

[time.early]
date = "2026-02-01T23:59:00Z"
value = 5.0

[time.ontime]
date = "2026-02-03T23:59:00Z"

[time.late]
value = -10.0
"#;

    #[test]
    fn test_default_config() {
        let config = AssignmentConfig::default();
        assert_eq!(config.time.policy, LatePolicy::NoLate);
        assert_eq!(config.time.units, GradeUnits::Points);
        assert!(!config.time.affects_all);
        assert!(config.time.ontime.date.is_none());
    }

    #[test]
    fn test_parse_sample() {
        let config: AssignmentConfig = SAMPLE.parse().unwrap();
        assert_eq!(config.name, "Lab 3");
        assert_eq!(config.number, 3);
        assert_eq!(config.time.policy, LatePolicy::MultipleDeadlines);
        assert_eq!(config.time.units, GradeUnits::Percentage);
        assert!(config.time.affects_all);
        assert!(config.time.early.date.is_some());
        assert!(config.time.late.date.is_none());

        let info = config.time.information();
        assert_eq!(info.early_value, 5.0);
        assert_eq!(info.ontime_value, 0.0);
        assert_eq!(info.late_value, -10.0);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let err = "name = \"x\"\n[time]\npolicy = \"weekly\"\n"
            .parse::<AssignmentConfig>()
            .unwrap_err();
        assert!(matches!(err, RubricError::Toml(_)));
    }

    #[test]
    fn test_negative_daily_amount_is_rejected() {
        let err = "name = \"x\"\n[time]\npolicy = \"daily-deduction\"\n[time.ontime]\nvalue = -2.0\n"
            .parse::<AssignmentConfig>()
            .unwrap_err();
        assert!(matches!(err, RubricError::InvalidValue { .. }));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(ASSIGNMENT_FILE);

        let config: AssignmentConfig = SAMPLE.parse().unwrap();
        config.save(&path).unwrap();

        let loaded = AssignmentConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
