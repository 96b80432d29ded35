//! `rubric status` command - classify a handin time

use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json};
use crate::commands::input::load_assignment;
use rubric_core::error::{ExitCode, Result};
use rubric_core::model::{LatePolicy, TimeStatus};
use rubric_core::policy;

/// Execute the status command
pub fn execute(cli: &Cli, assignment: &Path, handin_time: DateTime<Utc>) -> Result<ExitCode> {
    let config = load_assignment(assignment)?;
    let status = policy::classify(handin_time, &config.time);

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "assignment": config.name,
            "handin_time": handin_time.to_rfc3339(),
            "status": status.status,
            "days_late": status.days_late,
        })),
        human => {
            let counts_days = status.status == TimeStatus::Late
                && config.time.policy == LatePolicy::DailyDeduction;
            if counts_days {
                let unit = if status.days_late == 1 { "day" } else { "days" };
                println!("{} ({} {} late)", status.status, status.days_late, unit);
            } else {
                println!("{}", status.status);
            }
        }
    )?;

    Ok(ExitCode::Success)
}
