//! `rubric render` command - write the grade report for a handin

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json};
use crate::commands::input::{load_assignment, load_rubrics};
use rubric_core::bail_usage;
use rubric_core::error::{ExitCode, Result};
use rubric_core::grd::{self, Grader, ReportContext};
use rubric_core::model::TimeStatus;
use rubric_core::policy::{self, HandinStatus};
use rubric_core::store::{save_grd, LocalFiles};

pub struct RenderOptions<'a> {
    pub rubrics: &'a [PathBuf],
    pub assignment: &'a Path,
    pub grader: &'a str,
    pub login: &'a str,
    pub status: Option<TimeStatus>,
    pub days_late: Option<u32>,
    pub handin_time: Option<DateTime<Utc>>,
    pub output: Option<&'a Path>,
}

/// Execute the render command
pub fn execute(cli: &Cli, options: RenderOptions<'_>) -> Result<ExitCode> {
    let rubrics = load_rubrics(options.rubrics)?;
    let Some(first) = rubrics.first() else {
        bail_usage!("at least one rubric is required");
    };
    let assignment = load_assignment(options.assignment)?;

    let status = match (options.handin_time, options.status) {
        (Some(time), _) => policy::classify(time, &assignment.time),
        (None, Some(status)) => HandinStatus::new(status, options.days_late.unwrap_or(0)),
        (None, None) => HandinStatus::of(first),
    };
    tracing::debug!(status = %status.status, days_late = status.days_late, "handin status");

    let grader = Grader::new(options.grader, options.login);
    let ctx = ReportContext {
        grader: &grader,
        status,
        time: &assignment.time,
    };

    let Some(path) = options.output else {
        let report = grd::render(&rubrics, &ctx)?;
        output_by_format_result!(cli.format,
            json => print_json(&json!({
                "status": status.status,
                "days_late": status.days_late,
                "report": report,
            })),
            human => { print!("{}", report); }
        )?;
        return Ok(ExitCode::Success);
    };

    let outcome = save_grd(&rubrics, &ctx, path, &LocalFiles::default())?;
    let warning = outcome.sanitize_error.as_ref().map(|e| e.to_string());

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "path": outcome.path.display().to_string(),
            "status": status.status,
            "days_late": status.days_late,
            "warning": warning,
        })),
        human => {
            if let Some(warning) = &warning {
                eprintln!("warning: {}", warning);
            }
            if !cli.quiet {
                println!("Wrote {}", outcome.path.display());
            }
        }
    )?;

    Ok(ExitCode::Success)
}
