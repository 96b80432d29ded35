//! `rubric totals` command - print rubric and handin totals

use std::path::{Path, PathBuf};

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json};
use crate::commands::input::{collect_gml, load_assignment};
use rubric_core::error::{ExitCode, Result};
use rubric_core::store::load_gml;
use rubric_core::text::number_text;

/// Execute the totals command
pub fn execute(cli: &Cli, paths: &[PathBuf], assignment: Option<&Path>) -> Result<ExitCode> {
    let time = match assignment {
        Some(path) => Some(load_assignment(path)?.time),
        None => None,
    };

    let mut rows = Vec::new();
    for path in collect_gml(paths) {
        let rubric = load_gml(&path)?;
        let score = time.as_ref().map(|t| rubric.total_handin_score(t));
        rows.push(json!({
            "path": path.display().to_string(),
            "name": rubric.name,
            "account": rubric.student.account,
            "status": rubric.status,
            "rubric_points": rubric.total_rubric_points(),
            "rubric_out_of": rubric.total_rubric_out_of(),
            "handin_points": rubric.total_handin_points(),
            "handin_out_of": rubric.total_handin_out_of(),
            "handin_score": score,
        }));
    }

    output_by_format_result!(cli.format,
        json => print_json(&json!({ "rubrics": rows })),
        human => {
            if rows.is_empty() && !cli.quiet {
                println!("No rubrics found");
            }
            for row in &rows {
                let number = |key: &str| row[key].as_f64().map(number_text).unwrap_or_default();
                let mut line = format!(
                    "{}  {}/{}  handin {}/{}",
                    row["path"].as_str().unwrap_or_default(),
                    number("rubric_points"),
                    number("rubric_out_of"),
                    number("handin_points"),
                    number("handin_out_of"),
                );
                if row["handin_score"].is_number() {
                    line.push_str(&format!("  score {}", number("handin_score")));
                }
                println!("{}", line);
            }
        }
    )?;

    Ok(ExitCode::Success)
}
