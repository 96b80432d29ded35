//! `rubric normalize` command - rewrite rubric files in canonical form

use std::fs;
use std::path::PathBuf;

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json};
use rubric_core::error::{ExitCode, Result, RubricError};
use rubric_core::gml;
use rubric_core::store::{save_gml, LocalFiles};

/// Execute the normalize command
pub fn execute(cli: &Cli, paths: &[PathBuf], check: bool) -> Result<ExitCode> {
    let files = LocalFiles::default();
    let mut changed = Vec::new();

    for path in paths {
        let original = fs::read_to_string(path)
            .map_err(|e| RubricError::decode(path, format!("failed to read: {}", e)))?;
        let rubric = gml::decode_str(&original, path)?;
        let canonical = gml::encode(&rubric)?;

        if canonical == original {
            continue;
        }
        changed.push(path.display().to_string());

        if !check {
            let outcome = save_gml(&rubric, path, &files)?;
            if let Some(e) = outcome.sanitize_error {
                eprintln!("warning: {}", e);
            }
        }
    }

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "checked": paths.len(),
            "check_only": check,
            "changed": changed,
        })),
        human => {
            if !cli.quiet {
                let verb = if check { "Not canonical" } else { "Normalized" };
                for path in &changed {
                    println!("{}: {}", verb, path);
                }
                if changed.is_empty() {
                    println!("All {} rubric(s) canonical", paths.len());
                }
            }
        }
    )?;

    if check && !changed.is_empty() {
        Ok(ExitCode::Failure)
    } else {
        Ok(ExitCode::Success)
    }
}
