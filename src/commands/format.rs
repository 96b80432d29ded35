//! Format output dispatch helpers

/// Dispatch output by format. The json arm returns a `Result`, the human
/// arm runs for its side effects.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => { print_json(&value) },
///     human => { println!("done"); }
/// )?;
/// ```
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block) => {
        match $format {
            rubric_core::format::OutputFormat::Json => $json,
            rubric_core::format::OutputFormat::Human => {
                $human;
                Ok(())
            }
        }
    };
}

pub(crate) use output_by_format_result;

/// Pretty-print a JSON value to stdout
pub fn print_json(value: &serde_json::Value) -> rubric_core::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
