//! CLI argument parsing for rubric
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use parse::{parse_handin_time, parse_output_format, parse_time_status};
use rubric_core::format::OutputFormat;
use rubric_core::model::TimeStatus;

/// Rubric - course grading rubric tool
#[derive(Parser, Debug)]
#[command(name = "rubric")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. `debug`, `rubric_core=trace`)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a grade report from the rubrics of one handin
    Render {
        /// Rubric files (GML), one per gradable part
        #[arg(required = true)]
        rubrics: Vec<PathBuf>,

        /// Assignment configuration (TOML)
        #[arg(long, short)]
        assignment: PathBuf,

        /// Grader display name
        #[arg(long)]
        grader: String,

        /// Grader login
        #[arg(long)]
        login: String,

        /// Override the handin status recorded in the first rubric
        #[arg(long, value_parser = parse_time_status, conflicts_with = "handin_time")]
        status: Option<TimeStatus>,

        /// Days late, with --status
        #[arg(long, requires = "status")]
        days_late: Option<u32>,

        /// Classify the handin from its time (RFC 3339) instead
        #[arg(long, value_parser = parse_handin_time)]
        handin_time: Option<DateTime<Utc>>,

        /// Write the report here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Rewrite rubric files in canonical form
    Normalize {
        /// Rubric files (GML)
        #[arg(required = true)]
        rubrics: Vec<PathBuf>,

        /// Only report files that are not canonical (exit 1 if any)
        #[arg(long)]
        check: bool,
    },

    /// Print rubric and handin totals
    Totals {
        /// Rubric files, or directories searched for *.gml
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Assignment configuration, to include time adjustments
        #[arg(long, short)]
        assignment: Option<PathBuf>,
    },

    /// Classify a handin time against the assignment deadlines
    Status {
        /// Assignment configuration (TOML)
        #[arg(long, short)]
        assignment: PathBuf,

        /// Handin time (RFC 3339)
        #[arg(long, value_parser = parse_handin_time)]
        handin_time: DateTime<Utc>,
    },
}
