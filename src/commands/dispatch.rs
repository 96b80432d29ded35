//! Command dispatch logic for rubric

use std::time::Instant;

use rubric_core::error::{ExitCode, Result};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<ExitCode> {
        println!("rubric {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Course grading rubrics: GML rubric files and GRD grade reports.");
        println!();
        println!("Run `rubric --help` for usage information.");
        Ok(ExitCode::Success)
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode> {
        let cli = ctx.cli;
        match self {
            Commands::Render {
                rubrics,
                assignment,
                grader,
                login,
                status,
                days_late,
                handin_time,
                output,
            } => commands::render::execute(
                cli,
                commands::render::RenderOptions {
                    rubrics,
                    assignment,
                    grader,
                    login,
                    status: *status,
                    days_late: *days_late,
                    handin_time: *handin_time,
                    output: output.as_deref(),
                },
            ),
            Commands::Normalize { rubrics, check } => {
                commands::normalize::execute(cli, rubrics, *check)
            }
            Commands::Totals { paths, assignment } => {
                commands::totals::execute(cli, paths, assignment.as_deref())
            }
            Commands::Status {
                assignment,
                handin_time,
            } => commands::status::execute(cli, assignment, *handin_time),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<ExitCode> {
    let ctx = CommandContext { cli, start };

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    debug!(elapsed = ?ctx.start.elapsed(), "command");
    result
}
