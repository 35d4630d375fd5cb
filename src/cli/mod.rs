use anyhow::Result;

mod args;
mod exit_status;

pub use args::{Arguments, Command, CommonArgs, ConsolidateCommand, PropagateCommand};
pub use exit_status::ExitStatus;

use crate::commands;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let summary = match args.command {
        Some(Command::Propagate(cmd)) => commands::propagate::run(cmd)?,
        Some(Command::Consolidate(cmd)) => commands::consolidate::run(cmd)?,
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    };

    Ok(summary.exit_status())
}
