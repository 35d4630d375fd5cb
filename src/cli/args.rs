//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `propagate`: Fill missing translation keys from the reference locale
//! - `consolidate`: Move drifted byVolume groups to their canonical
//!   position and inject the dimension labels
//!
//! Both commands run the full migration when invoked with no further
//! arguments; the flags only override config defaults or switch to a
//! dry run.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Locales root directory (overrides config file)
    #[arg(long)]
    pub locales_root: Option<PathBuf>,

    /// Reference locale code (overrides config file)
    #[arg(long)]
    pub reference_locale: Option<String>,

    /// Report what would change without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct PropagateCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ConsolidateCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fill keys missing from target locales out of the reference locale file
    Propagate(PropagateCommand),
    /// Consolidate drifted byVolume groups and inject dimension labels
    Consolidate(ConsolidateCommand),
}
