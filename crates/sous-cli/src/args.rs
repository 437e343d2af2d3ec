//! Command-line arguments using clap's derive API.
//!
//! Clap-specific types stay in this module and convert into core types with
//! `From`, so `sous-core` never depends on the CLI framework.

use std::{fmt, path::PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use sous_core::LeavePolicy;

/// Interactive recipe walkthrough
///
/// Sous walks you through a recipe in two stages. First you check off every
/// ingredient; once all are gathered, cooking mode steps through the
/// instructions one at a time, with a countdown timer for every timed step.
#[derive(Parser)]
#[command(version, about, name = "sous")]
pub struct Args {
    /// Recipe JSON file. Defaults to $XDG_DATA_HOME/sous/recipe.json, or the
    /// built-in Margherita pizza when that file does not exist
    #[arg(long, global = true)]
    pub recipe: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Milliseconds between timer ticks
    #[arg(
        long,
        global = true,
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,

    /// What leaving cooking mode does to your progress
    #[arg(long, global = true, value_enum, default_value_t = LeavePolicyArg::Keep)]
    pub on_leave: LeavePolicyArg,

    /// Do not ring the terminal bell when a timer finishes
    #[arg(long, global = true)]
    pub no_notify: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, `cook` starts.
#[derive(Subcommand, Default)]
pub enum Commands {
    /// Start the interactive walkthrough
    #[default]
    #[command(alias = "c")]
    Cook,
    /// Print the recipe overview
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Validate a recipe file without cooking it
    Check(CheckArgs),
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    /// Print the recipe as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

#[derive(ClapArgs)]
pub struct CheckArgs {
    /// Recipe file to validate
    #[arg(help = "Path to a recipe JSON file")]
    pub file: PathBuf,
}

/// Command-line representation of [`LeavePolicy`]
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LeavePolicyArg {
    /// Keep checked ingredients and completed steps
    Keep,
    /// Start over with an empty checklist and no completed steps
    Reset,
}

impl From<LeavePolicyArg> for LeavePolicy {
    fn from(val: LeavePolicyArg) -> Self {
        match val {
            LeavePolicyArg::Keep => LeavePolicy::KeepProgress,
            LeavePolicyArg::Reset => LeavePolicy::FreshSession,
        }
    }
}

impl fmt::Display for LeavePolicyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeavePolicyArg::Keep => write!(f, "keep"),
            LeavePolicyArg::Reset => write!(f, "reset"),
        }
    }
}
