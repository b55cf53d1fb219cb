//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod output;

pub use commands::Commands;

/// humanfmt - human-readable intervals, durations, schedules and sizes
#[derive(Parser, Debug)]
#[command(name = "humanfmt", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit JSON envelopes on stdout instead of plain text
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file to use instead of the global one
    #[arg(long, global = true, env = "HUMANFMT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show schedule times at this UTC offset (e.g. +05:30) instead of the
    /// configured timezone
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub utc_offset: Option<String>,
}
