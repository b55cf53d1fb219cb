//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod config;
pub mod duration;
pub mod interval;
pub mod schedule;
pub mod size;
pub mod text;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reduce seconds to a recurrence interval
    Interval(interval::IntervalArgs),

    /// Humanize a duration in seconds
    Duration(duration::DurationArgs),

    /// Describe a refresh schedule
    Schedule(schedule::ScheduleArgs),

    /// Format a byte count
    Size(size::SizeArgs),

    /// Text helpers for labels
    Text(text::TextArgs),

    /// Show the effective configuration
    Config(config::ConfigArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Interval(args) => interval::run(ctx, args),
        Commands::Duration(args) => duration::run(ctx, args),
        Commands::Schedule(args) => schedule::run(ctx, args),
        Commands::Size(args) => size::run(ctx, args),
        Commands::Text(args) => text::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
    }
}
