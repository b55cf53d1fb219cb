//! humanfmt - human-readable display strings for a web client
//!
//! Turns raw seconds, byte counts and schedule descriptors into the short
//! strings shown in tables and detail pages, plus a few text and collection
//! helpers used alongside them.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod test_utils;
pub mod utils;

pub use error::{HumanizeError, Result};
pub use format::{
    FixedZone, Interval, IntervalUnit, LocalTimeConverter, Schedule, SystemLocal,
    duration_humanize, pretty_size, pretty_size_str, pretty_size_value, schedule_humanize,
    seconds_to_interval,
};
