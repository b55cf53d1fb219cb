//! Display formatters for intervals, durations, schedules and sizes.
//!
//! Everything here is a pure function of its input, except that schedule
//! times depend on the [`LocalTimeConverter`] passed in.

pub mod duration;
pub mod interval;
pub mod local_time;
pub mod schedule;
pub mod size;

pub use duration::duration_humanize;
pub use interval::{Interval, IntervalUnit, NEVER, seconds_to_interval};
pub use local_time::{
    DisplayZone, FixedZone, LocalTimeConverter, SystemLocal, parse_utc_offset,
};
pub use schedule::{Schedule, parse_schedule_time, schedule_humanize};
pub use size::{
    UNKNOWN_SIZE, parse_finite_str, parse_finite_value, pretty_size, pretty_size_str,
    pretty_size_value,
};
