//! Recurrence interval reduction.

use std::fmt;

use serde::Serialize;

/// Label shown for a schedule with no interval.
pub const NEVER: &str = "Never";

/// Unit a recurrence interval is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl IntervalUnit {
    /// Display label, e.g. `hour(s)`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minutes => "minute(s)",
            Self::Hours => "hour(s)",
            Self::Days => "day(s)",
            Self::Weeks => "week(s)",
        }
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A count of [`IntervalUnit`]s. The count is not rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    pub count: f64,
    pub unit: IntervalUnit,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.unit)
    }
}

/// Reduce a number of seconds to the largest unit reached by cascading
/// minutes -> hours -> days -> weeks.
///
/// Each tier is only considered when the previous one was reached, and
/// lower tiers are never revisited: 90 minutes stays `1.5 hour(s)` and
/// 10 days stays `1.4285714285714286 week(s)`.
#[must_use]
pub fn seconds_to_interval(seconds: f64) -> Interval {
    let mut unit = IntervalUnit::Minutes;
    let mut count = seconds / 60.0;

    if count >= 60.0 {
        count /= 60.0;
        unit = IntervalUnit::Hours;
    }
    if unit == IntervalUnit::Hours && count >= 24.0 {
        count /= 24.0;
        unit = IntervalUnit::Days;
    }
    if unit == IntervalUnit::Days && count >= 7.0 {
        count /= 7.0;
        unit = IntervalUnit::Weeks;
    }

    Interval { count, unit }
}
