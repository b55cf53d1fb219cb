//! Refresh schedule display.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::interval::{NEVER, seconds_to_interval};
use super::local_time::LocalTimeConverter;
use crate::error::{HumanizeError, Result};

/// A recurring job's cadence as the API returns it.
///
/// `time` is a UTC wall-clock `HH:MM`; `interval` is in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub interval: Option<f64>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub day_of_week: Option<String>,
}

impl Schedule {
    #[must_use]
    pub fn every(seconds: f64) -> Self {
        Self {
            interval: Some(seconds),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn at(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    #[must_use]
    pub fn on(mut self, day_of_week: impl Into<String>) -> Self {
        self.day_of_week = Some(day_of_week.into());
        self
    }

    /// Interval in seconds, if the schedule recurs at all. Zero and
    /// non-finite intervals never fire.
    fn recurrence(&self) -> Option<f64> {
        self.interval.filter(|seconds| *seconds != 0.0 && seconds.is_finite())
    }
}

/// Render a schedule like `Every 1 day(s) at 09:30 on Monday`.
///
/// Schedules without a usable interval (absent, zero or non-finite) are
/// `Never`. The interval count is printed unrounded. The time of day is
/// converted from UTC with `converter`. Spacing is literal: a trailing space
/// remains when there is no day of week.
pub fn schedule_humanize<C>(schedule: &Schedule, converter: &C) -> Result<String>
where
    C: LocalTimeConverter + ?Sized,
{
    let Some(seconds) = schedule.recurrence() else {
        return Ok(NEVER.to_string());
    };

    let interval = seconds_to_interval(seconds);
    let mut out = format!("Every {} {} ", interval.count, interval.unit.label());

    if let Some(time) = schedule.time.as_deref().filter(|t| !t.is_empty()) {
        let (hour, minute) = parse_schedule_time(time)?;
        let local = converter.utc_to_local(hour, minute)?;
        out.push_str(&format!("at {local} "));
    }

    if let Some(day) = schedule.day_of_week.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("on {day}"));
    }

    Ok(out)
}

/// Split `H:M` / `HH:MM` into an hour (0-23) and minute (0-59).
pub fn parse_schedule_time(raw: &str) -> Result<(u32, u32)> {
    let parsed = raw
        .split_once(':')
        .and_then(|(hour, minute)| Some((clock_field(hour, 23)?, clock_field(minute, 59)?)));

    parsed.ok_or_else(|| {
        debug!(time = raw, "rejecting malformed schedule time");
        HumanizeError::InvalidTime(raw.to_string())
    })
}

fn clock_field(raw: &str, max: u32) -> Option<u32> {
    if raw.is_empty() || raw.len() > 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok().filter(|value| *value <= max)
}
