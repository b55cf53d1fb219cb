//! UTC wall-clock to local time-of-day conversion.
//!
//! Schedules store their time of day in UTC. The conversion is anchored on
//! today's date so that the offset in effect right now (including DST) is
//! the one applied.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};

use crate::error::{HumanizeError, Result};

/// Converts a UTC hour and minute to a local `HH:MM` string.
pub trait LocalTimeConverter {
    fn utc_to_local(&self, hour: u32, minute: u32) -> Result<String>;
}

/// The timezone of the machine running the formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocal;

impl LocalTimeConverter for SystemLocal {
    fn utc_to_local(&self, hour: u32, minute: u32) -> Result<String> {
        convert(&Local, hour, minute)
    }
}

/// A fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedZone(FixedOffset);

impl FixedZone {
    #[must_use]
    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    /// Offset east of UTC in seconds. `None` when out of range (a day or more).
    #[must_use]
    pub fn east(seconds: i32) -> Option<Self> {
        FixedOffset::east_opt(seconds).map(Self)
    }

    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        self.0
    }
}

impl LocalTimeConverter for FixedZone {
    fn utc_to_local(&self, hour: u32, minute: u32) -> Result<String> {
        convert(&self.0, hour, minute)
    }
}

impl fmt::Display for FixedZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FixedZone {
    type Err = HumanizeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_utc_offset(s)
    }
}

/// Parse `Z`, `UTC`, `+HH`, `+HHMM` or `+HH:MM` (and the `-` forms).
pub fn parse_utc_offset(raw: &str) -> Result<FixedZone> {
    let invalid = || HumanizeError::InvalidOffset(raw.to_string());
    let trimmed = raw.trim();

    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return Ok(FixedZone::utc());
    }

    let (sign, rest) = match trimmed.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => return Err(invalid()),
    };

    let digits = rest.replace(':', "");
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.as_str(), "00"),
        4 => digits.split_at(2),
        _ => return Err(invalid()),
    };
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }

    FixedZone::east(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Which timezone schedule times are displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    #[default]
    Local,
    Fixed(FixedZone),
}

impl LocalTimeConverter for DisplayZone {
    fn utc_to_local(&self, hour: u32, minute: u32) -> Result<String> {
        match self {
            Self::Local => SystemLocal.utc_to_local(hour, minute),
            Self::Fixed(zone) => zone.utc_to_local(hour, minute),
        }
    }
}

impl FromStr for DisplayZone {
    type Err = HumanizeError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("local") {
            return Ok(Self::Local);
        }
        parse_utc_offset(s).map(Self::Fixed)
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Fixed(zone) => write!(f, "{zone}"),
        }
    }
}

fn convert<Tz>(tz: &Tz, hour: u32, minute: u32) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let utc: DateTime<Utc> = Utc::now()
        .date_naive()
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| HumanizeError::InvalidTime(format!("{hour:02}:{minute:02}")))?
        .and_utc();
    Ok(utc.with_timezone(tz).format("%H:%M").to_string())
}
