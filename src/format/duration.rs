//! Run duration display.

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;

/// Placeholder shown when there is no duration to display.
pub const NO_DURATION: &str = "-";

/// Render a duration in seconds as a coarse, single-unit string.
///
/// Branches are checked in order and the first match wins:
///
/// | duration            | output         |
/// |---------------------|----------------|
/// | absent              | `-`            |
/// | `< 60`              | `N seconds`    |
/// | `> 86400`           | `N days`       |
/// | `== 3600`           | `1 hour`       |
/// | `>= 3600`           | `N hours`      |
/// | `== 60`             | `1 minute`     |
/// | otherwise           | `N minutes`    |
///
/// Only exactly 60 and 3600 get the singular word; `70` renders as
/// `1 minutes` and `86400` as `24 hours`. Counts round half away from zero.
/// Non-finite input is treated as absent.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn duration_humanize(duration: Option<f64>) -> String {
    let Some(duration) = duration.filter(|value| value.is_finite()) else {
        return NO_DURATION.to_string();
    };

    if duration < MINUTE {
        format!("{} seconds", whole(duration))
    } else if duration > DAY {
        format!("{} days", whole(duration / DAY))
    } else if duration == HOUR {
        "1 hour".to_string()
    } else if duration >= HOUR {
        format!("{} hours", whole(duration / HOUR))
    } else if duration == MINUTE {
        "1 minute".to_string()
    } else {
        format!("{} minutes", whole(duration / MINUTE))
    }
}

#[allow(clippy::float_cmp)]
fn whole(value: f64) -> String {
    let rounded = value.round();
    // -0.4 rounds to -0.0, which should print as 0
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}
