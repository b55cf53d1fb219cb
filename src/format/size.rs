//! Byte size display.

use serde_json::Value;
use tracing::trace;

const UNITS: [&str; 6] = ["bytes", "KB", "MB", "GB", "TB", "PB"];

/// Shown in place of a size that is not a finite number.
pub const UNKNOWN_SIZE: &str = "?";

/// Parse a string as a finite number. Surrounding whitespace is ignored;
/// trailing garbage, `NaN` and infinities are rejected.
#[must_use]
pub fn parse_finite_str(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Numeric value of a JSON number or numeric string.
#[must_use]
pub fn parse_finite_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|value| value.is_finite()),
        Value::String(raw) => parse_finite_str(raw),
        _ => None,
    }
}

/// Format a byte count in binary units with three decimals, e.g. `1.500 KB`.
///
/// The unit label never goes past PB: the magnitude keeps being divided by
/// 1024 but the label stays `PB`. Values below 1024 (including negatives)
/// stay in bytes.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn pretty_size(bytes: f64) -> String {
    if !bytes.is_finite() {
        trace!(bytes, "size is not finite");
        return UNKNOWN_SIZE.to_string();
    }

    // -0.0 prints as 0.000, not -0.000
    let mut value = if bytes == 0.0 { 0.0 } else { bytes };
    let mut unit = 0;
    while value >= 1024.0 {
        value /= 1024.0;
        unit += 1;
    }
    if unit >= UNITS.len() {
        trace!(bytes, unit, "size above the largest unit");
        unit = UNITS.len() - 1;
    }

    format!("{value:.3} {}", UNITS[unit])
}

/// [`pretty_size`] for raw text input; unparseable text is `?`.
#[must_use]
pub fn pretty_size_str(raw: &str) -> String {
    parse_finite_str(raw).map_or_else(
        || {
            trace!(raw, "size is not a number");
            UNKNOWN_SIZE.to_string()
        },
        pretty_size,
    )
}

/// [`pretty_size`] for an arbitrary JSON value; non-numeric values are `?`.
#[must_use]
pub fn pretty_size_value(value: &Value) -> String {
    parse_finite_value(value).map_or_else(|| UNKNOWN_SIZE.to_string(), pretty_size)
}
