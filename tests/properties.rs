use proptest::prelude::*;

use humanfmt::format::{
    FixedZone, IntervalUnit, Schedule, duration_humanize, pretty_size, pretty_size_str,
    schedule_humanize, seconds_to_interval,
};

const UNITS: [&str; 6] = ["bytes", "KB", "MB", "GB", "TB", "PB"];

proptest! {
    #[test]
    fn formatters_are_idempotent(
        seconds in 0.0f64..1e9,
        bytes in -1e20f64..1e20,
        raw in ".*",
        time in "[0-9]{1,2}:[0-9]{1,2}",
    ) {
        prop_assert_eq!(seconds_to_interval(seconds), seconds_to_interval(seconds));
        prop_assert_eq!(duration_humanize(Some(seconds)), duration_humanize(Some(seconds)));
        prop_assert_eq!(pretty_size(bytes), pretty_size(bytes));
        prop_assert_eq!(pretty_size_str(&raw), pretty_size_str(&raw));

        let zone = FixedZone::east(-3 * 3600).unwrap();
        let schedule = Schedule::every(seconds).at(time).on("Tuesday");
        let first = schedule_humanize(&schedule, &zone).map_err(|err| err.to_string());
        let second = schedule_humanize(&schedule, &zone).map_err(|err| err.to_string());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn interval_count_times_unit_is_seconds(seconds in 0.0f64..1e9) {
        let interval = seconds_to_interval(seconds);
        let unit_seconds = match interval.unit {
            IntervalUnit::Minutes => 60.0,
            IntervalUnit::Hours => 3600.0,
            IntervalUnit::Days => 86_400.0,
            IntervalUnit::Weeks => 604_800.0,
        };
        let restored = interval.count * unit_seconds;
        prop_assert!((restored - seconds).abs() <= seconds.max(1.0) * 1e-9);
    }

    #[test]
    fn size_is_total(raw in ".*") {
        let output = pretty_size_str(&raw);
        prop_assert!(output == "?" || UNITS.iter().any(|unit| output.ends_with(unit)));
    }

    #[test]
    fn non_negative_sizes_have_three_decimals(bytes in 0.0f64..1e30) {
        let output = pretty_size(bytes);
        let (number, unit) = output.split_once(' ').unwrap();
        prop_assert!(UNITS.contains(&unit));
        let (_, decimals) = number.split_once('.').unwrap();
        prop_assert_eq!(decimals.len(), 3);
        if unit != "PB" {
            prop_assert!(number.parse::<f64>().unwrap() < 1024.0);
        }
    }

    #[test]
    fn durations_never_panic(duration in proptest::option::of(any::<f64>())) {
        let output = duration_humanize(duration);
        prop_assert!(!output.is_empty());
    }

    #[test]
    fn schedule_shape(
        seconds in 60.0f64..1e8,
        hour in 0u32..24,
        minute in 0u32..60,
        day in "[A-Z][a-z]{2,8}",
    ) {
        let schedule = Schedule::every(seconds)
            .at(format!("{hour:02}:{minute:02}"))
            .on(day.clone());
        let text = schedule_humanize(&schedule, &FixedZone::utc()).unwrap();
        let expected_at = format!(" at {hour:02}:{minute:02} on ");
        let expected_suffix = format!("on {day}");
        prop_assert!(text.starts_with("Every "));
        prop_assert!(text.contains(&expected_at));
        prop_assert!(text.ends_with(&expected_suffix));
    }
}
