use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn humanfmt() -> Command {
    let mut cmd = Command::cargo_bin("humanfmt").unwrap();
    // Keep the developer's own config and environment out of the way
    let home = tempdir().unwrap().keep();
    cmd.env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("HUMANFMT_CONFIG")
        .env_remove("HUMANFMT_TIMEZONE")
        .env_remove("HUMANFMT_ROBOT")
        .env_remove("HUMANFMT_ROBOT_PRETTY")
        .env_remove("RUST_LOG");
    cmd
}

fn robot_data(output: &[u8]) -> Value {
    let json: Value = serde_json::from_slice(output).unwrap();
    assert_eq!(json["status"], "ok");
    json["data"].clone()
}

#[test]
fn test_cli_help() {
    humanfmt()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    humanfmt()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_interval() {
    humanfmt()
        .args(["interval", "5400"])
        .assert()
        .success()
        .stdout("1.5 hour(s)\n");
}

#[test]
fn test_interval_robot() {
    let output = humanfmt()
        .args(["--robot", "interval", "604800"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let data = robot_data(&output.stdout);
    assert_eq!(data["count"], 1.0);
    assert_eq!(data["unit"], "week(s)");
    assert_eq!(data["output"], "1 week(s)");
}

#[test]
fn test_duration() {
    humanfmt().args(["duration", "70"]).assert().success().stdout("1 minutes\n");
    humanfmt().args(["duration", "3600"]).assert().success().stdout("1 hour\n");
    humanfmt().arg("duration").assert().success().stdout("-\n");
}

#[test]
fn test_size() {
    humanfmt().args(["size", "1024"]).assert().success().stdout("1.000 KB\n");
    humanfmt().args(["size", "abc"]).assert().success().stdout("?\n");
    humanfmt().args(["size", "-5"]).assert().success().stdout("-5.000 bytes\n");
}

#[test]
fn test_schedule_fields() {
    humanfmt()
        .args([
            "--utc-offset",
            "+02:00",
            "schedule",
            "--interval",
            "86400",
            "--time",
            "22:30",
            "--day-of-week",
            "Monday",
        ])
        .assert()
        .success()
        .stdout("Every 1 day(s) at 00:30 on Monday\n");
}

#[test]
fn test_schedule_json() {
    let output = humanfmt()
        .args([
            "--robot",
            "--utc-offset=UTC",
            "schedule",
            "--json",
            r#"{"interval": 3600, "time": null, "day_of_week": "Friday"}"#,
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let data = robot_data(&output.stdout);
    assert_eq!(data["output"], "Every 1 hour(s) on Friday");
    assert_eq!(data["input"]["interval"], 3600.0);
}

#[test]
fn test_schedule_never() {
    humanfmt()
        .args(["schedule", "--interval", "0", "--time", "10:00"])
        .assert()
        .success()
        .stdout("Never\n");
}

#[test]
fn test_schedule_bad_time_fails() {
    humanfmt()
        .args(["--utc-offset=UTC", "schedule", "--interval", "60", "--time", "25:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid schedule time"));
}

#[test]
fn test_schedule_bad_time_robot_error() {
    let output = humanfmt()
        .args(["--robot", "--utc-offset=UTC", "schedule", "--interval", "60", "--time", "x"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"]["error"]["code"], "invalid_time");
}

#[test]
fn test_bad_utc_offset_fails() {
    humanfmt()
        .args(["--utc-offset", "nowhere", "size", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid UTC offset"));
}

#[test]
fn test_text_helpers() {
    humanfmt()
        .args(["text", "human", "query_runner_type"])
        .assert()
        .success()
        .stdout("Query Runner Type\n");
    humanfmt()
        .args(["text", "capitalize", "hELLO"])
        .assert()
        .success()
        .stdout("Hello\n");
}

#[test]
fn test_timezone_from_env() {
    humanfmt()
        .env("HUMANFMT_TIMEZONE", "-05:00")
        .args(["schedule", "--interval", "3600", "--time", "03:00"])
        .assert()
        .success()
        .stdout("Every 1 hour(s) at 22:00 \n");
}

#[test]
fn test_schedule_infinite_interval_is_never() {
    humanfmt()
        .args(["schedule", "--interval", "inf", "--day-of-week", "Monday"])
        .assert()
        .success()
        .stdout("Never\n");
}

#[test]
fn test_size_negative_zero() {
    humanfmt().args(["size", "-0"]).assert().success().stdout("0.000 bytes\n");
}
