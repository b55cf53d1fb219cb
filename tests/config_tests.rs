use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

use humanfmt::config::Config;
use humanfmt::format::{DisplayZone, FixedZone};

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn humanfmt() -> Command {
    let mut cmd = Command::cargo_bin("humanfmt").unwrap();
    cmd.env_remove("HUMANFMT_CONFIG")
        .env_remove("HUMANFMT_TIMEZONE")
        .env_remove("HUMANFMT_ROBOT")
        .env_remove("HUMANFMT_ROBOT_PRETTY");
    cmd
}

#[test]
fn default_fixture_parses() {
    let raw = std::fs::read_to_string(fixture_path("tests/fixtures/configs/default.toml")).unwrap();
    let config: Config = toml::from_str(&raw).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn custom_fixture_parses() {
    let raw = std::fs::read_to_string(fixture_path("tests/fixtures/configs/custom.toml")).unwrap();
    let config: Config = toml::from_str(&raw).unwrap();
    assert_eq!(config.display.timezone, "+09:00");
    assert_eq!(
        config.display.zone().unwrap(),
        DisplayZone::Fixed(FixedZone::east(9 * 3600).unwrap())
    );
    assert!(config.robot.is_json());
    assert!(config.robot.pretty);
}

#[test]
fn config_file_sets_zone_and_robot_mode() {
    let output = humanfmt()
        .arg("--config")
        .arg(fixture_path("tests/fixtures/configs/custom.toml"))
        .args(["schedule", "--interval", "86400", "--time", "20:00"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["output"], "Every 1 day(s) at 05:00 ");
}

#[test]
fn utc_offset_flag_beats_config() {
    let output = humanfmt()
        .arg("--config")
        .arg(fixture_path("tests/fixtures/configs/custom.toml"))
        .args(["--utc-offset", "Z", "schedule", "--interval", "86400", "--time", "20:00"])
        .output()
        .unwrap();
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["output"], "Every 1 day(s) at 20:00 ");
}

#[test]
fn invalid_config_is_rejected() {
    humanfmt()
        .arg("--config")
        .arg(fixture_path("tests/fixtures/configs/invalid.toml"))
        .args(["size", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("display.timezone"));
}

#[test]
fn missing_explicit_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    humanfmt()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["size", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn env_config_path_is_used() {
    humanfmt()
        .env("HUMANFMT_CONFIG", fixture_path("tests/fixtures/configs/custom.toml"))
        .args(["config", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn invalid_bool_env_is_rejected() {
    humanfmt()
        .env("HUMANFMT_ROBOT_PRETTY", "maybe")
        .args(["size", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HUMANFMT_ROBOT_PRETTY"));

    humanfmt()
        .env("HUMANFMT_ROBOT", "banana")
        .args(["size", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HUMANFMT_ROBOT"));
}

#[test]
fn robot_env_off_overrides_config_file() {
    humanfmt()
        .arg("--config")
        .arg(fixture_path("tests/fixtures/configs/custom.toml"))
        .env("HUMANFMT_ROBOT", "0")
        .args(["size", "2048"])
        .assert()
        .success()
        .stdout("2.000 KB\n");
}

#[test]
fn robot_env_on_enables_json() {
    let output = humanfmt()
        .env("HUMANFMT_ROBOT", "yes")
        .args(["--utc-offset=UTC", "duration", "60"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["output"], "1 minute");
}
