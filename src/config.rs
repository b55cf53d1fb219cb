use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HumanizeError, Result};
use crate::format::DisplayZone;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub robot: RobotConfig,
}

impl Config {
    /// Defaults, then the global config file (or the explicit one if given),
    /// then environment overrides.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("HUMANFMT_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                HumanizeError::MissingConfig(format!("config file {} not found", path.display()))
            })?;
            config.merge_patch(patch);
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Path of the per-user config file, if the platform has a config dir.
    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("humanfmt/config.toml"))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match Self::global_path() {
            Some(path) => Self::load_patch(&path),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|err| {
            HumanizeError::Config(format!("read config {}: {err}", path.display()))
        })?;
        let patch = toml::from_str(&raw).map_err(|err| {
            HumanizeError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.display {
            self.display.merge(patch);
        }
        if let Some(patch) = patch.robot {
            self.robot.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("HUMANFMT_TIMEZONE") {
            self.display.timezone = value;
        }
        if let Some(robot) = env_bool("HUMANFMT_ROBOT")? {
            self.robot.format = if robot { "json" } else { "text" }.to_string();
        }
        if let Some(value) = env_bool("HUMANFMT_ROBOT_PRETTY")? {
            self.robot.pretty = value;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        self.display.zone()?;
        match self.robot.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(HumanizeError::Config(format!(
                "invalid robot.format {other} (expected text|json)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// `local`, `UTC`, or a fixed offset such as `+05:30`.
    pub timezone: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: "local".to_string(),
        }
    }
}

impl DisplayConfig {
    pub fn zone(&self) -> Result<DisplayZone> {
        self.timezone
            .parse()
            .map_err(|err| HumanizeError::Config(format!("display.timezone: {err}")))
    }

    fn merge(&mut self, patch: DisplayPatch) {
        if let Some(value) = patch.timezone {
            self.timezone = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotConfig {
    pub format: String,
    pub pretty: bool,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty: false,
        }
    }
}

impl RobotConfig {
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }

    fn merge(&mut self, patch: RobotPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
        if let Some(value) = patch.pretty {
            self.pretty = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub display: Option<DisplayPatch>,
    pub robot: Option<RobotPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DisplayPatch {
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RobotPatch {
    pub format: Option<String>,
    pub pretty: Option<bool>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_bool(key: &str) -> Result<Option<bool>> {
    match std::env::var(key) {
        Ok(value) => parse_bool(&value).map(Some).ok_or_else(|| {
            HumanizeError::Config(format!(
                "invalid {key} value {value} (expected 1|true|yes|on|0|false|no|off)"
            ))
        }),
        Err(_) => Ok(None),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
