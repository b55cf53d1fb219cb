use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::AppContext;
use crate::error::{HumanizeError, Result};

#[derive(Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    Error { code: String, message: String },
}

/// Input and rendered output of a single formatter call.
#[derive(Debug, Serialize)]
pub struct Rendered<I: Serialize> {
    pub input: I,
    pub output: String,
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    RobotResponse {
        status: RobotStatus::Ok,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
    }
}

pub fn robot_error(
    code: impl Into<String>,
    message: impl Into<String>,
) -> RobotResponse<serde_json::Value> {
    RobotResponse {
        status: RobotStatus::Error {
            code: code.into(),
            message: message.into(),
        },
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data: serde_json::Value::Null,
    }
}

pub fn emit_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(HumanizeError::from)?;
    println!("{payload}");
    Ok(())
}

/// Print a formatter result: the bare string for humans, an envelope for robots.
pub fn emit_rendered<I: Serialize>(ctx: &AppContext, input: I, output: String) -> Result<()> {
    if ctx.robot_mode {
        emit_json(&robot_ok(Rendered { input, output }), ctx.pretty)
    } else {
        println!("{output}");
        Ok(())
    }
}
