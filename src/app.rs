use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::format::{DisplayZone, parse_utc_offset};

pub struct AppContext {
    /// Config file that was requested explicitly, if any.
    pub config_path: Option<PathBuf>,
    pub config: Config,
    /// Timezone schedule times are shown in.
    pub zone: DisplayZone,
    pub robot_mode: bool,
    pub pretty: bool,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;

        let zone = match cli.utc_offset.as_deref() {
            Some(raw) => DisplayZone::Fixed(parse_utc_offset(raw)?),
            None => config.display.zone()?,
        };

        Ok(Self {
            config_path: cli.config.clone(),
            robot_mode: cli.robot || config.robot.is_json(),
            pretty: config.robot.pretty,
            config,
            zone,
            verbosity: cli.verbose,
        })
    }
}
