//! humanfmt config - show the effective configuration

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_json, robot_ok};
use crate::config::Config;
use crate::error::{HumanizeError, Result};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Only print where the config file is read from
    #[arg(long)]
    pub path: bool,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    let path = ctx.config_path.clone().or_else(Config::global_path);

    if ctx.robot_mode {
        return emit_json(
            &robot_ok(serde_json::json!({
                "path": path,
                "config": ctx.config,
                "zone": ctx.zone.to_string(),
            })),
            ctx.pretty,
        );
    }

    let shown_path = path.map_or_else(|| "(none)".to_string(), |p| p.display().to_string());
    if args.path {
        println!("{shown_path}");
        return Ok(());
    }

    let rendered = toml::to_string_pretty(&ctx.config)
        .map_err(|err| HumanizeError::Config(format!("serialize config: {err}")))?;
    println!("{} {}", "Config file:".bold(), shown_path);
    println!("{} {}", "Schedule zone:".bold(), ctx.zone);
    println!();
    print!("{rendered}");
    Ok(())
}
