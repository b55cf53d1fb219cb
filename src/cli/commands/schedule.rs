//! humanfmt schedule - describe a refresh schedule
//!
//! The schedule can be given field by field or as the JSON object the API
//! returns (`{"interval": 86400, "time": "09:30", "day_of_week": null}`).

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::emit_rendered;
use crate::error::{HumanizeError, Result};
use crate::format::{Schedule, schedule_humanize};

#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Interval in seconds (0 or absent means never)
    #[arg(long)]
    pub interval: Option<f64>,

    /// Time of day in UTC, HH:MM
    #[arg(long)]
    pub time: Option<String>,

    /// Day of week, e.g. Monday
    #[arg(long)]
    pub day_of_week: Option<String>,

    /// Whole schedule as a JSON object
    #[arg(long, conflicts_with_all = ["interval", "time", "day_of_week"])]
    pub json: Option<String>,
}

impl ScheduleArgs {
    fn schedule(&self) -> Result<Schedule> {
        if let Some(raw) = &self.json {
            return serde_json::from_str(raw).map_err(|err| {
                HumanizeError::ValidationFailed(format!("schedule JSON: {err}"))
            });
        }
        Ok(Schedule {
            interval: self.interval,
            time: self.time.clone(),
            day_of_week: self.day_of_week.clone(),
        })
    }
}

pub fn run(ctx: &AppContext, args: &ScheduleArgs) -> Result<()> {
    let schedule = args.schedule()?;
    debug!(?schedule, zone = %ctx.zone, "humanizing schedule");
    let output = schedule_humanize(&schedule, &ctx.zone)?;
    emit_rendered(ctx, &schedule, output)
}
