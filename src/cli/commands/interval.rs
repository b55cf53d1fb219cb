//! humanfmt interval - reduce seconds to minutes, hours, days or weeks

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{emit_json, robot_ok};
use crate::error::Result;
use crate::format::{Interval, seconds_to_interval};

#[derive(Args, Debug)]
pub struct IntervalArgs {
    /// Interval length in seconds
    #[arg(allow_negative_numbers = true)]
    pub seconds: f64,
}

#[derive(Serialize)]
struct IntervalReport {
    seconds: f64,
    count: f64,
    unit: &'static str,
    output: String,
}

pub fn run(ctx: &AppContext, args: &IntervalArgs) -> Result<()> {
    let interval: Interval = seconds_to_interval(args.seconds);

    if ctx.robot_mode {
        let report = IntervalReport {
            seconds: args.seconds,
            count: interval.count,
            unit: interval.unit.label(),
            output: interval.to_string(),
        };
        return emit_json(&robot_ok(report), ctx.pretty);
    }

    println!("{interval}");
    Ok(())
}
