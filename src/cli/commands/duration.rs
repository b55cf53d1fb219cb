//! humanfmt duration - coarse single-unit durations

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::emit_rendered;
use crate::error::Result;
use crate::format::duration_humanize;

#[derive(Args, Debug)]
pub struct DurationArgs {
    /// Duration in seconds; omit to render the "no duration" placeholder
    #[arg(allow_negative_numbers = true)]
    pub seconds: Option<f64>,
}

pub fn run(ctx: &AppContext, args: &DurationArgs) -> Result<()> {
    emit_rendered(ctx, args.seconds, duration_humanize(args.seconds))
}
