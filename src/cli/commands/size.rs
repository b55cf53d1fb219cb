//! humanfmt size - byte counts in binary units

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::emit_rendered;
use crate::error::Result;
use crate::format::pretty_size_str;

#[derive(Args, Debug)]
pub struct SizeArgs {
    /// Byte count; anything that is not a finite number renders as "?"
    #[arg(allow_hyphen_values = true)]
    pub bytes: String,
}

pub fn run(ctx: &AppContext, args: &SizeArgs) -> Result<()> {
    emit_rendered(ctx, &args.bytes, pretty_size_str(&args.bytes))
}
