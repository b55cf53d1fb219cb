//! humanfmt text - label helpers

use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::cli::output::emit_rendered;
use crate::error::Result;
use crate::utils::{capitalize, to_human};

#[derive(Args, Debug)]
pub struct TextArgs {
    #[command(subcommand)]
    pub command: TextCommand,
}

#[derive(Subcommand, Debug)]
pub enum TextCommand {
    /// `snake_case_name` -> `Snake Case Name`
    Human {
        text: String,
    },

    /// Uppercase the first letter, lowercase the rest
    Capitalize {
        text: String,
    },
}

pub fn run(ctx: &AppContext, args: &TextArgs) -> Result<()> {
    match &args.command {
        TextCommand::Human { text } => emit_rendered(ctx, text, to_human(text)),
        TextCommand::Capitalize { text } => {
            let output = capitalize(Some(text.as_str())).unwrap_or_default();
            emit_rendered(ctx, text, output)
        }
    }
}
