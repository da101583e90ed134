#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! envgen: generate a .env template with password fields left empty.

mod cli;
mod commands;
mod template;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli::logging::init(cli.debug) {
        eprintln!("warning: {err}");
    }

    let ctx = OutputCtx::new(cli.json, cli.debug);

    match commands::dispatch(&cli, &ctx) {
        Ok(()) => {}
        Err(err) => {
            tracing::debug!(error = ?err, "emit failed");
            let error_output = ErrorOutput::from_emit_error(&err);
            write_error(&error_output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}
