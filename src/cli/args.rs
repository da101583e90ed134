/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::Parser;

use crate::template::{DEFAULT_OUTPUT, EmitOptions, Preset};

/// envgen: generate a .env template with password fields left empty.
#[derive(Debug, Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(
    name = "envgen",
    about = "Generate .env template (passwords left empty)",
    version
)]
pub struct Cli {
    /// Output file path.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Overwrite existing file.
    #[arg(short, long)]
    pub force: bool,

    /// Print template to stdout instead of writing.
    #[arg(short, long)]
    pub show: bool,

    /// Template to emit.
    #[arg(short, long, value_name = "NAME", default_value = "full")]
    pub preset: Preset,

    /// List available presets and exit.
    #[arg(long)]
    pub list_presets: bool,

    /// Print status messages and errors as JSON. Ignored by --show.
    #[arg(long)]
    pub json: bool,

    /// Print debug logs to stderr (`RUST_LOG` takes precedence).
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The emitter options selected on the command line.
    #[must_use]
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            output: self.output.clone(),
            force: self.force,
            show: self.show,
            preset: self.preset,
        }
    }
}
