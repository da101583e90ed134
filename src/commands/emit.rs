/// Default command: show or write the selected template.
use std::io;

use crate::cli::{Cli, OutputCtx};
use crate::cli::output::write_status;
use crate::template::{EmitError, emit};
use crate::types::EmitOutput;

/// Run `envgen [-o PATH] [-f] [-s] [-p PRESET]`.
///
/// Exits successfully when the destination exists and `--force` is absent;
/// the skip is reported, not raised.
///
/// # Errors
///
/// Returns `EmitError` if writing to stdout or the destination fails.
pub fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), EmitError> {
    let opts = cli.emit_options();

    let t_emit = ctx.timer("emit");
    let outcome = emit(&opts, &mut io::stdout().lock())?;
    drop(t_emit);

    if let Some(status) = EmitOutput::from_outcome(&outcome, opts.preset) {
        write_status(&status, ctx);
    }
    Ok(())
}
