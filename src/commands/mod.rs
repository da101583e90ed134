/// Command dispatch: routes parsed CLI flags to their implementations.
pub mod emit;
pub mod presets;

use crate::cli::{Cli, OutputCtx};
use crate::template::EmitError;

/// Dispatch parsed flags to their handler. `--list-presets` wins over emitting.
///
/// # Errors
///
/// Returns `EmitError` on any emit failure.
pub fn dispatch(cli: &Cli, ctx: &OutputCtx) -> Result<(), EmitError> {
    if cli.list_presets {
        presets::run(ctx);
        return Ok(());
    }
    emit::run(cli, ctx)
}
