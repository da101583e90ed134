/// `--list-presets`: list the built-in templates.
use crate::cli::OutputCtx;
use crate::cli::output::write_presets;
use crate::template::Preset;
use crate::types::PresetOutput;

/// Run `envgen --list-presets`. Never touches the filesystem.
pub fn run(ctx: &OutputCtx) {
    let presets: Vec<PresetOutput> = Preset::ALL.into_iter().map(PresetOutput::from_preset).collect();
    write_presets(&presets, ctx);
}
