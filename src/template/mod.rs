/// Template domain layer: built-in presets and the emitter.
pub mod emitter;
pub mod errors;
pub mod presets;

pub use emitter::{DEFAULT_OUTPUT, EmitOptions, Outcome, emit};
pub use errors::EmitError;
pub use presets::Preset;
