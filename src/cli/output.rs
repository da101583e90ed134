/// Output formatting: status lines, preset table, JSON envelopes.
use std::io::Write;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use crate::types::{EmitOutput, ErrorOutput, PresetOutput};

/// Output context passed to all formatters.
pub struct OutputCtx {
    /// Emit JSON instead of plain text.
    pub json: bool,
    /// When true, timers report elapsed time as debug events.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(json: bool, debug: bool) -> Self {
        Self { json, debug }
    }

    /// Start a named debug timer. Reports elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Write / skip status ---

/// Write the status of a write or skip to stdout.
pub fn write_status(status: &EmitOutput, ctx: &OutputCtx) {
    if ctx.json {
        print_json(status);
    } else {
        println!("{}", status.message);
    }
}

// --- Presets ---

/// Write the preset listing to stdout.
pub fn write_presets(presets: &[PresetOutput], ctx: &OutputCtx) {
    if ctx.json {
        print_json(presets);
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["NAME", "KEYS", "BLANK", "DESCRIPTION"]);
    for p in presets {
        table.add_row([
            p.name.as_str(),
            &p.keys.to_string(),
            &p.blank.to_string(),
            p.description.as_str(),
        ]);
    }
    println!("{table}");
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, json: bool) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    if json {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {}", err.error.message);
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            tracing::debug!(label = self.label, "elapsed {ms:.2}ms");
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
