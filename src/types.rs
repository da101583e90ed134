/// Shared serializable output types for all commands.
///
/// These are what `--json` writes to stdout (or stderr for errors). They are
/// decoupled from the internal `Outcome` / `Preset` types.
use serde::{Deserialize, Serialize};

use crate::template::{EmitError, Outcome, Preset};

/// What happened to the destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Written,
    Skipped,
}

/// Result of a write or skip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitOutput {
    /// Always `true`; a skip is not a failure.
    pub ok: bool,
    pub action: Action,
    /// Absolute path when written, the path as given when skipped.
    pub path: String,
    /// Preset name.
    pub preset: String,
    /// Bytes written, or null when skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// The human-readable status line.
    pub message: String,
}

impl EmitOutput {
    /// Build from an emitter outcome. Returns `None` for `Outcome::Shown`,
    /// whose only output is the template itself.
    #[must_use]
    pub fn from_outcome(outcome: &Outcome, preset: Preset) -> Option<Self> {
        let (action, path, bytes, message) = match outcome {
            Outcome::Shown => return None,
            Outcome::Skipped { path } => (
                Action::Skipped,
                path,
                None,
                format!(
                    "{} already exists. Use --force to overwrite or --show to preview.",
                    path.display()
                ),
            ),
            Outcome::Written { path, bytes } => (
                Action::Written,
                path,
                Some(*bytes),
                format!("Wrote {} ({}).", path.display(), preset.note()),
            ),
        };
        Some(Self {
            ok: true,
            action,
            path: path.display().to_string(),
            preset: preset.name().to_owned(),
            bytes,
            message,
        })
    }
}

/// A preset in the `--list-presets` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetOutput {
    pub name: String,
    pub description: String,
    /// Number of `KEY=VALUE` lines.
    pub keys: usize,
    /// Number of keys left empty for the user to fill in.
    pub blank: usize,
    /// The keys left empty, in template order.
    pub blank_keys: Vec<String>,
}

impl PresetOutput {
    #[must_use]
    pub fn from_preset(preset: Preset) -> Self {
        let mut keys = 0;
        let mut blank_keys = Vec::new();
        for entry in preset.entries() {
            keys += 1;
            if entry.is_blank() {
                blank_keys.push(entry.key.to_owned());
            }
        }
        Self {
            name: preset.name().to_owned(),
            description: preset.description().to_owned(),
            keys,
            blank: blank_keys.len(),
            blank_keys,
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from an `EmitError`.
    #[must_use]
    pub fn from_emit_error(err: &EmitError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
