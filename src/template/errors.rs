/// Errors from emitting a template.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while writing a template to disk or stdout.
///
/// An existing destination is not an error; see [`super::Outcome::Skipped`].
#[derive(Debug, Error)]
pub enum EmitError {
    /// Creating, truncating or writing the destination failed.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was written but its absolute path could not be resolved.
    #[error("Wrote '{}' but could not resolve its absolute path: {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Printing the template to stdout failed (e.g. closed pipe).
    #[error("Failed to write template to stdout: {0}")]
    Stdout(#[source] io::Error),
}

impl EmitError {
    /// Machine-readable code used in the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Write { .. } => "write_failed",
            Self::Resolve { .. } => "resolve_failed",
            Self::Stdout(_) => "stdout_failed",
        }
    }

    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Write { .. } | Self::Resolve { .. } | Self::Stdout(_) => 1,
        }
    }
}
