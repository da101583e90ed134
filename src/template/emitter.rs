/// The emitter: print a template, or write it unless the destination exists.
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use super::errors::EmitError;
use super::presets::Preset;

/// Default destination when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = ".env";

/// Options for a single [`emit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    pub output: PathBuf,
    pub force: bool,
    pub show: bool,
    pub preset: Preset,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            force: false,
            show: false,
            preset: Preset::default(),
        }
    }
}

/// What [`emit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The template went to stdout; the filesystem was not touched.
    Shown,
    /// The destination already existed and `force` was not set. `path` is
    /// the given path with `.` segments and repeated separators removed.
    Skipped { path: PathBuf },
    /// The template was written. `path` is absolute.
    Written { path: PathBuf, bytes: usize },
}

/// Emit `opts.preset` according to `opts`.
///
/// `show` wins over everything else and writes the template to `stdout`
/// verbatim. Otherwise an existing destination is left untouched unless
/// `force` is set.
///
/// # Errors
///
/// Returns `EmitError` if stdout, the destination file, or resolving its
/// absolute path fails. Nothing is retried.
pub fn emit<W: Write>(opts: &EmitOptions, stdout: &mut W) -> Result<Outcome, EmitError> {
    let template = opts.preset.template();
    debug!(preset = opts.preset.name(), show = opts.show, force = opts.force, "emit");

    if opts.show {
        stdout
            .write_all(template.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(EmitError::Stdout)?;
        return Ok(Outcome::Shown);
    }

    if opts.output.exists() && !opts.force {
        debug!(path = %opts.output.display(), "destination exists, skipping");
        return Ok(Outcome::Skipped {
            path: normalize(&opts.output),
        });
    }

    let path = write_template(&opts.output, template)?;
    Ok(Outcome::Written {
        path,
        bytes: template.len(),
    })
}

/// Create or truncate `path` with `template` and return its absolute path.
fn write_template(path: &Path, template: &str) -> Result<PathBuf, EmitError> {
    fs::write(path, template).map_err(|source| EmitError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = template.len(), "wrote template");

    resolve(path)
}

/// Absolute form of `path`: canonical when possible, otherwise joined onto
/// the working directory without touching the filesystem.
fn resolve(path: &Path) -> Result<PathBuf, EmitError> {
    fs::canonicalize(path).or_else(|err| {
        debug!(path = %path.display(), error = %err, "canonicalize failed, using absolute path");
        std::path::absolute(path).map_err(|source| EmitError::Resolve {
            path: path.to_path_buf(),
            source,
        })
    })
}

/// Drop `.` segments and redundant separators, keeping `..` as given.
fn normalize(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn opts(output: PathBuf) -> EmitOptions {
        EmitOptions {
            output,
            ..EmitOptions::default()
        }
    }

    #[test]
    fn test_default_options() {
        let o = EmitOptions::default();
        assert_eq!(o.output, PathBuf::from(".env"));
        assert!(!o.force);
        assert!(!o.show);
        assert_eq!(o.preset, Preset::Full);
    }

    #[test]
    fn test_writes_missing_destination() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join(".env");
        let mut out = Vec::new();

        let outcome = emit(&opts(target.clone()), &mut out).unwrap();

        let written = fs::read_to_string(&target).unwrap();
        assert_eq!(written, Preset::Full.template());
        assert!(out.is_empty());
        match outcome {
            Outcome::Written { path, bytes } => {
                assert!(path.is_absolute());
                assert_eq!(path, fs::canonicalize(&target).unwrap());
                assert_eq!(bytes, Preset::Full.template().len());
            }
            other => panic!("expected Written, got {other:?}"),
        }
    }

    #[test]
    fn test_existing_destination_is_left_alone() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join(".env");
        fs::write(&target, "KEEP=me\n").unwrap();

        let outcome = emit(&opts(target.clone()), &mut Vec::new()).unwrap();

        assert_eq!(outcome, Outcome::Skipped { path: target.clone() });
        assert_eq!(fs::read_to_string(&target).unwrap(), "KEEP=me\n");
    }

    #[test]
    fn test_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join(".env");
        fs::write(&target, "KEEP=me\n").unwrap();
        let o = EmitOptions {
            force: true,
            ..opts(target.clone())
        };

        let first = emit(&o, &mut Vec::new()).unwrap();
        let after_first = fs::read(&target).unwrap();
        let second = emit(&o, &mut Vec::new()).unwrap();

        assert!(matches!(first, Outcome::Written { .. }));
        assert_eq!(first, second);
        assert_eq!(after_first, Preset::Full.template().as_bytes());
        assert_eq!(fs::read(&target).unwrap(), after_first);
    }

    #[test]
    fn test_show_never_touches_filesystem() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.env");
        let existing = dir.path().join("existing.env");
        fs::write(&existing, "OLD=1\n").unwrap();

        for (path, force) in [(&missing, false), (&missing, true), (&existing, true)] {
            let o = EmitOptions {
                show: true,
                force,
                ..opts(path.clone())
            };
            let mut out = Vec::new();
            assert_eq!(emit(&o, &mut out).unwrap(), Outcome::Shown);
            assert_eq!(out, Preset::Full.template().as_bytes());
        }

        assert!(!missing.exists());
        assert_eq!(fs::read_to_string(&existing).unwrap(), "OLD=1\n");
    }

    #[test]
    fn test_minimal_preset() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join(".env.example");
        let o = EmitOptions {
            preset: Preset::Minimal,
            ..opts(target.clone())
        };

        emit(&o, &mut Vec::new()).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), Preset::Minimal.template());
    }

    #[test]
    fn test_missing_parent_directory_is_write_error() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("no/such/dir/.env");

        let err = emit(&opts(target), &mut Vec::new()).unwrap_err();

        assert!(matches!(err, EmitError::Write { .. }));
        assert_eq!(err.code(), "write_failed");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_skipped_path_is_normalized() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), "KEEP=me\n").unwrap();
        let dotted = dir.path().join(".").join(".env");

        let outcome = emit(&opts(dotted), &mut Vec::new()).unwrap();

        assert_eq!(
            outcome,
            Outcome::Skipped {
                path: dir.path().join(".env")
            }
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("./.env")), PathBuf::from(".env"));
        assert_eq!(normalize(Path::new("a//./b/")), PathBuf::from("a/b"));
        assert_eq!(normalize(Path::new("../x/.env")), PathBuf::from("../x/.env"));
        assert_eq!(normalize(Path::new(".")), PathBuf::from("."));
    }

    #[test]
    fn test_resolve_falls_back_to_absolute() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone").join(".env");

        let resolved = resolve(&missing).unwrap();

        assert!(resolved.is_absolute());
        assert_eq!(resolved, missing);
        assert!(resolve(Path::new("relative.env")).unwrap().is_absolute());
    }

    #[test]
    fn test_existing_directory_counts_as_existing() {
        let dir = TempDir::new().unwrap();

        let outcome = emit(&opts(dir.path().to_path_buf()), &mut Vec::new()).unwrap();

        assert!(matches!(outcome, Outcome::Skipped { .. }));
    }
}
