/// Logging setup: a `tracing` fmt subscriber on stderr.
///
/// Stdout carries the template under `--show`, so logs never go there.
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(debug: bool) -> &'static str {
    if debug { "debug" } else { "warn" }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "debug");
        assert!(default_directive(true).parse::<tracing_subscriber::filter::Directive>().is_ok());
    }
}
