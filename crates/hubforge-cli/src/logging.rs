//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so JSON output on stdout stays machine-readable.
//! `RUST_LOG` overrides the level chosen from the `--verbose` flag.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Pick the default level for our crates from the verbosity flag.
pub fn level_for(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

/// Install the global subscriber.
pub fn init(verbose: bool) {
    let filter = build_env_filter(level_for(verbose));

    // A subscriber may already be set (e.g. in tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`.
fn build_env_filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_lowercase();

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // External crates stay at warn to reduce noise
        EnvFilter::new(format!("warn,hubforge={level},hubforge_cli={level}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(false), Level::WARN);
        assert_eq!(level_for(true), Level::DEBUG);
    }
}
