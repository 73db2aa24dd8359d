//! Tracing subscriber setup.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// No subscriber at all
    Discard,
}

/// Pick the log destination. The terminal viewer owns the screen, so it
/// only ever logs to a file.
pub fn log_target(log_file: Option<&Path>, interactive: bool) -> LogTarget<'_> {
    match (log_file, interactive) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Discard,
        (None, false) => LogTarget::Stderr,
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    filter_from(&directives, verbose)
}

/// `RUST_LOG`-style directives; the verbosity level only applies when they
/// set no global level
fn filter_from(directives: &str, verbose: bool) -> EnvFilter {
    let default_level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(directives)
}

/// Install the global subscriber
pub fn init(target: LogTarget<'_>, verbose: bool) -> std::io::Result<()> {
    match target {
        LogTarget::Discard => {}
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(verbose))
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogTarget::File(path) => {
            let file: File = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(verbose))
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
    }
    Ok(())
}
