//! Tracing subscriber setup for the binary.
//!
//! The library only emits `tracing` events. The binary decides where they
//! go: stderr for plain commands, the configured log file (or nowhere) while
//! the terminal view owns the screen.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Where log output should go for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Write to stderr unless a log file is configured
    Stderr,
    /// The terminal is taken; only a configured log file is usable
    FileOnly,
}

/// Filter directive for a `-v` count, if any.
pub fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("autocue=info"),
        2 => Some("autocue=debug"),
        _ => Some("autocue=trace"),
    }
}

/// Build the event filter: `RUST_LOG` first, then `-v`, then the config.
pub fn build_filter(config: &LogConfig, verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let directive = verbosity_directive(verbose).unwrap_or(config.level.as_str());
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber.
///
/// Does nothing if a subscriber is already installed.
#[cfg(not(tarpaulin_include))]
pub fn init(config: &LogConfig, verbose: u8, sink: LogSink) -> Result<()> {
    let filter = build_filter(config, verbose);

    match (&config.file, sink) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        (None, LogSink::Stderr) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
        (None, LogSink::FileOnly) => {}
    }

    Ok(())
}
