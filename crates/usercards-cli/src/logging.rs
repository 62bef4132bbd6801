//! Tracing subscriber setup.
//!
//! Console commands log to stderr. The interactive TUI owns the terminal, so
//! it logs to a file in the data directory instead.

use anyhow::Result;
use is_terminal::IsTerminal;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use crate::types::LogLevel;

pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

pub fn init(level: LogLevel, target: LogTarget<'_>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(level))
        .with_target(false);

    let result = match target {
        LogTarget::Stderr => builder
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
