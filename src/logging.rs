//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so while it runs log output must go to a file
//! or nowhere. One-shot commands log to stderr.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Discard,
}

impl LogTarget {
    /// File when one is configured, otherwise stderr or nothing depending on
    /// whether the terminal is free.
    pub fn choose(log_file: Option<&Path>, terminal_in_use: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path.to_path_buf()),
            None if terminal_in_use => Self::Discard,
            None => Self::Stderr,
        }
    }

    const fn default_level(&self) -> Level {
        match self {
            Self::File(_) => Level::INFO,
            Self::Stderr | Self::Discard => Level::WARN,
        }
    }
}

/// Install the global subscriber. `RUST_LOG` directives are honored on top
/// of the target's default level.
///
/// # Errors
///
/// Fails if the log file cannot be created or a subscriber is already set.
pub fn init(target: &LogTarget) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(target.default_level().into());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match target {
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };
    installed.map_err(|err| anyhow!(err))
}
