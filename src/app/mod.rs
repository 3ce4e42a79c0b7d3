//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering
//!
//! Store mutations (add, delete, clear) are side effects applied after
//! `update`, so the model stays a plain value.

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{ConfirmPrompt, Focus, Model, ToastLevel};
pub use update::{Message, update};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::store::{FileStore, NoteStore};

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    store_dir: PathBuf,
    reset_corrupt: bool,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create a new application storing notes under `store_dir`.
    pub fn new(store_dir: PathBuf) -> Self {
        Self {
            store_dir,
            reset_corrupt: false,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Start empty, keeping a backup, when the stored notes cannot be decoded.
    pub const fn with_reset_corrupt(mut self, enabled: bool) -> Self {
        self.reset_corrupt = enabled;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}

/// Open and load the file-backed store under `store_dir`. Returns whether a
/// corrupt store was reset.
///
/// # Errors
///
/// Returns an error if the stored notes cannot be read, or cannot be decoded
/// while `reset_corrupt` is off.
pub fn open_store(store_dir: &Path, reset_corrupt: bool) -> Result<(NoteStore, bool)> {
    let mut store = NoteStore::new(FileStore::new(store_dir));
    let reset = if reset_corrupt {
        store
            .load_or_reset()
            .with_context(|| format!("Failed to load notes from {}", store.location()))?
    } else {
        store
            .load()
            .with_context(|| format!("Failed to load notes from {}", store.location()))?;
        false
    };
    tracing::info!(count = store.len(), location = %store.location(), "store opened");
    Ok((store, reset))
}

#[cfg(test)]
mod tests;
