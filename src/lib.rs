// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. store::StoreError)
    clippy::module_name_repetitions
)]

//! # Jotter
//!
//! A small note-taking widget for the terminal.
//!
//! Jotter keeps an ordered list of short notes and mirrors it, after every
//! change, into a JSON file under the user's data directory:
//! - Add a note from the input row
//! - Delete a note from its row
//! - Clear every note after confirmation
//! - Script the same operations through one-shot subcommands
//!
//! ## Architecture
//!
//! Jotter uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`store`]: Note collection and its key-value persistence
//! - [`ui`]: Terminal UI components
//! - [`editor`]: Single-line text input
//! - [`cli`]: One-shot subcommands
//! - [`config`]: Saved default flags and store location
//! - [`logging`]: Tracing subscriber setup

pub mod app;
pub mod cli;
pub mod config;
pub mod editor;
pub mod logging;
pub mod store;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::store::{FileStore, KeyValueStore, Note, NoteId, NoteStore, StoreError};
}
