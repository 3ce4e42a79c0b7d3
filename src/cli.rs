//! One-shot commands that work on the store without opening the TUI.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::store::{NoteId, NoteStore};

/// Question asked before every note is removed.
pub const CLEAR_PROMPT: &str =
    "Are you sure you want to clear all notes? This action cannot be undone.";

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a note and print its id
    Add {
        /// Note text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1.., value_name = "TEXT")]
        text: Vec<String>,
    },
    /// List notes in display order
    List {
        /// Print the stored JSON array instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Delete the note with the given id
    Delete {
        #[arg(value_name = "ID")]
        id: NoteId,
    },
    /// Remove every note
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Print where the notes are stored
    Path,
}

/// Run `command` against `store`, writing user-facing output to `out`.
///
/// `confirm` is asked before clearing unless `--yes` was given.
///
/// # Errors
///
/// Returns an error for rejected input (empty note text) and for failed
/// writes to the store.
pub fn run_command(
    command: &Command,
    store: &mut NoteStore,
    out: &mut impl Write,
    confirm: impl FnOnce() -> bool,
) -> Result<()> {
    match command {
        Command::Add { text } => {
            let note = store.add(&text.join(" "))?;
            tracing::debug!(id = note.id, "note added");
            writeln!(out, "{}", note.id)?;
        }
        Command::List { json } => {
            if *json {
                let raw = serde_json::to_string_pretty(store.notes())
                    .context("Failed to encode notes")?;
                writeln!(out, "{raw}")?;
            } else if store.is_empty() {
                writeln!(out, "No notes yet.")?;
            } else {
                for note in store.notes() {
                    writeln!(out, "{}  {}", note.id, note.text)?;
                }
            }
        }
        Command::Delete { id } => {
            if store.delete(*id)? {
                writeln!(out, "Deleted note {id}")?;
            } else {
                writeln!(out, "No note with id {id}")?;
            }
        }
        Command::Clear { yes } => {
            let count = store.len();
            let cleared = if *yes {
                store.clear_all(|| true)?
            } else {
                store.clear_all(confirm)?
            };
            if cleared {
                writeln!(out, "Cleared {count} notes")?;
            } else {
                writeln!(out, "Cancelled")?;
            }
        }
        Command::Path => writeln!(out, "{}", store.location())?,
    }
    Ok(())
}

/// Ask a y/N question. Anything but `y`/`yes` (any case) is a no, as is
/// end of input.
///
/// # Errors
///
/// Returns an error if the prompt cannot be written or the answer read.
pub fn ask_yes_no(question: &str, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<bool> {
    write!(out, "{question} [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
