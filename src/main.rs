//! Jotter - a small note-taking widget for the terminal.
//!
//! # Usage
//!
//! ```bash
//! jotter
//! jotter add Buy milk
//! jotter list --json
//! jotter --store ./notes clear --yes
//! ```

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use jotter::app::{App, open_store};
use jotter::cli::{CLEAR_PROMPT, Command, ask_yes_no, run_command};
use jotter::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use jotter::logging::{self, LogTarget};

/// A small note-taking widget for the terminal
#[derive(Parser, Debug)]
#[command(name = "jotter", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory holding the notes (default: platform data directory)
    #[arg(long, global = true, value_name = "DIR")]
    store: Option<PathBuf>,

    /// Write log events to a file
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Back up unreadable notes and start with an empty list
    #[arg(long, global = true)]
    reset_corrupt: bool,

    /// Save current command-line flags as defaults in the global config
    #[arg(long, global = true)]
    save_defaults: bool,

    /// Clear saved defaults in the global config
    #[arg(long, global = true)]
    clear_defaults: bool,
}

impl Cli {
    fn config_flags(&self) -> ConfigFlags {
        ConfigFlags {
            store: self.store.clone(),
            log_file: self.log_file.clone(),
            reset_corrupt: self.reset_corrupt,
        }
    }
}

fn run_one_shot(command: &Command, store_dir: &Path, reset_corrupt: bool) -> Result<()> {
    let (mut store, _) = open_store(store_dir, reset_corrupt)?;
    run_command(command, &mut store, &mut io::stdout(), || {
        ask_yes_no(CLEAR_PROMPT, &mut io::stdin().lock(), &mut io::stdout()).unwrap_or_else(
            |err| {
                tracing::warn!(error = %err, "could not read confirmation");
                false
            },
        )
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.config_flags();

    if cli.clear_defaults {
        clear_config_flags(&global_path)?;
    }
    if cli.save_defaults {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear_defaults {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    logging::init(&LogTarget::choose(
        effective.log_file.as_deref(),
        cli.command.is_none(),
    ))
    .context("Failed to initialize logging")?;

    let store_dir = effective.store_dir();
    tracing::info!(store = %store_dir.display(), "jotter starting");

    match &cli.command {
        Some(command) => run_one_shot(command, &store_dir, effective.reset_corrupt),
        None => {
            let mut app = App::new(store_dir)
                .with_reset_corrupt(effective.reset_corrupt)
                .with_config_paths(
                    Some(global_path.clone()),
                    if local_path.exists() {
                        Some(local_path.clone())
                    } else {
                        None
                    },
                );
            app.run().context("Application error")
        }
    }
}
