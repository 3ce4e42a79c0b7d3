use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, ToastLevel, open_store, update};
use crate::store::NoteStore;

pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl App {
    /// Load the notes, then run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored notes cannot be read or decoded
    /// (unless reset is enabled), or if the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        let (store, reset) = self.open_store()?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - jotter requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(store, (size.width, size.height));
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);
        if reset {
            model.show_toast(
                ToastLevel::Warning,
                "Stored notes were unreadable; saved a backup and started empty",
            );
        }

        let result = execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)
            .map_err(anyhow::Error::from)
            .and_then(|()| self.event_loop(&mut terminal, &mut model));

        // Restore terminal
        let _ = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture);
        ratatui::restore();

        result
    }

    pub(super) fn open_store(&self) -> Result<(NoteStore, bool)> {
        open_store(&self.store_dir, self.reset_corrupt)
    }

    fn event_loop(&self, terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let mut resize_debouncer = ResizeDebouncer::new(100);
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                model.ensure_selection_visible();
                needs_render = true;
            }

            let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                *model = update(std::mem::take(model), Message::Resize(width, height));
                needs_render = true;
            }

            // Handle events
            let poll_ms = if needs_render {
                0
            } else if resize_debouncer.is_pending() {
                10
            } else {
                250
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                // Drain everything queued so key repeat bursts become one render.
                loop {
                    let event_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                    let msg =
                        self.handle_event(&event::read()?, model, event_ms, &mut resize_debouncer);
                    if let Some(msg) = msg {
                        tracing::trace!(?msg, "message");
                        self.dispatch(model, msg);
                        needs_render = true;
                    }
                    if model.should_quit || !event::poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }

            if needs_render {
                terminal.draw(|frame| self.view(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Run one message through update and then its side effects.
    pub(super) fn dispatch(&self, model: &mut Model, msg: Message) {
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        self.handle_message_side_effects(model, &side_msg);
    }
}
