use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::editor::InputBuffer;
use crate::store::{Note, NoteId, NoteStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Which control receives keystrokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Input,
    List,
}

/// A question that blocks all other input until answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPrompt {
    ClearAll,
}

impl ConfirmPrompt {
    pub const fn title(self) -> &'static str {
        match self {
            Self::ClearAll => "Clear all notes",
        }
    }

    pub const fn question(self) -> &'static str {
        match self {
            Self::ClearAll => crate::cli::CLEAR_PROMPT,
        }
    }
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// Notes and their persistent mirror
    pub store: NoteStore,
    /// Text being composed in the input field
    pub input: InputBuffer,
    pub focus: Focus,
    /// Selected row in the note list
    pub selected: Option<usize>,
    /// First note row shown in the list
    pub list_scroll_offset: usize,
    /// Terminal size (width, height)
    pub size: (u16, u16),
    /// Blocking alert text (validation failures)
    pub alert: Option<String>,
    /// Pending confirmation
    pub confirm: Option<ConfirmPrompt>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    /// Create a model over an already loaded store.
    pub fn new(store: NoteStore, terminal_size: (u16, u16)) -> Self {
        Self {
            store,
            size: terminal_size,
            ..Self::default()
        }
    }

    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.selected.and_then(|idx| self.notes().get(idx))
    }

    pub fn selected_note_id(&self) -> Option<NoteId> {
        self.selected_note().map(|note| note.id)
    }

    /// True while an alert or confirmation holds the input.
    pub const fn modal_active(&self) -> bool {
        self.alert.is_some() || self.confirm.is_some()
    }

    /// Number of note rows that fit in the list.
    pub fn list_visible_rows(&self) -> usize {
        let area = ratatui::layout::Rect::new(0, 0, self.size.0, self.size.1);
        let layout = crate::ui::screen_layout(area, self.active_toast().is_some());
        crate::ui::list_inner(layout.list).height as usize
    }

    /// Keep the selection inside the collection and on screen.
    pub fn clamp_selection(&mut self) {
        let len = self.notes().len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None if self.focus == Focus::List => Some(0),
            None => None,
        };
        self.ensure_selection_visible();
    }

    pub fn ensure_selection_visible(&mut self) {
        let visible = self.list_visible_rows();
        let max_offset = self.notes().len().saturating_sub(visible);
        self.list_scroll_offset = self.list_scroll_offset.min(max_offset);
        let Some(sel) = self.selected else {
            return;
        };
        if visible == 0 {
            self.list_scroll_offset = sel;
        } else if sel < self.list_scroll_offset {
            self.list_scroll_offset = sel;
        } else if sel >= self.list_scroll_offset + visible {
            self.list_scroll_offset = sel + 1 - visible;
        }
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }

    /// Surface a store failure: validation errors block as an alert,
    /// storage errors are logged and shown as a toast.
    pub(super) fn report_store_error(&mut self, err: &StoreError) {
        if err.is_validation() {
            self.alert = Some(err.to_string());
        } else {
            tracing::error!(error = %err, location = %self.store.location(), "store operation failed");
            self.show_toast(ToastLevel::Error, err.user_message());
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self {
            store: NoteStore::default(),
            input: InputBuffer::empty(),
            focus: Focus::Input,
            selected: None,
            list_scroll_offset: 0,
            size: (80, 24),
            alert: None,
            confirm: None,
            help_visible: false,
            config_global_path: None,
            config_local_path: None,
            toast: None,
            should_quit: false,
        }
    }
}
