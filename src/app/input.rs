use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::model::Focus;
use crate::app::{App, Message, Model};
use crate::ui::{DELETE_LABEL, MIN_ROW_WIDTH_WITH_DELETE, bordered_inner, list_inner, list_window_start, point_in_rect, screen_layout};

use super::event_loop::ResizeDebouncer;

/// What a click on the note list landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ListHit {
    Row(usize),
    Delete(usize),
}

impl App {
    pub(super) fn handle_event(
        &self,
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(*key, model),
            Event::Mouse(mouse) => self.handle_mouse(*mouse, model),
            Event::Paste(text) if model.focus == Focus::Input && !model.modal_active() => {
                Some(Message::InputPaste(text.clone()))
            }
            Event::Resize(w, h) => {
                tracing::trace!(width = w, height = h, "resize queued");
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(&self, key: KeyEvent, model: &Model) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Blocking prompts swallow everything until answered.
        if model.alert.is_some() {
            return Some(Message::DismissAlert);
        }
        if model.confirm.is_some() {
            return match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Message::ConfirmAnswer(true)),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Message::ConfirmAnswer(false)),
                KeyCode::Char('c') if ctrl => Some(Message::ConfirmAnswer(false)),
                _ => None,
            };
        }
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        // Bindings that work from either control
        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => return Some(Message::Quit),
            KeyCode::Char('x') if ctrl => return Some(Message::RequestClearAll),
            KeyCode::F(1) => return Some(Message::ToggleHelp),
            _ => {}
        }

        match model.focus {
            Focus::Input => Self::handle_input_key(key),
            Focus::List => Self::handle_list_key(key),
        }
    }

    fn handle_input_key(key: KeyEvent) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => Some(Message::AddNote),
            KeyCode::Esc => Some(Message::InputClear),
            KeyCode::Tab | KeyCode::Down => Some(Message::FocusList),
            KeyCode::Backspace => Some(Message::InputBackspace),
            KeyCode::Delete => Some(Message::InputDelete),
            KeyCode::Left if ctrl => Some(Message::InputWordLeft),
            KeyCode::Right if ctrl => Some(Message::InputWordRight),
            KeyCode::Left => Some(Message::InputLeft),
            KeyCode::Right => Some(Message::InputRight),
            KeyCode::Home => Some(Message::InputHome),
            KeyCode::End => Some(Message::InputEnd),
            KeyCode::Char('a') if ctrl => Some(Message::InputHome),
            KeyCode::Char('e') if ctrl => Some(Message::InputEnd),
            KeyCode::Char('u') if ctrl => Some(Message::InputClear),
            KeyCode::Char(c)
                if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(Message::InputChar(c))
            }
            _ => None,
        }
    }

    fn handle_list_key(key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Message::SelectDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::SelectUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Message::SelectFirst),
            KeyCode::Char('G') | KeyCode::End => Some(Message::SelectLast),
            KeyCode::Char('d' | 'x') | KeyCode::Delete | KeyCode::Backspace => {
                Some(Message::DeleteSelected)
            }
            KeyCode::Char('X') => Some(Message::RequestClearAll),
            KeyCode::Tab | KeyCode::Esc | KeyCode::Char('i' | 'a') => Some(Message::FocusInput),
            KeyCode::Char('?') => Some(Message::ToggleHelp),
            KeyCode::Char('q') => Some(Message::Quit),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(&self, mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.alert.is_some() {
            return matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left))
                .then_some(Message::DismissAlert);
        }
        if model.confirm.is_some() {
            return None;
        }
        if model.help_visible {
            return matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left))
                .then_some(Message::HideHelp);
        }

        let area = Rect::new(0, 0, model.size.0, model.size.1);
        let layout = screen_layout(area, model.active_toast().is_some());

        match mouse.kind {
            MouseEventKind::Up(MouseButton::Left) => {
                if point_in_rect(mouse.column, mouse.row, layout.add_button) {
                    return Some(Message::AddNote);
                }
                if point_in_rect(mouse.column, mouse.row, layout.clear_button) {
                    return Some(Message::RequestClearAll);
                }
                if point_in_rect(mouse.column, mouse.row, layout.input) {
                    let inner = bordered_inner(layout.input);
                    let col = mouse.column.saturating_sub(inner.x) as usize;
                    let col = model.input.column_for_click(inner.width as usize, col);
                    return Some(Message::InputClickAt(col));
                }
                match list_hit(model, layout.list, mouse.column, mouse.row)? {
                    ListHit::Delete(idx) => model.notes().get(idx).map(|n| Message::DeleteNote(n.id)),
                    ListHit::Row(idx) => Some(Message::SelectIndex(idx)),
                }
            }
            MouseEventKind::ScrollUp if point_in_rect(mouse.column, mouse.row, layout.list) => {
                Some(Message::SelectUp)
            }
            MouseEventKind::ScrollDown if point_in_rect(mouse.column, mouse.row, layout.list) => {
                Some(Message::SelectDown)
            }
            _ => None,
        }
    }

    pub(super) fn view(&self, model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}

/// Map a screen cell inside the list to a note row or its delete control.
pub(super) fn list_hit(model: &Model, list: Rect, col: u16, row: u16) -> Option<ListHit> {
    let inner = list_inner(list);
    if !point_in_rect(col, row, inner) {
        return None;
    }
    let visible = inner.height as usize;
    let start = list_window_start(model.notes().len(), model.list_scroll_offset, visible);
    let idx = start + (row - inner.y) as usize;
    if idx >= model.notes().len() {
        return None;
    }
    if (inner.width as usize) < MIN_ROW_WIDTH_WITH_DELETE {
        return Some(ListHit::Row(idx));
    }
    #[allow(clippy::cast_possible_truncation)]
    // The label is a short ASCII constant.
    let label_width = DELETE_LABEL.len() as u16;
    if col >= (inner.x + inner.width).saturating_sub(label_width) {
        Some(ListHit::Delete(idx))
    } else {
        Some(ListHit::Row(idx))
    }
}
