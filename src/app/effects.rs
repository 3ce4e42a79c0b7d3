use crate::app::model::{ConfirmPrompt, Focus};
use crate::app::{App, Message, Model, ToastLevel};
use crate::store::NoteId;

impl App {
    /// Apply the store mutations a message asks for.
    pub(super) fn handle_message_side_effects(&self, model: &mut Model, msg: &Message) {
        match msg {
            Message::AddNote => Self::add_note(model),
            Message::DeleteSelected => {
                if let Some(id) = model.selected_note_id() {
                    Self::delete_note(model, id);
                }
            }
            Message::DeleteNote(id) => Self::delete_note(model, *id),
            Message::ConfirmAnswer(answer) => {
                if let Some(prompt) = model.confirm.take() {
                    Self::resolve_prompt(model, prompt, *answer);
                }
            }
            _ => {}
        }
    }

    fn add_note(model: &mut Model) {
        let text = model.input.text().to_string();
        match model.store.add(&text) {
            Ok(note) => {
                tracing::info!(id = note.id, "note added");
                model.input.clear();
                if model.focus == Focus::List {
                    model.selected = Some(model.notes().len() - 1);
                }
                model.clamp_selection();
            }
            Err(err) => {
                model.report_store_error(&err);
                model.clamp_selection();
            }
        }
    }

    fn delete_note(model: &mut Model, id: NoteId) {
        match model.store.delete(id) {
            Ok(true) => {
                tracing::info!(id, "note deleted");
                model.show_toast(ToastLevel::Info, "Note deleted");
            }
            Ok(false) => {}
            Err(err) => model.report_store_error(&err),
        }
        model.clamp_selection();
    }

    fn resolve_prompt(model: &mut Model, prompt: ConfirmPrompt, answer: bool) {
        match prompt {
            ConfirmPrompt::ClearAll => {
                let count = model.notes().len();
                match model.store.clear_all(|| answer) {
                    Ok(true) => {
                        tracing::info!(count, "all notes cleared");
                        model.selected = None;
                        model.list_scroll_offset = 0;
                        model.show_toast(ToastLevel::Info, format!("Cleared {count} notes"));
                    }
                    Ok(false) => {}
                    Err(err) => model.report_store_error(&err),
                }
                model.clamp_selection();
            }
        }
    }
}
