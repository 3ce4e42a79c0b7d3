use crate::app::Model;
use crate::app::model::{ConfirmPrompt, Focus};
use crate::store::NoteId;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Input field
    /// Insert a character at the cursor
    InputChar(char),
    /// Insert pasted text at the cursor
    InputPaste(String),
    /// Delete character before cursor (Backspace)
    InputBackspace,
    /// Delete character at cursor (Delete)
    InputDelete,
    InputLeft,
    InputRight,
    InputHome,
    InputEnd,
    /// Move cursor one word left (Ctrl+Left)
    InputWordLeft,
    /// Move cursor one word right (Ctrl+Right)
    InputWordRight,
    /// Place the cursor at a display column (mouse click)
    InputClickAt(usize),
    /// Discard the composed text
    InputClear,

    // Notes
    /// Add the composed text as a note
    AddNote,
    /// Delete the note under the selection
    DeleteSelected,
    /// Delete a specific note (its delete control was activated)
    DeleteNote(NoteId),
    /// Ask before removing every note
    RequestClearAll,
    /// Answer the open confirmation prompt
    ConfirmAnswer(bool),
    /// Close the alert overlay
    DismissAlert,

    // List
    SelectUp,
    SelectDown,
    SelectFirst,
    SelectLast,
    /// Select a row by index (mouse click)
    SelectIndex(usize),

    // Focus
    FocusInput,
    FocusList,
    /// Switch focus between input and list
    SwitchFocus,

    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// Store mutations are side effects and happen afterwards in
/// `App::handle_message_side_effects`.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Input field
        Message::InputChar(ch) => model.input.insert_char(ch),
        Message::InputPaste(text) => model.input.insert_str(&text),
        Message::InputBackspace => {
            model.input.delete_back();
        }
        Message::InputDelete => {
            model.input.delete_forward();
        }
        Message::InputLeft => model.input.move_left(),
        Message::InputRight => model.input.move_right(),
        Message::InputHome => model.input.move_home(),
        Message::InputEnd => model.input.move_end(),
        Message::InputWordLeft => model.input.move_word_left(),
        Message::InputWordRight => model.input.move_word_right(),
        Message::InputClickAt(col) => {
            model.focus = Focus::Input;
            model.input.move_to_column(col);
        }
        Message::InputClear => model.input.clear(),

        // Notes: AddNote, DeleteSelected, DeleteNote and ConfirmAnswer touch
        // the store and are handled in effects.
        Message::AddNote
        | Message::DeleteSelected
        | Message::DeleteNote(_)
        | Message::ConfirmAnswer(_)
        | Message::Redraw => {}
        Message::RequestClearAll => {
            model.help_visible = false;
            model.confirm = Some(ConfirmPrompt::ClearAll);
        }
        Message::DismissAlert => {
            model.alert = None;
        }

        // List
        Message::SelectUp => {
            model.selected = Some(model.selected.map_or(0, |sel| sel.saturating_sub(1)));
            model.clamp_selection();
        }
        Message::SelectDown => {
            model.selected = Some(model.selected.map_or(0, |sel| sel + 1));
            model.clamp_selection();
        }
        Message::SelectFirst => {
            model.selected = Some(0);
            model.clamp_selection();
        }
        Message::SelectLast => {
            model.selected = Some(model.notes().len().saturating_sub(1));
            model.clamp_selection();
        }
        Message::SelectIndex(idx) => {
            if idx < model.notes().len() {
                model.focus = Focus::List;
                model.selected = Some(idx);
                model.ensure_selection_visible();
            }
        }

        // Focus
        Message::FocusInput => model.focus = Focus::Input,
        Message::FocusList => {
            model.focus = Focus::List;
            model.clamp_selection();
        }
        Message::SwitchFocus => {
            model.focus = match model.focus {
                Focus::Input => Focus::List,
                Focus::List => Focus::Input,
            };
            model.clamp_selection();
        }

        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }

        // Window
        Message::Resize(width, height) => {
            model.size = (width, height);
            model.ensure_selection_visible();
        }
        // Application
        Message::Quit => {
            model.should_quit = true;
        }
    }
    model
}
